//! Featured-recipe carousel with autoplay.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page feeds the first few recipes in here. A background task
//! advances the slide on a fixed interval and stops on unmount; manual
//! navigation and the dot indicators write the same index signal.

use leptos::prelude::*;

use models::Recipe;

use crate::util::carousel::{next_index, prev_index, reset_index};
use crate::util::format::{CAROUSEL_DESCRIPTION_LEN, category_href, truncate};

#[component]
pub fn RecipeCarousel(#[prop(into)] recipes: Signal<Vec<Recipe>>) -> impl IntoView {
    let current = RwSignal::new(0_usize);

    // Keep the index valid when the slide list shrinks.
    Effect::new(move || {
        let len = recipes.get().len();
        current.update(|c| *c = reset_index(*c, len));
    });

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(
                    crate::util::carousel::AUTOPLAY_SECS,
                ))
                .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let len = recipes.get_untracked().len();
                if len == 0 {
                    continue;
                }
                current.update(|c| *c = next_index(*c, len));
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let go_prev = move |_| {
        let len = recipes.get_untracked().len();
        current.update(|c| *c = prev_index(*c, len));
    };
    let go_next = move |_| {
        let len = recipes.get_untracked().len();
        current.update(|c| *c = next_index(*c, len));
    };

    view! {
        <Show when=move || !recipes.get().is_empty()>
            <div class="carousel">
                {move || {
                    let slides = recipes.get();
                    let index = reset_index(current.get(), slides.len());
                    slides.get(index).cloned().map(|recipe| {
                        let image = recipe
                            .image_url
                            .unwrap_or_else(|| "/placeholder.svg".to_owned());
                        let description = recipe
                            .description
                            .map(|d| truncate(&d, CAROUSEL_DESCRIPTION_LEN))
                            .unwrap_or_default();
                        let detail_href = format!("/recipe/{}", recipe.id);
                        view! {
                            <div class="carousel__slide">
                                <img class="carousel__image" src=image alt=recipe.title.clone()/>
                                <div class="carousel__overlay">
                                    <h2 class="carousel__title">{recipe.title}</h2>
                                    <p class="carousel__description">{description}</p>
                                    <div class="carousel__meta">
                                        {recipe.prep_time.map(|t| {
                                            view! {
                                                <span class="carousel__meta-item">"⏱ " {t}</span>
                                            }
                                        })}
                                        {recipe.servings.map(|s| {
                                            view! {
                                                <span class="carousel__meta-item">
                                                    "👥 " {s} " servings"
                                                </span>
                                            }
                                        })}
                                        {recipe.category_name.map(|name| {
                                            view! {
                                                <a
                                                    class="carousel__category"
                                                    href=category_href(&name)
                                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                                        ev.stop_propagation();
                                                    }
                                                >
                                                    {name.clone()}
                                                </a>
                                            }
                                        })}
                                    </div>
                                    <a class="btn btn--primary carousel__cta" href=detail_href>
                                        "View recipe"
                                    </a>
                                </div>
                            </div>
                        }
                    })
                }}

                <button
                    class="carousel__nav carousel__nav--prev"
                    on:click=go_prev
                    aria-label="Previous recipe"
                >
                    "‹"
                </button>
                <button
                    class="carousel__nav carousel__nav--next"
                    on:click=go_next
                    aria-label="Next recipe"
                >
                    "›"
                </button>

                <div class="carousel__dots">
                    {move || {
                        let len = recipes.get().len();
                        (0..len)
                            .map(|index| {
                                view! {
                                    <button
                                        class="carousel__dot"
                                        class:carousel__dot--active=move || {
                                            current.get() == index
                                        }
                                        on:click=move |_| current.set(index)
                                        aria-label=format!("Go to slide {}", index + 1)
                                    ></button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </Show>
    }
}

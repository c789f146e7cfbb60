//! Recipe detail page: full info, rating, favorite, and comments.
//!
//! ARCHITECTURE
//! ============
//! The route parameter drives one load effect that fetches the recipe,
//! its comments, the rating aggregate, and (for a signed-in viewer) their
//! own rating and favorite flag. Everything else is handler-driven state.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use models::{Comment, RatingSummary, Recipe};

use crate::components::avatar::Avatar;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::star_rating::StarRating;
use crate::components::toast;
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState};
use crate::util::format::comment_timestamp;

#[component]
pub fn RecipeDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let recipe = RwSignal::new(None::<Recipe>);
    let loading = RwSignal::new(true);
    let comments = RwSignal::new(Vec::<Comment>::new());
    let comment_text = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let summary = RwSignal::new(RatingSummary::default());
    let my_rating = RwSignal::new(None::<u8>);
    let is_favorite = RwSignal::new(false);
    let delete_comment_id = RwSignal::new(None::<String>);
    let deleting_comment = RwSignal::new(false);

    let recipe_id = move || params.read().get("id").unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        // Reload when the route id or the signed-in user changes.
        let last_load = RwSignal::new(None::<(String, Option<String>)>);
        Effect::new(move || {
            let id = recipe_id();
            let user_id = auth.get().user_id();
            if id.is_empty() {
                return;
            }
            let key = (id.clone(), user_id.clone());
            if last_load.get_untracked().as_ref() == Some(&key) {
                return;
            }
            last_load.set(Some(key));

            leptos::task::spawn_local(async move {
                loading.set(true);
                recipe.set(crate::net::api::fetch_recipe(&id).await);
                loading.set(false);

                if let Some(list) = crate::net::api::fetch_comments(&id).await {
                    comments.set(list);
                }
                if let Some(aggregate) = crate::net::api::fetch_rating_summary(&id).await {
                    summary.set(aggregate);
                }
                if let Some(user_id) = user_id {
                    if let Some(mine) = crate::net::api::fetch_my_rating(&user_id, &id).await {
                        my_rating.set(mine.rating);
                    }
                    if let Some(favs) = crate::net::api::fetch_favorites(&user_id).await {
                        is_favorite.set(favs.iter().any(|f| f.recipe_id == id));
                    }
                }
            });
        });
    }

    let on_rate = Callback::new(move |value: u8| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            toast::show(ui, ToastKind::Error, "Sign in to rate recipes");
            return;
        };
        let id = recipe_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::rate_recipe(&user_id, &id, value).await {
                Ok(()) => {
                    my_rating.set(Some(value));
                    if let Some(refreshed) = crate::net::api::fetch_rating_summary(&id).await {
                        summary.set(refreshed);
                    }
                }
                Err(e) => toast::show(ui, ToastKind::Error, e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, id, value);
        }
    });

    let on_favorite = move |_| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            toast::show(ui, ToastKind::Error, "Sign in to save favorites");
            return;
        };
        let id = recipe_id();
        let currently = is_favorite.get_untracked();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::toggle_favorite(&user_id, &id, currently).await {
                Ok(now) => is_favorite.set(now),
                Err(e) => toast::show(ui, ToastKind::Error, e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, id, currently);
        }
    };

    let on_submit_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let Some(user) = auth.get_untracked().user else {
            toast::show(ui, ToastKind::Error, "Sign in to comment");
            return;
        };
        let content = comment_text.get().trim().to_owned();
        if content.is_empty() {
            return;
        }
        submitting.set(true);
        let id = recipe_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::post_comment(&id, &user.id, &content).await {
                Ok(mut created) => {
                    // The backend echoes the row without author fields; fill
                    // them from the session for immediate display.
                    created.user_name = user.name;
                    created.user_avatar = user.avatar_url;
                    comments.update(|list| list.insert(0, created));
                    comment_text.set(String::new());
                }
                Err(e) => toast::show(ui, ToastKind::Error, e),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, user, content);
            submitting.set(false);
        }
    };

    let on_delete_cancel = Callback::new(move |()| delete_comment_id.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(comment_id) = delete_comment_id.get_untracked() else {
            return;
        };
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        if deleting_comment.get_untracked() {
            return;
        }
        deleting_comment.set(true);
        let id = recipe_id();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_comment(&id, &comment_id, &user_id).await {
                Ok(()) => {
                    comments.update(|list| list.retain(|c| c.id != comment_id));
                    delete_comment_id.set(None);
                }
                Err(e) => toast::show(ui, ToastKind::Error, e),
            }
            deleting_comment.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, comment_id, user_id);
            deleting_comment.set(false);
        }
    });

    let back = navigate.clone();
    let on_back = move |_| back("/", NavigateOptions::default());

    let nav_edit = navigate.clone();
    let nav_author = navigate.clone();

    view! {
        <div class="detail-page">
            <button class="btn detail-page__back" on:click=on_back>
                "← Back"
            </button>

            <Show when=move || loading.get()>
                <p class="detail-page__status">"Loading recipe..."</p>
            </Show>

            <Show when=move || !loading.get() && recipe.get().is_none()>
                <div class="detail-page__missing">
                    <h1>"Recipe not found"</h1>
                    <a class="btn btn--primary" href="/">"Back to home"</a>
                </div>
            </Show>

            {move || {
                let nav_edit = nav_edit.clone();
                let nav_author = nav_author.clone();
                recipe.get().map(|r| {
                    let image = r.image_url.clone().unwrap_or_else(|| "/placeholder.svg".to_owned());
                    let is_owner = auth.get().user_id().as_deref() == Some(r.user_id.as_str());
                    let edit_path = format!("/recipe/{}/edit", r.id);
                    let author_path = format!("/user/{}", r.user_id);
                    let ingredients = r.ingredients.clone().unwrap_or_default();
                    let preparation = r.preparation.clone().unwrap_or_default();

                    view! {
                        <div class="detail-page__hero">
                            <img class="detail-page__image" src=image alt=r.title.clone()/>

                            <div class="detail-page__info">
                                {r.category_name.clone().map(|name| {
                                    view! { <span class="detail-page__badge">{name}</span> }
                                })}
                                <h1 class="detail-page__title">{r.title.clone()}</h1>

                                <div class="detail-page__rating">
                                    <StarRating
                                        rating=my_rating
                                        can_rate=Signal::derive(move || {
                                            auth.get().is_authenticated()
                                        })
                                        on_rate=on_rate
                                    />
                                    <span class="detail-page__rating-average">
                                        {move || {
                                            let s = summary.get();
                                            format!("{:.1} ({} ratings)", s.average, s.count)
                                        }}
                                    </span>
                                    <button
                                        class="detail-page__heart"
                                        class:detail-page__heart--active=move || is_favorite.get()
                                        on:click=on_favorite
                                        title="Save to favorites"
                                    >
                                        {move || if is_favorite.get() { "♥" } else { "♡" }}
                                    </button>
                                </div>

                                {r.description.clone().map(|text| {
                                    view! { <p class="detail-page__description">{text}</p> }
                                })}

                                <Show when=move || is_owner>
                                    {
                                        let nav_edit = nav_edit.clone();
                                        let edit_path = edit_path.clone();
                                        view! {
                                            <button
                                                class="btn btn--primary detail-page__edit"
                                                on:click=move |_| {
                                                    nav_edit(&edit_path, NavigateOptions::default());
                                                }
                                            >
                                                "Edit recipe"
                                            </button>
                                        }
                                    }
                                </Show>

                                <button
                                    class="detail-page__author"
                                    on:click={
                                        let nav_author = nav_author.clone();
                                        let author_path = author_path.clone();
                                        move |_| {
                                            nav_author(&author_path, NavigateOptions::default());
                                        }
                                    }
                                >
                                    <Avatar
                                        name=r.user_name.clone()
                                        src=r.user_avatar.clone()
                                        large=true
                                    />
                                    <span>"Recipe by " {r.user_name.clone()}</span>
                                </button>

                                <div class="detail-page__facts">
                                    <div class="detail-page__fact">
                                        <span class="detail-page__fact-label">"Prep"</span>
                                        <span>{r.prep_time.clone().unwrap_or_else(|| "—".to_owned())}</span>
                                    </div>
                                    <div class="detail-page__fact">
                                        <span class="detail-page__fact-label">"Cook"</span>
                                        <span>{r.cook_time.clone().unwrap_or_else(|| "—".to_owned())}</span>
                                    </div>
                                    <div class="detail-page__fact">
                                        <span class="detail-page__fact-label">"Servings"</span>
                                        <span>
                                            {r.servings.map_or_else(
                                                || "—".to_owned(),
                                                |s| format!("{s} people"),
                                            )}
                                        </span>
                                    </div>
                                    <div class="detail-page__fact">
                                        <span class="detail-page__fact-label">"Difficulty"</span>
                                        <span>
                                            {r.difficulty.map_or("Not specified", |d| d.label())}
                                        </span>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="detail-page__columns">
                            <section class="detail-page__card">
                                <h2>"Ingredients"</h2>
                                {if ingredients.is_empty() {
                                    view! {
                                        <p class="detail-page__muted">"No ingredients listed"</p>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <ul class="detail-page__ingredients">
                                            {ingredients
                                                .into_iter()
                                                .map(|ing| {
                                                    view! {
                                                        <li>
                                                            <strong>{ing.name}</strong>
                                                            ": "
                                                            {ing.amount}
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                    .into_any()
                                }}
                            </section>

                            <section class="detail-page__card">
                                <h2>"Preparation"</h2>
                                {if preparation.trim().is_empty() {
                                    view! {
                                        <p class="detail-page__muted">
                                            "No preparation summary available"
                                        </p>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <p class="detail-page__preparation">{preparation}</p>
                                    }
                                    .into_any()
                                }}
                            </section>
                        </div>
                    }
                })
            }}

            <Show when=move || !loading.get() && recipe.get().is_some()>
                <section class="detail-page__card detail-page__comments">
                    <h2>"Comments"</h2>
                    <Show
                        when=move || !comments.get().is_empty()
                        fallback=move || {
                            view! {
                                <p class="detail-page__muted">
                                    "Be the first to comment on this recipe."
                                </p>
                            }
                        }
                    >
                        <ul class="comment-list">
                            {move || {
                                comments
                                    .get()
                                    .into_iter()
                                    .map(|comment| {
                                        let own = auth.get().user_id().as_deref()
                                            == Some(comment.user_id.as_str());
                                        let comment_id = comment.id.clone();
                                        let author_href = format!("/user/{}", comment.user_id);
                                        view! {
                                            <li class="comment-list__item">
                                                <Avatar
                                                    name=comment.user_name.clone()
                                                    src=comment.user_avatar.clone()
                                                />
                                                <div class="comment-list__body">
                                                    <span class="comment-list__byline">
                                                        <a href=author_href>{comment.user_name}</a>
                                                        {comment_timestamp(&comment.created_at)
                                                            .map(|ts| {
                                                                view! {
                                                                    <span class="comment-list__date">
                                                                        {ts}
                                                                    </span>
                                                                }
                                                            })}
                                                        <Show when=move || own>
                                                            {
                                                                let comment_id = comment_id.clone();
                                                                view! {
                                                                    <button
                                                                        class="comment-list__delete"
                                                                        aria-label="Delete comment"
                                                                        on:click=move |_| {
                                                                            delete_comment_id
                                                                                .set(Some(comment_id.clone()));
                                                                        }
                                                                    >
                                                                        "🗑"
                                                                    </button>
                                                                }
                                                            }
                                                        </Show>
                                                    </span>
                                                    <p class="comment-list__content">
                                                        {comment.content}
                                                    </p>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>

                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=move || {
                            view! {
                                <p class="detail-page__muted">"Sign in to comment"</p>
                            }
                        }
                    >
                        <form class="comment-form" on:submit=on_submit_comment>
                            <textarea
                                class="comment-form__input"
                                placeholder="Add a comment"
                                prop:value=move || comment_text.get()
                                on:input=move |ev| comment_text.set(event_target_value(&ev))
                            ></textarea>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || {
                                    submitting.get()
                                        || comment_text.get().trim().is_empty()
                                }
                            >
                                "Comment"
                            </button>
                        </form>
                    </Show>
                </section>
            </Show>

            <Show when=move || delete_comment_id.get().is_some()>
                <ConfirmDialog
                    title="Are you sure?"
                    message="This cannot be undone. The comment will be permanently deleted."
                        .to_owned()
                    confirm_label="Delete"
                    busy=deleting_comment
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </div>
    }
}

//! Edit-recipe page: loads the recipe, verifies ownership, then reuses the
//! shared form in edit mode.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use models::Recipe;

use crate::components::recipe_form::RecipeForm;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::guard::install_guest_redirect;

#[component]
pub fn EditRecipePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    install_guest_redirect(auth, "/", navigate.clone());

    let recipe = RwSignal::new(None::<Recipe>);
    let loading = RwSignal::new(true);

    let recipe_id = move || params.read().get("id").unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        let go_home = navigate.clone();
        let loaded = RwSignal::new(false);
        Effect::new(move || {
            let id = recipe_id();
            let Some(user_id) = auth.get().user_id() else {
                return;
            };
            if id.is_empty() || loaded.get_untracked() {
                return;
            }
            loaded.set(true);

            let go_home = go_home.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_recipe(&id).await {
                    Some(found) if found.user_id == user_id => recipe.set(Some(found)),
                    Some(_) => {
                        crate::components::toast::show(
                            ui,
                            crate::state::ui::ToastKind::Error,
                            "You cannot edit this recipe",
                        );
                        go_home("/", NavigateOptions::default());
                    }
                    None => crate::components::toast::show(
                        ui,
                        crate::state::ui::ToastKind::Error,
                        "Could not load the recipe",
                    ),
                }
                loading.set(false);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (ui, recipe_id);

    let to_detail = navigate.clone();
    let on_success = Callback::new(move |id: String| {
        to_detail(&format!("/recipe/{id}"), NavigateOptions::default());
    });

    view! {
        <div class="form-page">
            <header class="form-page__header">
                <h1>"Edit recipe"</h1>
            </header>

            <Show when=move || loading.get()>
                <p class="form-page__status">"Loading recipe..."</p>
            </Show>

            {move || {
                recipe.get().map(|r| {
                    let user_id = r.user_id.clone();
                    view! { <RecipeForm user_id=user_id existing=r on_success=on_success/> }
                })
            }}
        </div>
    }
}

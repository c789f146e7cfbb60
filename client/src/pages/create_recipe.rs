//! Create-recipe page: auth gate around the shared recipe form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::recipe_form::RecipeForm;
use crate::state::auth::AuthState;
use crate::util::guard::install_guest_redirect;

#[component]
pub fn CreateRecipePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    install_guest_redirect(auth, "/", navigate.clone());

    let to_detail = navigate.clone();
    let on_success = Callback::new(move |recipe_id: String| {
        to_detail(&format!("/recipe/{recipe_id}"), NavigateOptions::default());
    });

    view! {
        <div class="form-page">
            <header class="form-page__header">
                <h1>"Share a new recipe"</h1>
                <p>"Tell the table what you are cooking."</p>
            </header>
            {move || {
                auth.get().user_id().map(|user_id| {
                    view! { <RecipeForm user_id=user_id on_success=on_success/> }
                })
            }}
        </div>
    }
}

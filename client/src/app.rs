//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{
    account::AccountPage, create_recipe::CreateRecipePage, edit_recipe::EditRecipePage,
    favorites::FavoritesPage, home::HomePage, my_recipes::MyRecipesPage,
    recipe_detail::RecipeDetailPage, user_profile::UserProfilePage,
};
use crate::state::{auth::AuthState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, restores the cached session and
/// theme on the client, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    // Effects only run in the browser: restore the cached session user and
    // the theme preference once hydration is up.
    Effect::new(move || {
        let user = crate::util::session::load();
        let dark = crate::util::theme::read_preference();
        crate::util::theme::apply(dark);
        ui.update(|u| u.dark_mode = dark);
        auth.update(|a| {
            a.user = user;
            a.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/ladle.css"/>
        <Title text="Ladle"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=(StaticSegment("recipe"), ParamSegment("id"))
                        view=RecipeDetailPage
                    />
                    <Route
                        path=(StaticSegment("recipe"), ParamSegment("id"), StaticSegment("edit"))
                        view=EditRecipePage
                    />
                    <Route path=StaticSegment("create") view=CreateRecipePage/>
                    <Route path=StaticSegment("favorites") view=FavoritesPage/>
                    <Route path=StaticSegment("my-recipes") view=MyRecipesPage/>
                    <Route path=StaticSegment("account") view=AccountPage/>
                    <Route path=(StaticSegment("user"), ParamSegment("id")) view=UserProfilePage/>
                </Routes>
            </Layout>
        </Router>
    }
}

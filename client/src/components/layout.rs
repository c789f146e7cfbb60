//! Common page frame: navbar, content area, footer, toast outlet.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::toast::ToastOutlet;

/// Wraps every routed page in the shared chrome.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            <main class="layout__main">{children()}</main>
            <Footer/>
            <ToastOutlet/>
        </div>
    }
}

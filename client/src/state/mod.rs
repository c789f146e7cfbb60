//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` provides one `RwSignal` per state struct; pages and components
//! read and write them via `expect_context`.

pub mod auth;
pub mod ui;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod auth_dialog;
pub mod avatar;
pub mod avatar_crop_dialog;
pub mod confirm_dialog;
pub mod footer;
pub mod layout;
pub mod my_recipe_card;
pub mod navbar;
pub mod recipe_card;
pub mod recipe_carousel;
pub mod recipe_form;
pub mod recipe_search;
pub mod star_rating;
pub mod toast;

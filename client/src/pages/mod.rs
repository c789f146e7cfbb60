//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (data loading, guards,
//! navigation) and delegates rendering details to `components`.

pub mod account;
pub mod create_recipe;
pub mod edit_recipe;
pub mod favorites;
pub mod home;
pub mod my_recipes;
pub mod recipe_detail;
pub mod user_profile;

//! Client-side recipe filtering for the home page search bar.
//!
//! DESIGN
//! ======
//! The full recipe list is already in memory after the initial load, so
//! search never hits the network: filters combine with AND over the loaded
//! list. Text matches are case-insensitive substring checks.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use models::{Difficulty, Recipe};

/// The four home-page search controls. Empty fields do not constrain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Matches recipe title or description.
    pub query: String,
    /// Matches any ingredient name.
    pub ingredient: String,
    /// Matches the category name exactly.
    pub category: String,
    /// Matches the difficulty exactly.
    pub difficulty: Option<Difficulty>,
}

impl SearchFilter {
    /// Whether no control constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.ingredient.trim().is_empty()
            && self.category.is_empty()
            && self.difficulty.is_none()
    }

    /// Whether one recipe passes every active control.
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() {
            let in_title = recipe.title.to_lowercase().contains(&query);
            let in_description = recipe
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&query));
            if !in_title && !in_description {
                return false;
            }
        }

        if !self.category.is_empty()
            && recipe.category_name.as_deref() != Some(self.category.as_str())
        {
            return false;
        }

        let ingredient = self.ingredient.trim().to_lowercase();
        if !ingredient.is_empty() {
            let found = recipe.ingredients.as_ref().is_some_and(|rows| {
                rows.iter().any(|row| row.name.to_lowercase().contains(&ingredient))
            });
            if !found {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty
            && recipe.difficulty != Some(difficulty)
        {
            return false;
        }

        true
    }
}

/// Filter the loaded recipe list with `filter`, preserving order.
#[must_use]
pub fn filter_recipes(recipes: &[Recipe], filter: &SearchFilter) -> Vec<Recipe> {
    recipes.iter().filter(|r| filter.matches(r)).cloned().collect()
}

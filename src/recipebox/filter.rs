//! Recipe filtering.
//!
//! A [`RecipeFilter`] is a plain value describing which recipes belong in a
//! filtered view. It holds no reference to the store; the store re-evaluates
//! it on every request (see [`crate::store::RecipeStore::filtered`]).
//!
//! All criteria combine with AND. A criterion left empty matches everything.

use crate::model::{DietaryTags, Recipe};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeFilter {
    /// Case-insensitive substring of the title or the ingredients.
    pub search_text: Option<String>,
    /// Exact, case-sensitive category.
    pub category: Option<String>,
    /// Exact, case-sensitive difficulty.
    pub difficulty: Option<String>,
    /// Tags every matching recipe must carry.
    pub dietary: DietaryTags,
    pub favorites_only: bool,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_text(&mut self, text: Option<String>) {
        self.search_text = non_empty(text);
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.category = non_empty(category);
    }

    pub fn set_difficulty(&mut self, difficulty: Option<String>) {
        self.difficulty = non_empty(difficulty);
    }

    pub fn set_dietary(&mut self, tags: DietaryTags) {
        self.dietary = tags;
    }

    pub fn require_tag(&mut self, tag: impl Into<String>) {
        self.dietary.insert(tag);
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.favorites_only = favorites_only;
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.set_search_text(Some(text.into()));
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.set_category(Some(category.into()));
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.set_difficulty(Some(difficulty.into()));
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.require_tag(tag);
        self
    }

    pub fn with_favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    /// Resets every criterion back to "no constraint".
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.search_text.as_deref().is_none_or(str::is_empty)
            && self.category.is_none()
            && self.difficulty.is_none()
            && self.dietary.is_empty()
            && !self.favorites_only
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_dietary(recipe)
            && self.matches_category(recipe)
            && self.matches_difficulty(recipe)
            && self.matches_search(recipe)
            && self.matches_favorites(recipe)
    }

    fn matches_dietary(&self, recipe: &Recipe) -> bool {
        self.dietary.is_empty() || recipe.dietary_restrictions.contains_all(&self.dietary)
    }

    fn matches_category(&self, recipe: &Recipe) -> bool {
        match &self.category {
            None => true,
            Some(category) => recipe.category.as_ref() == Some(category),
        }
    }

    fn matches_difficulty(&self, recipe: &Recipe) -> bool {
        match &self.difficulty {
            None => true,
            Some(difficulty) => recipe.difficulty.as_ref() == Some(difficulty),
        }
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        let Some(text) = self.search_text.as_deref().filter(|t| !t.is_empty()) else {
            return true;
        };
        let needle = text.to_lowercase();
        recipe.title.to_lowercase().contains(&needle)
            || recipe.ingredients.to_lowercase().contains(&needle)
    }

    fn matches_favorites(&self, recipe: &Recipe) -> bool {
        !self.favorites_only || recipe.favorite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pasta() -> Recipe {
        Recipe::new("Vegan Pasta", "2 cups cherry Tomatoes\nbasil", "Boil")
            .with_category("Dinner")
            .with_difficulty("Easy")
            .with_tag("Vegan")
            .with_tag("Gluten-Free")
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = RecipeFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&pasta()));
        assert!(filter.matches(&Recipe::new("Bare", "", "")));
    }

    #[test]
    fn dietary_requires_superset() {
        let recipe = pasta();
        assert!(RecipeFilter::new().with_tag("Vegan").matches(&recipe));
        assert!(!RecipeFilter::new()
            .with_tag("Vegan")
            .with_tag("Dairy-Free")
            .matches(&recipe));
    }

    #[test]
    fn category_is_exact_and_case_sensitive() {
        let recipe = pasta();
        assert!(RecipeFilter::new().with_category("Dinner").matches(&recipe));
        assert!(!RecipeFilter::new().with_category("dinner").matches(&recipe));
        assert!(!RecipeFilter::new()
            .with_category("Dinner")
            .matches(&Recipe::new("No category", "", "")));
    }

    #[test]
    fn difficulty_is_exact() {
        let recipe = pasta();
        assert!(RecipeFilter::new().with_difficulty("Easy").matches(&recipe));
        assert!(!RecipeFilter::new().with_difficulty("Hard").matches(&recipe));
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_ingredients() {
        let recipe = pasta();
        assert!(RecipeFilter::new().with_search_text("tomato").matches(&recipe));
        assert!(RecipeFilter::new().with_search_text("PASTA").matches(&recipe));
        assert!(!RecipeFilter::new().with_search_text("boil").matches(&recipe));
    }

    #[test]
    fn empty_strings_mean_no_constraint() {
        let mut filter = RecipeFilter::new();
        filter.set_search_text(Some(String::new()));
        filter.set_category(Some(String::new()));
        filter.set_difficulty(Some(String::new()));
        assert!(filter.is_empty());
    }

    #[test]
    fn favorites_only_requires_flag() {
        let mut recipe = pasta();
        let filter = RecipeFilter::new().with_favorites_only(true);
        assert!(!filter.matches(&recipe));
        recipe.favorite = true;
        assert!(filter.matches(&recipe));
    }

    #[test]
    fn clauses_combine_with_and() {
        let filter = RecipeFilter::new()
            .with_category("Dinner")
            .with_search_text("smoothie");
        assert!(!filter.matches(&pasta()));
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut filter = RecipeFilter::new()
            .with_category("Dinner")
            .with_difficulty("Easy")
            .with_tag("Vegan")
            .with_search_text("x")
            .with_favorites_only(true);
        filter.clear();
        assert_eq!(filter, RecipeFilter::default());
    }
}

use super::RecipeStore;
use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use tracing::debug;
use uuid::Uuid;

/// Vec-backed recipe store. Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    recipes: Vec<Recipe>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.recipes.iter().position(|r| r.id() == *id)
    }
}

fn validate_title(recipe: &Recipe) -> Result<()> {
    if recipe.title.trim().is_empty() {
        return Err(RecipeError::Validation(
            "Recipe title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

impl RecipeStore for InMemoryStore {
    fn add(&mut self, recipe: Recipe) -> Result<()> {
        validate_title(&recipe)?;
        if self.position(&recipe.id()).is_some() {
            return Err(RecipeError::Validation(format!(
                "A recipe with id {} already exists",
                recipe.id()
            )));
        }
        debug!(id = %recipe.id(), title = %recipe.title, "recipe added");
        self.recipes.push(recipe);
        Ok(())
    }

    fn update(&mut self, recipe: Recipe) -> Result<bool> {
        let Some(pos) = self.position(&recipe.id()) else {
            debug!(id = %recipe.id(), "update skipped, recipe not in store");
            return Ok(false);
        };
        validate_title(&recipe)?;
        debug!(id = %recipe.id(), position = pos, "recipe updated");
        self.recipes[pos] = recipe;
        Ok(true)
    }

    fn remove(&mut self, id: &Uuid) -> Result<Option<Recipe>> {
        let removed = self.position(id).map(|pos| self.recipes.remove(pos));
        if removed.is_some() {
            debug!(%id, "recipe removed");
        }
        Ok(removed)
    }

    fn find_by_id(&self, id: &Uuid) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id() == *id)
    }

    fn toggle_favorite(&mut self, id: &Uuid) -> Option<bool> {
        let recipe = self.recipes.iter_mut().find(|r| r.id() == *id)?;
        recipe.favorite = !recipe.favorite;
        debug!(%id, favorite = recipe.favorite, "favorite toggled");
        Some(recipe.favorite)
    }

    fn all(&self) -> &[Recipe] {
        &self.recipes
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::filter::RecipeFilter;
    use crate::samples;

    fn titles<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<&'a str> {
        recipes.into_iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn add_then_find_returns_same_recipe() {
        let mut store = InMemoryStore::new();
        let recipe = Recipe::new("Soup", "water", "boil").with_servings(2);
        let id = recipe.id();
        store.add(recipe.clone()).unwrap();
        assert_eq!(store.find_by_id(&id), Some(&recipe));
    }

    #[test]
    fn add_rejects_blank_titles_and_leaves_store_unchanged() {
        let mut store = InMemoryStore::new();
        store.add(Recipe::new("Kept", "", "")).unwrap();

        for title in ["", "   ", "\t\n"] {
            let err = store.add(Recipe::new(title, "", "")).unwrap_err();
            assert!(matches!(err, RecipeError::Validation(_)));
        }
        assert_eq!(titles(store.all()), vec!["Kept"]);
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut store = InMemoryStore::new();
        let recipe = Recipe::new("Once", "", "");
        store.add(recipe.clone()).unwrap();
        assert!(matches!(
            store.add(recipe),
            Err(RecipeError::Validation(_))
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut store = InMemoryStore::new();
        for title in ["C", "A", "B"] {
            store.add(Recipe::new(title, "", "")).unwrap();
        }
        assert_eq!(titles(store.all()), vec!["C", "A", "B"]);
    }

    #[test]
    fn update_replaces_in_place() {
        let mut store = InMemoryStore::new();
        let first = Recipe::new("First", "", "");
        store.add(first.clone()).unwrap();
        store.add(Recipe::new("Second", "", "")).unwrap();

        let mut edited = first.clone();
        edited.title = "First, edited".into();
        assert!(store.update(edited).unwrap());

        assert_eq!(titles(store.all()), vec!["First, edited", "Second"]);
        assert_eq!(store.all()[0].id(), first.id());
    }

    #[test]
    fn update_of_unknown_id_is_noop() {
        let mut store = StoreFixture::new().with_recipe(Recipe::new("Only", "", "")).store;
        let before = store.all().to_vec();

        assert!(!store.update(Recipe::new("Stranger", "", "")).unwrap());
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn update_of_unknown_id_ignores_blank_title() {
        let mut store = StoreFixture::new().with_recipe(Recipe::new("Only", "", "")).store;
        let before = store.all().to_vec();

        assert!(matches!(store.update(Recipe::new("", "", "")), Ok(false)));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn update_rejects_blank_title() {
        let mut store = InMemoryStore::new();
        let recipe = Recipe::new("Named", "", "");
        store.add(recipe.clone()).unwrap();

        let mut blank = recipe;
        blank.title = " ".into();
        assert!(matches!(
            store.update(blank),
            Err(RecipeError::Validation(_))
        ));
        assert_eq!(store.all()[0].title, "Named");
    }

    #[test]
    fn remove_deletes_and_returns_recipe() {
        let mut store = InMemoryStore::new();
        let recipe = Recipe::new("Gone", "", "");
        let id = recipe.id();
        store.add(recipe).unwrap();

        let removed = store.remove(&id).unwrap().unwrap();
        assert_eq!(removed.title, "Gone");
        assert!(store.find_by_id(&id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn remove_of_unknown_id_is_noop() {
        let mut store = StoreFixture::new().with_recipes(2).store;
        assert!(store.remove(&Uuid::new_v4()).unwrap().is_none());
        assert_eq!(titles(store.all()), vec!["Test Recipe 1", "Test Recipe 2"]);
    }

    #[test]
    fn favorites_only_view() {
        let store = StoreFixture::new()
            .with_recipes(2)
            .with_favorite("Pancakes")
            .store;
        let filter = RecipeFilter::new().with_favorites_only(true);
        assert_eq!(titles(store.filtered(&filter)), vec!["Pancakes"]);
    }

    #[test]
    fn toggle_favorite_twice_restores_flag() {
        let mut store = InMemoryStore::new();
        let recipe = Recipe::new("Fav", "", "");
        let id = recipe.id();
        store.add(recipe).unwrap();

        assert_eq!(store.toggle_favorite(&id), Some(true));
        assert_eq!(store.toggle_favorite(&id), Some(false));
        assert!(!store.find_by_id(&id).unwrap().favorite);
    }

    #[test]
    fn toggle_favorite_of_unknown_id_is_noop() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.toggle_favorite(&Uuid::new_v4()), None);
    }

    #[test]
    fn empty_filter_yields_all_in_order() {
        let store = samples::seeded_store();
        let filter = RecipeFilter::new();
        let filtered: Vec<_> = store.filtered(&filter).collect();
        let all: Vec<_> = store.all().iter().collect();
        assert_eq!(filtered, all);
    }

    #[test]
    fn filtered_view_reflects_later_mutations() {
        let mut store = samples::seeded_store();
        let filter = RecipeFilter::new().with_category("Dinner");
        assert_eq!(store.filtered(&filter).count(), 2);

        store
            .add(Recipe::new("Late Dinner", "", "").with_category("Dinner"))
            .unwrap();
        assert_eq!(
            titles(store.filtered(&filter)),
            vec!["Vegan Pasta", "Gluten-Free Pizza", "Late Dinner"]
        );
    }

    #[test]
    fn sample_scenario() {
        let mut store = samples::seeded_store();

        let dinner = RecipeFilter::new().with_category("Dinner");
        assert_eq!(
            titles(store.filtered(&dinner)),
            vec!["Vegan Pasta", "Gluten-Free Pizza"]
        );

        let vegan = RecipeFilter::new().with_tag("Vegan");
        assert_eq!(
            titles(store.filtered(&vegan)),
            vec!["Vegan Pasta", "Breakfast Smoothie Bowl"]
        );

        let favorites = RecipeFilter::new().with_favorites_only(true);
        assert_eq!(store.filtered(&favorites).count(), 0);

        let pasta_id = store.all()[0].id();
        store.toggle_favorite(&pasta_id);
        assert_eq!(titles(store.filtered(&favorites)), vec!["Vegan Pasta"]);
    }

    #[test]
    fn search_matches_ingredients_regardless_of_case() {
        let store = samples::seeded_store();
        let filter = RecipeFilter::new().with_search_text("TOMATO");
        assert_eq!(
            titles(store.filtered(&filter)),
            vec!["Vegan Pasta", "Gluten-Free Pizza"]
        );
    }

    #[test]
    fn filter_by_dietary_restriction() {
        let store = samples::seeded_store();
        assert_eq!(
            titles(store.filter_by_dietary_restriction("Gluten-Free")),
            vec!["Gluten-Free Pizza", "Breakfast Smoothie Bowl"]
        );
        assert_eq!(store.filter_by_dietary_restriction("  ").len(), 3);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_recipes(mut self, count: usize) -> Self {
            for i in 0..count {
                let recipe = Recipe::new(
                    format!("Test Recipe {}", i + 1),
                    format!("Ingredients for recipe {}", i + 1),
                    "Mix and serve",
                );
                self.store.add(recipe).unwrap();
            }
            self
        }

        pub fn with_recipe(mut self, recipe: Recipe) -> Self {
            self.store.add(recipe).unwrap();
            self
        }

        pub fn with_favorite(mut self, title: &str) -> Self {
            let mut recipe = Recipe::new(title, "Something tasty", "Cook it");
            recipe.favorite = true;
            self.store.add(recipe).unwrap();
            self
        }

        pub fn with_samples(mut self) -> Self {
            for recipe in crate::samples::sample_recipes() {
                self.store.add(recipe).unwrap();
            }
            self
        }
    }
}

//! # Storage Layer
//!
//! The [`RecipeStore`] trait is the authoritative, ordered collection of
//! recipes. Everything above it (commands, API, CLI) goes through the trait,
//! so a different backend can be dropped in without touching the logic.
//!
//! ## Ordering
//!
//! Recipes are kept in insertion order. `update` replaces a recipe at its
//! original position; it never moves it to the end.
//!
//! ## Misses Are Not Errors
//!
//! `update`, `remove` and `toggle_favorite` on an id that is not in the store
//! do nothing and report that through their return value. The only error the
//! store raises is [`RecipeError::Validation`](crate::error::RecipeError).
//!
//! ## Filtered View
//!
//! [`RecipeStore::filtered`] is pull-based: it walks [`RecipeStore::all`] each
//! time it is called and yields the recipes the filter accepts, in store
//! order. Nothing is cached, so the view can never go stale.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: a `Vec`-backed store. Recipes live for the
//!   duration of the process.

use crate::error::Result;
use crate::filter::RecipeFilter;
use crate::model::Recipe;
use uuid::Uuid;

pub mod memory;

pub trait RecipeStore {
    /// Append a recipe. Fails if its title is blank or its id is taken.
    fn add(&mut self, recipe: Recipe) -> Result<()>;

    /// Replace the recipe with the same id, in place.
    ///
    /// Returns `Ok(false)` without touching the store when no recipe has that id.
    fn update(&mut self, recipe: Recipe) -> Result<bool>;

    /// Remove a recipe, returning it. `None` when the id is unknown.
    fn remove(&mut self, id: &Uuid) -> Result<Option<Recipe>>;

    fn find_by_id(&self, id: &Uuid) -> Option<&Recipe>;

    /// Flip the favorite flag, returning its new value. `None` when the id is unknown.
    fn toggle_favorite(&mut self, id: &Uuid) -> Option<bool>;

    /// Every recipe, in insertion order.
    fn all(&self) -> &[Recipe];

    fn filtered<'a>(&'a self, filter: &'a RecipeFilter) -> Filtered<'a> {
        Filtered::new(self.all(), filter)
    }

    /// Recipes carrying `tag`. A blank tag returns everything.
    fn filter_by_dietary_restriction(&self, tag: &str) -> Vec<&Recipe> {
        let tag = tag.trim();
        self.all()
            .iter()
            .filter(|r| tag.is_empty() || r.dietary_restrictions.contains(tag))
            .collect()
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Lazy, order-preserving view over the recipes a [`RecipeFilter`] accepts.
pub struct Filtered<'a> {
    recipes: std::slice::Iter<'a, Recipe>,
    filter: &'a RecipeFilter,
}

impl<'a> Filtered<'a> {
    pub fn new(recipes: &'a [Recipe], filter: &'a RecipeFilter) -> Self {
        Self {
            recipes: recipes.iter(),
            filter,
        }
    }
}

impl<'a> Iterator for Filtered<'a> {
    type Item = &'a Recipe;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        self.recipes.by_ref().find(|r| filter.matches(r))
    }
}

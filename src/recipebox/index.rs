//! # Display Indexes
//!
//! Recipe ids are UUIDs, which nobody wants to type. Listings therefore number
//! recipes 1, 2, 3... by their position in the store, and the CLI accepts those
//! numbers wherever it needs a recipe.
//!
//! Indexes are **canonical**: they are assigned over the unfiltered store, so a
//! recipe keeps its number when a filter hides its neighbours. `list -c Dinner`
//! may show `1.` and `2.` while `list -c Breakfast` shows `3.`, and `favorite 3`
//! means the same recipe in both cases.
//!
//! A [`RecipeSelector`] is what the user typed: an index, a full UUID, or a piece
//! of a title.

use crate::model::Recipe;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecipe {
    pub index: usize,
    pub recipe: Recipe,
}

/// Numbers `recipes` 1..=n in the order given.
pub fn index_recipes(recipes: &[Recipe]) -> Vec<DisplayRecipe> {
    recipes
        .iter()
        .enumerate()
        .map(|(i, recipe)| DisplayRecipe {
            index: i + 1,
            recipe: recipe.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSelector {
    Index(usize),
    Id(Uuid),
    Title(String),
}

impl fmt::Display for RecipeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeSelector::Index(i) => write!(f, "{}", i),
            RecipeSelector::Id(id) => write!(f, "{}", id),
            RecipeSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

impl FromStr for RecipeSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty recipe selector".to_string());
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Recipe indexes start at 1".to_string());
            }
            return Ok(RecipeSelector::Index(n));
        }
        if let Ok(id) = Uuid::parse_str(s) {
            return Ok(RecipeSelector::Id(id));
        }
        Ok(RecipeSelector::Title(s.to_string()))
    }
}

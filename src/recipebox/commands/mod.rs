use crate::config::RecipeConfig;
use crate::index::DisplayRecipe;
use crate::model::Recipe;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod favorite;
pub mod helpers;
pub mod list;
pub mod share;
pub mod tags;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_recipes: Vec<Recipe>,
    pub listed_recipes: Vec<DisplayRecipe>,
    pub shared_text: Option<String>,
    pub tag_counts: Vec<(String, usize)>,
    pub config: Option<RecipeConfig>,
    pub config_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.affected_recipes = recipes;
        self
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<DisplayRecipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_shared_text(mut self, text: String) -> Self {
        self.shared_text = Some(text);
        self
    }

    pub fn with_config(mut self, config: RecipeConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// The fields a user supplied for a new or edited recipe.
///
/// `None` means "not given": a new recipe gets the default, an edited one keeps
/// its current value. An empty string for an optional classifier clears it.
#[derive(Debug, Clone, Default)]
pub struct RecipeDraft {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub cooking_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    /// Replaces the whole tag set when present.
    pub dietary: Option<Vec<String>>,
    pub image_url: Option<String>,
}

fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl RecipeDraft {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn apply_to(&self, recipe: &mut Recipe) {
        if let Some(title) = &self.title {
            recipe.title = title.clone();
        }
        if let Some(ingredients) = &self.ingredients {
            recipe.ingredients = ingredients.clone();
        }
        if let Some(instructions) = &self.instructions {
            recipe.instructions = instructions.clone();
        }
        if let Some(category) = &self.category {
            recipe.category = optional(category);
        }
        if let Some(difficulty) = &self.difficulty {
            recipe.difficulty = optional(difficulty);
        }
        if let Some(minutes) = self.cooking_time_minutes {
            recipe.cooking_time_minutes = minutes;
        }
        if let Some(servings) = self.servings {
            recipe.servings = servings;
        }
        if let Some(tags) = &self.dietary {
            recipe.dietary_restrictions.clear();
            for tag in tags {
                recipe.add_dietary_restriction(tag.clone());
            }
        }
        if let Some(url) = &self.image_url {
            recipe.image_url = optional(url);
        }
    }

    pub fn into_recipe(self) -> Recipe {
        let mut recipe = Recipe::new(String::new(), String::new(), String::new());
        self.apply_to(&mut recipe);
        recipe
    }
}

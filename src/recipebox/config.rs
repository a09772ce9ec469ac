use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// How listings are laid out. Owned by the caller, never by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => write!(f, "table"),
            ViewMode::Cards => write!(f, "cards"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "cards" | "card" => Ok(ViewMode::Cards),
            other => Err(format!("Unknown view '{}', expected table or cards", other)),
        }
    }
}

/// Configuration for recipebox, stored as `config.json` in the config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeConfig {
    #[serde(default)]
    pub default_view: ViewMode,

    /// Seed a fresh store with the sample recipes.
    #[serde(default = "default_true")]
    pub load_samples: bool,

    /// Suggested vocabularies, offered to the user but never enforced.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    #[serde(default = "default_difficulties")]
    pub difficulties: Vec<String>,

    #[serde(default = "default_dietary_tags")]
    pub dietary_tags: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn default_categories() -> Vec<String> {
    strings(&["Breakfast", "Lunch", "Dinner", "Dessert", "Snack", "Appetizer"])
}

fn default_difficulties() -> Vec<String> {
    strings(&["Easy", "Medium", "Hard"])
}

fn default_dietary_tags() -> Vec<String> {
    strings(&["Vegan", "Vegetarian", "Gluten-Free", "Dairy-Free"])
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            default_view: ViewMode::default(),
            load_samples: true,
            categories: default_categories(),
            difficulties: default_difficulties(),
            dietary_tags: default_dietary_tags(),
        }
    }
}

impl RecipeConfig {
    pub fn path<P: AsRef<Path>>(config_dir: P) -> PathBuf {
        config_dir.as_ref().join(CONFIG_FILENAME)
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = Self::path(config_dir);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RecipeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(config_dir), content)?;
        Ok(())
    }

    /// Set a value by its CLI key (`view`, `samples`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "view" => {
                self.default_view = value.parse().map_err(RecipeError::Api)?;
            }
            "samples" => {
                self.load_samples = parse_bool(value).ok_or_else(|| {
                    RecipeError::Api(format!("Expected true or false, got '{}'", value))
                })?;
            }
            other => return Err(RecipeError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "view" => Some(self.default_view.to_string()),
            "samples" => Some(self.load_samples.to_string()),
            _ => None,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

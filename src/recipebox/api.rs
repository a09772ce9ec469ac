//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every recipebox operation, whichever UI sits on top.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs**: user-typed selectors (`"2"`, a UUID, `"pizza"`)
//!   become [`RecipeSelector`]s before reaching the commands
//! - **Returns structured types** (`Result<CmdResult>`), never strings for a terminal
//!
//! `RecipeApi<S: RecipeStore>` is generic over the store, so the same facade
//! serves the CLI and the tests.

use crate::commands;
use crate::error::{RecipeError, Result};
use crate::filter::RecipeFilter;
use crate::index::RecipeSelector;
use crate::store::RecipeStore;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct RecipeApi<S: RecipeStore> {
    store: S,
    config_dir: PathBuf,
}

impl<S: RecipeStore> RecipeApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn add_recipe(&mut self, draft: commands::RecipeDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn update_recipe(
        &mut self,
        selector: &str,
        draft: &commands::RecipeDraft,
    ) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::update::run(&mut self.store, &selector, draft)
    }

    pub fn delete_recipes<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn toggle_favorites<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::favorite::toggle(&mut self.store, &selectors)
    }

    pub fn list_recipes(&self, filter: &RecipeFilter) -> commands::CmdResult {
        commands::list::run(&self.store, filter)
    }

    pub fn view_recipes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn share_recipe(&self, selector: &str) -> Result<commands::CmdResult> {
        let selector = parse_selector(selector)?;
        commands::share::run(&self.store, &selector)
    }

    pub fn tag_counts(&self, tags: &[String]) -> commands::CmdResult {
        commands::tags::counts(&self.store, tags)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn parse_selector(input: &str) -> Result<RecipeSelector> {
    RecipeSelector::from_str(input).map_err(RecipeError::Api)
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecipeSelector>> {
    inputs.iter().map(|s| parse_selector(s.as_ref())).collect()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RecipeDraft};

use crate::clipboard::format_for_sharing;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::RecipeSelector;
use crate::store::RecipeStore;

use super::helpers::recipes_by_selectors;

/// Builds the plain-text sharing block for the selected recipe.
pub fn run<S: RecipeStore>(store: &S, selector: &RecipeSelector) -> Result<CmdResult> {
    let recipes = recipes_by_selectors(store, std::slice::from_ref(selector))?;
    let mut result = CmdResult::default();
    if let Some(dr) = recipes.into_iter().next() {
        result = result.with_shared_text(format_for_sharing(&dr.recipe));
        result.affected_recipes.push(dr.recipe);
    }
    Ok(result)
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::RecipeSelector;
use crate::store::RecipeStore;

use super::helpers::recipes_by_selectors;

pub fn run<S: RecipeStore>(store: &S, selectors: &[RecipeSelector]) -> Result<CmdResult> {
    let recipes = recipes_by_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_recipes(recipes))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecipeSelector;
use crate::store::RecipeStore;

use super::helpers::resolve_selectors;

pub fn run<S: RecipeStore>(store: &mut S, selectors: &[RecipeSelector]) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        if let Some(recipe) = store.remove(&id)? {
            result.add_message(CmdMessage::success(format!(
                "Recipe deleted ({}): {}",
                display_index, recipe.title
            )));
            result.affected_recipes.push(recipe);
        }
    }

    Ok(result)
}

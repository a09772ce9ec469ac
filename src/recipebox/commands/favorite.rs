use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecipeSelector;
use crate::store::RecipeStore;

use super::helpers::resolve_selectors;

pub fn toggle<S: RecipeStore>(store: &mut S, selectors: &[RecipeSelector]) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        let Some(favorite) = store.toggle_favorite(&id) else {
            continue;
        };
        let Some(recipe) = store.find_by_id(&id).cloned() else {
            continue;
        };

        let verb = if favorite {
            "Marked as favorite"
        } else {
            "Removed from favorites"
        };
        result.add_message(CmdMessage::success(format!(
            "{} ({}): {}",
            verb, display_index, recipe.title
        )));
        result.affected_recipes.push(recipe);
    }

    Ok(result)
}

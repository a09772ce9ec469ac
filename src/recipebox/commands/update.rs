use crate::commands::{CmdMessage, CmdResult, RecipeDraft};
use crate::error::{RecipeError, Result};
use crate::index::RecipeSelector;
use crate::store::RecipeStore;

use super::helpers::resolve_selectors;

/// Applies `draft` to the selected recipe and writes it back by id.
pub fn run<S: RecipeStore>(
    store: &mut S,
    selector: &RecipeSelector,
    draft: &RecipeDraft,
) -> Result<CmdResult> {
    let resolved = resolve_selectors(store, std::slice::from_ref(selector))?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        let mut recipe = store
            .find_by_id(&id)
            .cloned()
            .ok_or_else(|| RecipeError::RecipeNotFound(selector.to_string()))?;
        draft.apply_to(&mut recipe);

        if store.update(recipe.clone())? {
            result.add_message(CmdMessage::success(format!(
                "Recipe updated ({}): {}",
                display_index, recipe.title
            )));
            result.affected_recipes.push(recipe);
        }
    }

    Ok(result)
}

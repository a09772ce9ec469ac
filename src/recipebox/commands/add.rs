use crate::commands::{CmdMessage, CmdResult, RecipeDraft};
use crate::error::Result;
use crate::store::RecipeStore;

pub fn run<S: RecipeStore>(store: &mut S, draft: RecipeDraft) -> Result<CmdResult> {
    let recipe = draft.into_recipe();
    store.add(recipe.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Recipe added ({}): {}",
        store.len(),
        recipe.title
    )));
    Ok(result.with_affected_recipes(vec![recipe]))
}

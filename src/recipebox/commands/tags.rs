use crate::commands::CmdResult;
use crate::store::RecipeStore;

/// Counts how many recipes carry each of `tags`.
pub fn counts<S: RecipeStore>(store: &S, tags: &[String]) -> CmdResult {
    let mut result = CmdResult::default();
    result.tag_counts = tags
        .iter()
        .map(|tag| (tag.clone(), store.filter_by_dietary_restriction(tag).len()))
        .collect();
    result
}

use crate::error::{RecipeError, Result};
use crate::index::{index_recipes, DisplayRecipe, RecipeSelector};
use crate::store::RecipeStore;
use uuid::Uuid;

pub fn indexed_recipes<S: RecipeStore>(store: &S) -> Vec<DisplayRecipe> {
    index_recipes(store.all())
}

/// Resolves each selector to `(display index, id)`.
///
/// Title selectors match a case-insensitive substring and must name exactly
/// one recipe; an exact (case-insensitive) title match wins over partial ones.
/// An index past the end of the listing is retried as a title, so numeric
/// titles such as "1984" stay reachable.
pub fn resolve_selectors<S: RecipeStore>(
    store: &S,
    selectors: &[RecipeSelector],
) -> Result<Vec<(usize, Uuid)>> {
    let indexed = indexed_recipes(store);

    selectors
        .iter()
        .map(|selector| resolve_one(&indexed, selector))
        .collect()
}

fn resolve_one(indexed: &[DisplayRecipe], selector: &RecipeSelector) -> Result<(usize, Uuid)> {
    let found = match selector {
        RecipeSelector::Index(n) => match indexed.iter().find(|dr| dr.index == *n) {
            Some(dr) => Some(dr),
            None => find_by_title(indexed, &n.to_string())?,
        },
        RecipeSelector::Id(id) => indexed.iter().find(|dr| dr.recipe.id() == *id),
        RecipeSelector::Title(term) => find_by_title(indexed, term)?,
    };

    found
        .map(|dr| (dr.index, dr.recipe.id()))
        .ok_or_else(|| RecipeError::RecipeNotFound(selector.to_string()))
}

fn find_by_title<'a>(
    indexed: &'a [DisplayRecipe],
    term: &str,
) -> Result<Option<&'a DisplayRecipe>> {
    let term_lower = term.to_lowercase();
    let exact: Vec<_> = indexed
        .iter()
        .filter(|dr| dr.recipe.title.to_lowercase() == term_lower)
        .collect();
    let candidates: Vec<_> = if exact.is_empty() {
        indexed
            .iter()
            .filter(|dr| dr.recipe.title.to_lowercase().contains(&term_lower))
            .collect()
    } else {
        exact
    };
    if candidates.len() > 1 {
        return Err(RecipeError::AmbiguousSelector(
            term.to_string(),
            candidates.len(),
        ));
    }
    Ok(candidates.into_iter().next())
}

pub fn recipes_by_selectors<S: RecipeStore>(
    store: &S,
    selectors: &[RecipeSelector],
) -> Result<Vec<DisplayRecipe>> {
    let resolved = resolve_selectors(store, selectors)?;
    let mut recipes = Vec::with_capacity(resolved.len());
    for (index, id) in resolved {
        let recipe = store
            .find_by_id(&id)
            .cloned()
            .ok_or_else(|| RecipeError::RecipeNotFound(id.to_string()))?;
        recipes.push(DisplayRecipe { index, recipe });
    }
    Ok(recipes)
}

use crate::commands::CmdResult;
use crate::filter::RecipeFilter;
use crate::index::DisplayRecipe;
use crate::store::RecipeStore;
use std::collections::HashMap;
use tracing::trace;
use uuid::Uuid;

/// Lists the recipes `filter` accepts, in store order, keeping their
/// canonical display indexes.
pub fn run<S: RecipeStore>(store: &S, filter: &RecipeFilter) -> CmdResult {
    let positions: HashMap<Uuid, usize> = store
        .all()
        .iter()
        .enumerate()
        .map(|(i, recipe)| (recipe.id(), i + 1))
        .collect();

    let listed: Vec<DisplayRecipe> = store
        .filtered(filter)
        .map(|recipe| DisplayRecipe {
            index: positions[&recipe.id()],
            recipe: recipe.clone(),
        })
        .collect();

    trace!(total = store.len(), shown = listed.len(), "filtered listing");
    CmdResult::default().with_listed_recipes(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::favorite;
    use crate::index::RecipeSelector;
    use crate::samples::seeded_store;

    fn listed(result: &CmdResult) -> Vec<(usize, &str)> {
        result
            .listed_recipes
            .iter()
            .map(|dr| (dr.index, dr.recipe.title.as_str()))
            .collect()
    }

    #[test]
    fn unfiltered_lists_everything_in_order() {
        let store = seeded_store();
        let result = run(&store, &RecipeFilter::new());
        assert_eq!(
            listed(&result),
            vec![
                (1, "Vegan Pasta"),
                (2, "Gluten-Free Pizza"),
                (3, "Breakfast Smoothie Bowl")
            ]
        );
    }

    #[test]
    fn filtered_listing_keeps_canonical_indexes() {
        let store = seeded_store();
        let result = run(&store, &RecipeFilter::new().with_category("Breakfast"));
        assert_eq!(listed(&result), vec![(3, "Breakfast Smoothie Bowl")]);
    }

    #[test]
    fn favorites_only_after_toggle() {
        let mut store = seeded_store();
        let filter = RecipeFilter::new().with_favorites_only(true);
        assert!(run(&store, &filter).listed_recipes.is_empty());

        favorite::toggle(&mut store, &[RecipeSelector::Index(1)]).unwrap();
        assert_eq!(listed(&run(&store, &filter)), vec![(1, "Vegan Pasta")]);
    }

    #[test]
    fn combined_criteria() {
        let store = seeded_store();
        let filter = RecipeFilter::new()
            .with_tag("Vegan")
            .with_difficulty("Easy")
            .with_search_text("BANANA");
        assert_eq!(
            listed(&run(&store, &filter)),
            vec![(3, "Breakfast Smoothie Bowl")]
        );
    }
}

//! Sample recipes used to seed a fresh store.

use crate::model::Recipe;
use crate::store::RecipeStore;

pub fn sample_recipes() -> Vec<Recipe> {
    let pasta = Recipe::new(
        "Vegan Pasta",
        "1 lb pasta\n2 cups cherry tomatoes\n1/4 cup fresh basil\n3 tbsp olive oil\n4 cloves garlic\nSalt and pepper to taste",
        "1. Boil pasta according to package instructions\n2. Halve tomatoes and mince garlic\n3. Heat olive oil and sauté garlic\n4. Add tomatoes and cook until softened\n5. Toss with pasta and fresh basil\n6. Season with salt and pepper",
    )
    .with_tag("Vegan")
    .with_tag("Vegetarian")
    .with_category("Dinner")
    .with_cooking_time(30)
    .with_difficulty("Easy")
    .with_servings(4)
    .with_image_url("https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg");

    let pizza = Recipe::new(
        "Gluten-Free Pizza",
        "1 medium cauliflower\n2 eggs\n1 cup mozzarella cheese\n1 cup tomato sauce\nToppings of choice\nItalian herbs",
        "1. Rice cauliflower in food processor\n2. Steam and drain well\n3. Mix with eggs and cheese\n4. Form into crust on baking sheet\n5. Bake at 400°F for 20 minutes\n6. Add toppings and bake 10 more minutes",
    )
    .with_tag("Gluten-Free")
    .with_category("Dinner")
    .with_cooking_time(45)
    .with_difficulty("Medium")
    .with_servings(2)
    .with_image_url("https://images.pexels.com/photos/825661/pexels-photo-825661.jpeg");

    let smoothie = Recipe::new(
        "Breakfast Smoothie Bowl",
        "2 frozen bananas\n1 cup mixed frozen berries\n1/2 cup almond milk\n2 tbsp chia seeds\n1/4 cup granola\nFresh fruit for topping",
        "1. Blend frozen fruits with almond milk until smooth\n2. Pour into bowl\n3. Top with chia seeds, granola, and fresh fruit\n4. Serve immediately",
    )
    .with_tag("Vegan")
    .with_tag("Gluten-Free")
    .with_category("Breakfast")
    .with_cooking_time(10)
    .with_difficulty("Easy")
    .with_servings(1)
    .with_image_url("https://images.pexels.com/photos/1099680/pexels-photo-1099680.jpeg");

    vec![pasta, pizza, smoothie]
}

/// Adds the sample recipes to `store`, in order.
pub fn seed<S: RecipeStore>(store: &mut S) -> crate::error::Result<()> {
    for recipe in sample_recipes() {
        store.add(recipe)?;
    }
    Ok(())
}

#[cfg(any(test, feature = "test_utils"))]
pub fn seeded_store() -> crate::store::memory::InMemoryStore {
    crate::store::memory::fixtures::StoreFixture::new()
        .with_samples()
        .store
}

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A duplicate-free collection of dietary tags.
///
/// Tags keep the order they were added in so listings read the way the user
/// entered them, but two collections compare equal regardless of order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct DietaryTags(Vec<String>);

impl DietaryTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a tag. Adding a tag that is already present does nothing.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// True when every tag in `required` is also present here.
    pub fn contains_all(&self, required: &DietaryTags) -> bool {
        required.iter().all(|tag| self.contains(tag))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for DietaryTags {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.contains_all(other)
    }
}

impl Eq for DietaryTags {}

impl<S: Into<String>> FromIterator<S> for DietaryTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = DietaryTags::new();
        for tag in iter {
            tags.insert(tag);
        }
        tags
    }
}

impl From<Vec<String>> for DietaryTags {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<DietaryTags> for Vec<String> {
    fn from(tags: DietaryTags) -> Self {
        tags.0
    }
}

impl fmt::Display for DietaryTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    id: Uuid,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(default)]
    pub dietary_restrictions: DietaryTags,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default)]
    pub cooking_time_minutes: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub favorite: bool,
    pub image_url: Option<String>,
}

impl Recipe {
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
            dietary_restrictions: DietaryTags::new(),
            category: None,
            difficulty: None,
            cooking_time_minutes: 0,
            servings: 0,
            favorite: false,
            image_url: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_cooking_time(mut self, minutes: u32) -> Self {
        self.cooking_time_minutes = minutes;
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.dietary_restrictions.insert(tag);
        self
    }

    pub fn add_dietary_restriction(&mut self, tag: impl Into<String>) -> bool {
        self.dietary_restrictions.insert(tag)
    }

    pub fn remove_dietary_restriction(&mut self, tag: &str) -> bool {
        self.dietary_restrictions.remove(tag)
    }

    /// Cooking time for display: "45 mins", "1h 30m", "2h".
    pub fn formatted_cooking_time(&self) -> String {
        let minutes = self.cooking_time_minutes;
        if minutes < 60 {
            return format!("{} mins", minutes);
        }
        let hours = minutes / 60;
        match minutes % 60 {
            0 => format!("{}h", hours),
            rest => format!("{}h {}m", hours, rest),
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Invalid recipe: {0}")]
    Validation(String),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("\"{0}\" matches {1} recipes, use an index or id instead")]
    AmbiguousSelector(String, usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;

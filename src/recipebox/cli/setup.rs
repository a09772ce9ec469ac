use clap::{Args, Parser, Subcommand};
use recipebox::config::ViewMode;

#[derive(Parser, Debug)]
#[command(name = "recipebox", bin_name = "recipebox", version)]
#[command(about = "Filter, favorite and share recipes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Start from an empty recipe box instead of the sample recipes
    #[arg(long, global = true)]
    pub no_samples: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes, optionally filtered
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show one or more recipes in full, ready to print
    #[command(alias = "v")]
    View {
        /// Recipes to show (index, id or title)
        #[arg(required = true, num_args = 1..)]
        recipes: Vec<String>,
    },

    /// Add a recipe
    #[command(alias = "n")]
    Add {
        /// Title of the recipe
        title: String,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Edit a recipe; fields not given keep their value
    #[command(alias = "e")]
    Edit {
        /// Recipe to edit (index, id or title)
        recipe: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        fields: RecipeFields,

        /// Remove all dietary tags
        #[arg(long, conflicts_with = "diet")]
        clear_diet: bool,
    },

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        /// Recipes to delete (index, id or title)
        #[arg(required = true, num_args = 1..)]
        recipes: Vec<String>,
    },

    /// Toggle the favorite flag of one or more recipes
    #[command(alias = "fav")]
    Favorite {
        /// Recipes to toggle (index, id or title)
        #[arg(required = true, num_args = 1..)]
        recipes: Vec<String>,
    },

    /// Print a recipe as shareable text
    Share {
        /// Recipe to share (index, id or title)
        recipe: String,

        /// Also copy the text to the system clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Show the suggested categories, difficulties and dietary tags
    Vocab,

    /// Get or set configuration
    Config {
        /// Configuration key (view, samples)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Text to find in titles or ingredients (case-insensitive)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only this category (exact match)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only this difficulty (exact match)
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Required dietary tag; repeat to require several
    #[arg(short = 't', long = "diet")]
    pub diet: Vec<String>,

    /// Only favorites
    #[arg(short, long)]
    pub favorites: bool,

    /// Layout: table or cards (defaults to the configured view)
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Print the listing as JSON
    #[arg(long, conflicts_with = "view")]
    pub json: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RecipeFields {
    /// Ingredients, one per line
    #[arg(long)]
    pub ingredients: Option<String>,

    /// Instructions
    #[arg(long)]
    pub instructions: Option<String>,

    /// Category (e.g. Dinner); empty string clears it
    #[arg(long)]
    pub category: Option<String>,

    /// Difficulty (e.g. Easy); empty string clears it
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Cooking time in minutes
    #[arg(long = "time")]
    pub cooking_time: Option<u32>,

    /// Number of servings
    #[arg(long)]
    pub servings: Option<u32>,

    /// Dietary tag; repeat for several (replaces existing tags)
    #[arg(long)]
    pub diet: Vec<String>,

    /// Image URL; empty string clears it
    #[arg(long)]
    pub image_url: Option<String>,
}

//! # CLI Layer
//!
//! This module is **one possible UI client** for recipebox. It is the only
//! place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! The store lives in memory, so every invocation starts from the sample
//! recipes (unless disabled). Mutating commands print their messages followed
//! by the resulting listing.

use super::render::{
    render_cards, render_config, render_full_recipes, render_json, render_messages, render_table,
    render_vocabulary,
};
use super::setup::{Cli, Commands, ListArgs, RecipeFields};
use clap::Parser;
use recipebox::api::{CmdMessage, ConfigAction, RecipeDraft};
use recipebox::clipboard::copy_to_clipboard;
use recipebox::config::ViewMode;
use recipebox::error::Result;
use recipebox::filter::RecipeFilter;
use recipebox::index::DisplayRecipe;
use recipebox::init::{initialize, RecipeContext};
use recipebox::model::DietaryTags;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = initialize(cli.no_samples)?;

    match cli.command {
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::View { recipes }) => handle_view(&ctx, recipes),
        Some(Commands::Add { title, fields }) => handle_add(&mut ctx, title, fields),
        Some(Commands::Edit {
            recipe,
            title,
            fields,
            clear_diet,
        }) => handle_edit(&mut ctx, recipe, title, fields, clear_diet),
        Some(Commands::Delete { recipes }) => handle_delete(&mut ctx, recipes),
        Some(Commands::Favorite { recipes }) => handle_favorite(&mut ctx, recipes),
        Some(Commands::Share { recipe, copy }) => handle_share(&ctx, recipe, copy),
        Some(Commands::Vocab) => handle_vocab(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, ListArgs::default()),
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn filter_from_args(args: &ListArgs) -> RecipeFilter {
    let mut filter = RecipeFilter::new();
    filter.set_search_text(args.search.clone());
    filter.set_category(args.category.clone());
    filter.set_difficulty(args.difficulty.clone());
    filter.set_dietary(args.diet.iter().cloned().collect::<DietaryTags>());
    filter.set_favorites_only(args.favorites);
    filter
}

fn print_listing(recipes: &[DisplayRecipe], view: ViewMode) {
    let output = match view {
        ViewMode::Table => render_table(recipes),
        ViewMode::Cards => render_cards(recipes),
    };
    print!("{}", output);
}

/// Prints the whole recipe box in the configured view.
fn print_all(ctx: &RecipeContext) {
    let result = ctx.api.list_recipes(&RecipeFilter::new());
    println!();
    print_listing(&result.listed_recipes, ctx.config.default_view);
}

fn handle_list(ctx: &RecipeContext, args: ListArgs) -> Result<()> {
    let filter = filter_from_args(&args);
    let result = ctx.api.list_recipes(&filter);

    if args.json {
        print!("{}", render_json(&result.listed_recipes)?);
        return Ok(());
    }

    print_listing(
        &result.listed_recipes,
        args.view.unwrap_or(ctx.config.default_view),
    );
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_view(ctx: &RecipeContext, recipes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_recipes(&recipes)?;
    print!("{}", render_full_recipes(&result.listed_recipes));
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn draft_from_fields(title: Option<String>, fields: RecipeFields, clear_diet: bool) -> RecipeDraft {
    let dietary = if clear_diet {
        Some(Vec::new())
    } else if fields.diet.is_empty() {
        None
    } else {
        Some(fields.diet)
    };

    RecipeDraft {
        title,
        ingredients: fields.ingredients,
        instructions: fields.instructions,
        category: fields.category,
        difficulty: fields.difficulty,
        cooking_time_minutes: fields.cooking_time,
        servings: fields.servings,
        dietary,
        image_url: fields.image_url,
    }
}

fn handle_add(ctx: &mut RecipeContext, title: String, fields: RecipeFields) -> Result<()> {
    let draft = draft_from_fields(Some(title), fields, false);
    let result = ctx.api.add_recipe(draft)?;
    print!("{}", render_messages(&result.messages));
    print_all(ctx);
    Ok(())
}

fn handle_edit(
    ctx: &mut RecipeContext,
    recipe: String,
    title: Option<String>,
    fields: RecipeFields,
    clear_diet: bool,
) -> Result<()> {
    let draft = draft_from_fields(title, fields, clear_diet);
    let result = ctx.api.update_recipe(&recipe, &draft)?;
    print!("{}", render_messages(&result.messages));
    print_all(ctx);
    Ok(())
}

fn handle_delete(ctx: &mut RecipeContext, recipes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_recipes(&recipes)?;
    print!("{}", render_messages(&result.messages));
    print_all(ctx);
    Ok(())
}

fn handle_favorite(ctx: &mut RecipeContext, recipes: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_favorites(&recipes)?;
    print!("{}", render_messages(&result.messages));
    print_all(ctx);
    Ok(())
}

fn handle_share(ctx: &RecipeContext, recipe: String, copy: bool) -> Result<()> {
    let result = ctx.api.share_recipe(&recipe)?;
    let Some(text) = result.shared_text else {
        return Ok(());
    };
    println!("{}", text);

    if copy {
        let message = match copy_to_clipboard(&text) {
            Ok(()) => CmdMessage::success("Copied to clipboard"),
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                CmdMessage::warning(format!("Could not copy to clipboard: {}", e))
            }
        };
        print!("{}", render_messages(&[message]));
    }
    Ok(())
}

fn handle_vocab(ctx: &RecipeContext) -> Result<()> {
    let result = ctx.api.tag_counts(&ctx.config.dietary_tags);
    print!("{}", render_vocabulary(&ctx.config, &result.tag_counts));
    Ok(())
}

fn handle_config(ctx: &RecipeContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, result.config_path.as_deref()));
        }
    }
    print!("{}", render_messages(&result.messages));
    Ok(())
}

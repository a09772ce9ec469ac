//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a
//! `String` so output can be tested without capturing stdout; the handlers in
//! `commands.rs` do the printing.
//!
//! Width math is Unicode-aware (`unicode-width`): titles may contain accents
//! or emoji, and the table must still line up. Colors are applied after
//! padding so escape codes never count towards a column width.

use colored::Colorize;
use recipebox::api::{CmdMessage, MessageLevel};
use recipebox::config::RecipeConfig;
use recipebox::index::DisplayRecipe;
use recipebox::model::Recipe;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const FAVORITE_MARKER: &str = "★";
pub const NOT_FAVORITE_MARKER: &str = "☆";
const TITLE_MAX_WIDTH: usize = 32;
const DIETARY_MAX_WIDTH: usize = 30;
const CARD_WIDTH: usize = 46;
const EMPTY_LIST: &str = "No recipes found.";

fn favorite_marker(recipe: &Recipe) -> &'static str {
    if recipe.favorite {
        FAVORITE_MARKER
    } else {
        NOT_FAVORITE_MARKER
    }
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

const TABLE_HEADERS: [&str; 8] = [
    "#", "", "Title", "Category", "Time", "Difficulty", "Serves", "Dietary",
];

fn table_row(dr: &DisplayRecipe) -> [String; 8] {
    let recipe = &dr.recipe;
    [
        format!("{}.", dr.index),
        favorite_marker(recipe).to_string(),
        truncate_to_width(&recipe.title, TITLE_MAX_WIDTH),
        or_dash(&recipe.category).to_string(),
        recipe.formatted_cooking_time(),
        or_dash(&recipe.difficulty).to_string(),
        recipe.servings.to_string(),
        truncate_to_width(&recipe.dietary_restrictions.to_string(), DIETARY_MAX_WIDTH),
    ]
}

/// One line per recipe, columns aligned.
pub fn render_table(recipes: &[DisplayRecipe]) -> String {
    if recipes.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let rows: Vec<[String; 8]> = recipes.iter().map(table_row).collect();
    let mut widths = TABLE_HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut output = String::new();
    let header: Vec<String> = TABLE_HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_to_width(h, *w))
        .collect();
    output.push_str(&format!("{}\n", header.join("  ").trim_end().bold()));

    for (row, dr) in rows.iter().zip(recipes) {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, w))| {
                let padded = pad_to_width(cell, *w);
                match col {
                    0 => padded.dimmed().to_string(),
                    1 if dr.recipe.favorite => padded.yellow().to_string(),
                    _ => padded,
                }
            })
            .collect();
        output.push_str(&format!("{}\n", cells.join("  ").trim_end()));
    }
    output
}

fn card_line(content: &str, inner: usize) -> String {
    let text = truncate_to_width(content, inner);
    format!("│ {} │\n", pad_to_width(&text, inner))
}

/// One boxed card per recipe.
pub fn render_cards(recipes: &[DisplayRecipe]) -> String {
    if recipes.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let inner = CARD_WIDTH - 4;
    let border = "─".repeat(CARD_WIDTH - 2);
    let mut output = String::new();

    for (i, dr) in recipes.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        let recipe = &dr.recipe;
        let marker = favorite_marker(recipe);
        let heading = format!("{}. {}", dr.index, recipe.title);
        let heading = truncate_to_width(&heading, inner.saturating_sub(marker.width() + 1));
        let gap = inner.saturating_sub(heading.width() + marker.width());

        output.push_str(&format!("┌{}┐\n", border));
        output.push_str(&format!(
            "│ {}{}{} │\n",
            heading.bold(),
            " ".repeat(gap),
            if recipe.favorite {
                marker.yellow()
            } else {
                marker.normal()
            }
        ));
        output.push_str(&card_line("", inner));
        output.push_str(&card_line(
            &format!("Category: {}", or_dash(&recipe.category)),
            inner,
        ));
        output.push_str(&card_line(
            &format!("Time: {}", recipe.formatted_cooking_time()),
            inner,
        ));
        output.push_str(&card_line(
            &format!("Difficulty: {}", or_dash(&recipe.difficulty)),
            inner,
        ));
        output.push_str(&card_line(&format!("Servings: {}", recipe.servings), inner));
        output.push_str(&card_line(
            &format!("Dietary: {}", recipe.dietary_restrictions),
            inner,
        ));
        if let Some(url) = &recipe.image_url {
            output.push_str(&card_line(&format!("Image: {}", url), inner));
        }
        output.push_str(&format!("└{}┘\n", border));
    }
    output
}

/// Full recipes, laid out for reading or printing.
pub fn render_full_recipes(recipes: &[DisplayRecipe]) -> String {
    let mut output = String::new();
    for (i, dr) in recipes.iter().enumerate() {
        if i > 0 {
            output.push_str("\n================================\n\n");
        }
        let recipe = &dr.recipe;
        output.push_str(&format!(
            "{} {} {}\n",
            format!("{}.", dr.index).yellow(),
            recipe.title.bold(),
            favorite_marker(recipe)
        ));
        output.push_str("--------------------------------\n");
        output.push_str(&format!("Category: {}\n", or_dash(&recipe.category)));
        output.push_str(&format!(
            "Cooking Time: {}\n",
            recipe.formatted_cooking_time()
        ));
        output.push_str(&format!("Difficulty: {}\n", or_dash(&recipe.difficulty)));
        output.push_str(&format!("Servings: {}\n", recipe.servings));
        output.push_str(&format!(
            "Dietary Restrictions: {}\n",
            recipe.dietary_restrictions
        ));
        if let Some(url) = &recipe.image_url {
            output.push_str(&format!("Image: {}\n", url));
        }
        output.push_str(&format!("\n{}\n{}\n", "Ingredients:".bold(), recipe.ingredients));
        output.push_str(&format!(
            "\n{}\n{}\n",
            "Instructions:".bold(),
            recipe.instructions
        ));
    }
    output
}

pub fn render_json(recipes: &[DisplayRecipe]) -> recipebox::error::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(recipes)?))
}

pub fn render_vocabulary(config: &RecipeConfig, tag_counts: &[(String, usize)]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", "Categories:".bold()));
    output.push_str(&format!("  {}\n", config.categories.join(", ")));
    output.push_str(&format!("{}\n", "Difficulties:".bold()));
    output.push_str(&format!("  {}\n", config.difficulties.join(", ")));
    output.push_str(&format!("{}\n", "Dietary tags:".bold()));
    let width = tag_counts.iter().map(|(t, _)| t.width()).max().unwrap_or(0);
    for (tag, count) in tag_counts {
        let noun = if *count == 1 { "recipe" } else { "recipes" };
        output.push_str(&format!(
            "  {}  {}\n",
            pad_to_width(tag, width),
            format!("{} {}", count, noun).dimmed()
        ));
    }
    output
}

pub fn render_config(config: &RecipeConfig, path: Option<&Path>) -> String {
    let mut output = String::new();
    output.push_str(&format!("view = {}\n", config.default_view));
    output.push_str(&format!("samples = {}\n", config.load_samples));
    if let Some(path) = path {
        output.push_str(&format!("{}\n", format!("# {}", path.display()).dimmed()));
    }
    output
}

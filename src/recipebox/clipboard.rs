use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// A clipboard program and the arguments that make it read stdin.
type ClipboardProgram = (&'static str, &'static [&'static str]);

#[cfg(target_os = "macos")]
const CLIPBOARD_PROGRAMS: &[ClipboardProgram] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const CLIPBOARD_PROGRAMS: &[ClipboardProgram] = &[
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("wl-copy", &[]),
];

#[cfg(target_os = "windows")]
const CLIPBOARD_PROGRAMS: &[ClipboardProgram] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const CLIPBOARD_PROGRAMS: &[ClipboardProgram] = &[];

/// Copies text to the system clipboard using the platform's clipboard tool.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if CLIPBOARD_PROGRAMS.is_empty() {
        return Err(RecipeError::Api(
            "Clipboard not supported on this platform".to_string(),
        ));
    }

    let mut last_error = String::new();
    for (program, args) in CLIPBOARD_PROGRAMS {
        match pipe_to(program, args, text) {
            Ok(()) => {
                debug!(program, "copied to clipboard");
                return Ok(());
            }
            Err(e) => last_error = e,
        }
    }

    Err(RecipeError::Api(format!(
        "Failed to copy to clipboard: {}",
        last_error
    )))
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> std::result::Result<(), String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()
        .map_err(|e| format!("{}: {}", program, e))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| format!("{}: {}", program, e))?;
    }

    let status = child.wait().map_err(|e| format!("{}: {}", program, e))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("{} exited with {}", program, status))
    }
}

fn or_blank(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Formats a recipe as plain text for sharing or printing.
pub fn format_for_sharing(recipe: &Recipe) -> String {
    format!(
        "Recipe: {}\n\n\
         Category: {}\n\
         Cooking Time: {}\n\
         Difficulty: {}\n\
         Servings: {}\n\
         Dietary Restrictions: {}\n\n\
         Ingredients:\n{}\n\n\
         Instructions:\n{}",
        recipe.title,
        or_blank(&recipe.category),
        recipe.formatted_cooking_time(),
        or_blank(&recipe.difficulty),
        recipe.servings,
        recipe.dietary_restrictions,
        recipe.ingredients,
        recipe.instructions,
    )
}

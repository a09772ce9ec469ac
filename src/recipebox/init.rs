use crate::api::RecipeApi;
use crate::config::RecipeConfig;
use crate::error::{RecipeError, Result};
use crate::samples;
use crate::store::memory::InMemoryStore;
use crate::store::RecipeStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the config directory (used by tests and scripted setups).
pub const CONFIG_DIR_ENV: &str = "RECIPEBOX_CONFIG_DIR";

pub struct RecipeContext {
    pub api: RecipeApi<InMemoryStore>,
    pub config: RecipeConfig,
}

/// `$RECIPEBOX_CONFIG_DIR` when set, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "recipebox", "recipebox")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RecipeError::Api("Could not determine config dir".to_string()))
}

/// Builds the API over a fresh store, seeded with the sample recipes unless
/// the config or `skip_samples` says otherwise.
pub fn initialize(skip_samples: bool) -> Result<RecipeContext> {
    let dir = config_dir()?;
    let config = match RecipeConfig::load(&dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, path = %dir.display(), "ignoring unreadable config");
            RecipeConfig::default()
        }
    };

    let mut store = InMemoryStore::new();
    if config.load_samples && !skip_samples {
        samples::seed(&mut store)?;
    }
    debug!(config_dir = %dir.display(), recipes = store.len(), "store initialized");

    Ok(RecipeContext {
        api: RecipeApi::new(store, dir),
        config,
    })
}

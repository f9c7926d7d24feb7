//! Configuration module for the image bot.
//!
//! Handles loading the optional `.env` file, reading and validating
//! settings from the environment, and the fixed generation constants.

mod aspect_ratio;
mod log_level;
mod settings;

use std::path::Path;

use tracing::{debug, info, warn};

pub use aspect_ratio::AspectRatio;
pub use log_level::LogLevel;
pub use settings::{parse_admin_ids, ConfigError, Settings};

/// Gemini model used for image generation (Nano Banana).
pub const GEMINI_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Conventional path of the optional environment file.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Loads `KEY=value` pairs from `path` into the process environment.
///
/// Variables that are already set win; dotenv loading never overrides
/// them, so calling this again is a no-op for anything already present.
/// A missing file is skipped silently apart from a debug line. A file
/// that exists but cannot be parsed is skipped with a warning rather
/// than failing startup.
///
/// Returns whether the file was found and loaded.
pub fn load_env_file(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();

    if !path.exists() {
        debug!("No env file at {}, using process environment only", path.display());
        return false;
    }

    match dotenvy::from_path(path) {
        Ok(()) => {
            info!("Loaded environment file: {}", path.display());
            true
        }
        Err(e) => {
            warn!("Skipping unreadable env file {}: {}", path.display(), e);
            false
        }
    }
}

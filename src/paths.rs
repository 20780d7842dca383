//! Centralized path definitions for taskdist
//!
//! Single source of truth for every filesystem path taskdist reads or
//! writes by default.
//!
//! ## Storage Layout
//!
//! ### Per-Project (working directory)
//!
//! ```text
//! project/
//! ├── taskdist.toml          # Project config (store paths, weights, server)
//! ├── workforce.toml         # Tasks and employees
//! └── cv/                    # Parsed CV profiles
//!     ├── E1.json
//!     └── E2.json
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! {config_dir}/taskdist/
//! └── config.toml            # Fallback config when no project config exists
//! ```

use std::path::PathBuf;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = "taskdist.toml";

/// Default workforce store filename
pub const WORKFORCE_FILE: &str = "workforce.toml";

/// Default CV profile directory name
pub const CV_DIR: &str = "cv";

/// Global config directory name
const GLOBAL_DIR: &str = "taskdist";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to the project config file (`./taskdist.toml`).
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Get the global taskdist directory.
///
/// Returns `{config_dir}/taskdist/` (e.g. `~/.config/taskdist/` on Linux).
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config")).join(GLOBAL_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

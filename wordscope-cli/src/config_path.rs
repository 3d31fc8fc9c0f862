//! Config file discovery for the CLI
//!
//! Lookup order: `--config <path>`, then `wordscope.yaml` in the working
//! directory, then `<user config dir>/wordscope/config.yaml`. When none of
//! them exists the built-in defaults are used.

use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "wordscope.yaml";

/// User-level config path (e.g. ~/.config/wordscope/config.yaml)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordscope").join("config.yaml"))
}

/// Resolve which config file to load, if any
pub fn resolve_config_path(explicit: Option<&str>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        // An explicit path is returned even if missing so loading can warn
        return Some(PathBuf::from(path));
    }

    let local = working_dir.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    user_config_path().filter(|path| path.is_file())
}

use std::path::{Path, PathBuf};

use swipe_drawer::{DrawerConfig, DrawerError};

/// Return the path to the drawer configuration JSON file.
fn drawer_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("swipe-drawer")
            .join("drawer.json");
    }
    std::env::temp_dir().join("swipe-drawer").join("drawer.json")
}

/// Load the drawer configuration from `path`. A missing file yields
/// defaults.
pub(crate) fn load_drawer_config(
    path: &Path,
) -> Result<DrawerConfig, DrawerError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(DrawerConfig::default());
        },
        Err(err) => return Err(err.into()),
    };
    DrawerConfig::from_json_str(&content)
}

/// Load the configuration from disk, falling back to defaults on error.
pub(crate) fn load_initial_drawer_config() -> DrawerConfig {
    let path = drawer_config_path();
    match load_drawer_config(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!(
                "failed to load drawer config from {}, using defaults: {err}",
                path.display()
            );
            DrawerConfig::default()
        },
    }
}

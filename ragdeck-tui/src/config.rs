//! Navigator config — JSON load from the user's config directory.

use std::path::{Path, PathBuf};

use ragdeck_core::navigator::NavigatorConfig;

/// Default config file location: `<config_dir>/ragdeck/config.json`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ragdeck")
        .join("config.json")
}

/// Load the navigator config from disk. Returns defaults if the file is
/// missing or corrupt.
pub fn load(path: &Path) -> NavigatorConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => NavigatorConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_returns_defaults() {
        let config = load(Path::new("/nonexistent/path/config.json"));
        assert!(!config.preserve_step_progress);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("ragdeck_config_corrupt");
        let path = dir.join("config.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let config = load(&path);
        assert!(!config.preserve_step_progress);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn reads_step_preservation_flag() {
        let dir = std::env::temp_dir().join("ragdeck_config_load");
        let path = dir.join("config.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, r#"{"preserve_step_progress": true}"#).unwrap();

        let config = load(&path);
        assert!(config.preserve_step_progress);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let dir = std::env::temp_dir().join("ragdeck_config_extra");
        let path = dir.join("config.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, r#"{"preserve_step_progress": true, "future": 1}"#).unwrap();

        let config = load(&path);
        assert!(config.preserve_step_progress);

        let _ = std::fs::remove_dir_all(&dir);
    }
}

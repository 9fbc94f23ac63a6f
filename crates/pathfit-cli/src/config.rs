//! pathfit configuration file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level pathfit configuration (`pathfit.toml`).
///
/// CLI flags win over config values; config values win over defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathfitConfig {
    /// Bank to use when `--bank` is not given: a file path, or "builtin".
    #[serde(default = "default_bank")]
    pub default_bank: String,
    /// Output directory for reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Default report format: json, markdown, html, or all.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Save raw responses alongside the report after `run`.
    #[serde(default = "default_save_responses")]
    pub save_responses: bool,
}

fn default_bank() -> String {
    "builtin".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./pathfit-results")
}
fn default_format() -> String {
    "json".to_string()
}
fn default_save_responses() -> bool {
    true
}

impl Default for PathfitConfig {
    fn default() -> Self {
        Self {
            default_bank: default_bank(),
            output_dir: default_output_dir(),
            default_format: default_format(),
            save_responses: default_save_responses(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `pathfit.toml` in the current directory
/// 2. `~/.config/pathfit/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<PathfitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("pathfit.toml");
        if local.exists() {
            Some(local)
        } else if let Some(dir) = config_dir() {
            let global = dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<PathfitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => Ok(PathfitConfig::default()),
    }
}

fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("pathfit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PathfitConfig::default();
        assert_eq!(config.default_bank, "builtin");
        assert_eq!(config.default_format, "json");
        assert!(config.save_responses);
        assert_eq!(config.output_dir, PathBuf::from("./pathfit-results"));
    }

    #[test]
    fn parse_partial_config() {
        let toml_str = r#"
default_bank = "banks/corporate-trainer.toml"
default_format = "all"
"#;
        let config: PathfitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.default_bank, "banks/corporate-trainer.toml");
        assert_eq!(config.default_format, "all");
        // Unspecified fields fall back to defaults.
        assert!(config.save_responses);
    }

    #[test]
    fn missing_explicit_path_fails() {
        let result = load_config_from(Some(Path::new("/no/such/pathfit.toml")));
        assert!(result.is_err());
    }
}

use crate::profile::{ProfileDefaults, DEFAULT_AVATAR_URL, DEFAULT_BIO, DEFAULT_NAME};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/profcard/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfcardConfig {
    /// Name shown when the form's name is blank.
    pub default_name: String,
    /// Bio shown when the form's bio is empty.
    pub default_bio: String,
    /// Avatar image for every card.
    pub avatar_url: String,
    /// Refuse to build a card while the form has errors (blank name, bad links).
    pub require_valid_links: bool,
    /// Directory for `profcard export` when `--out-dir` is not given.
    pub export_dir: Option<PathBuf>,
}

impl Default for ProfcardConfig {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_NAME.to_string(),
            default_bio: DEFAULT_BIO.to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            require_valid_links: true,
            export_dir: None,
        }
    }
}

impl ProfcardConfig {
    pub fn profile_defaults(&self) -> ProfileDefaults {
        ProfileDefaults {
            name: self.default_name.clone(),
            bio: self.default_bio.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("profcard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProfcardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ProfcardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ProfcardConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ProfcardConfig::default();
        assert_eq!(cfg.default_name, "Anonymous User");
        assert_eq!(cfg.default_bio, "Social media enthusiast");
        assert!(cfg.require_valid_links);
        assert!(cfg.export_dir.is_none());
        assert_eq!(cfg.profile_defaults(), ProfileDefaults::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ProfcardConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ProfcardConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            default_name = "Mystery Guest"
            require_valid_links = false
        "#;
        let cfg: ProfcardConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_name, "Mystery Guest");
        assert_eq!(cfg.default_bio, "Social media enthusiast");
        assert!(!cfg.require_valid_links);
        assert_eq!(cfg.avatar_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn config_toml_export_dir() {
        let toml = r#"
            export_dir = "/tmp/cards"
        "#;
        let cfg: ProfcardConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.export_dir, Some(PathBuf::from("/tmp/cards")));
        assert_eq!(cfg.profile_defaults().name, "Anonymous User");
    }
}

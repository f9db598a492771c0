use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Processing flags recognized by the conversion pipeline, loadable from
/// `~/.config/idn/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdnConfig {
    /// Use the legacy IDNA2003-compatible branch of the character map for
    /// the deviation characters (ß, ς, ZWJ, ZWNJ).
    #[serde(default)]
    pub transitional: bool,
    /// Restrict ASCII label characters to letters, digits, and hyphen
    /// (STD3).
    #[serde(default)]
    pub use_std3_ascii_rules: bool,
    /// Enforce the RFC 5893 Bidi Rule per label.
    #[serde(default)]
    pub check_bidi: bool,
    /// Enforce the RFC 5892 joiner context rules (on by default, as UTS46
    /// processing prescribes).
    #[serde(default = "default_true")]
    pub check_contextj: bool,
    /// Enforce the RFC 5892 contextual-character rules (middle dot, Greek
    /// numeral sign, Hebrew punctuation, Arabic digit mixing).
    #[serde(default)]
    pub check_contexto: bool,
}

fn default_true() -> bool {
    true
}

impl Default for IdnConfig {
    fn default() -> Self {
        Self {
            transitional: false,
            use_std3_ascii_rules: false,
            check_bidi: false,
            check_contextj: true,
            check_contexto: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("idn")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<IdnConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = IdnConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: IdnConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = IdnConfig::default();
        assert!(!cfg.transitional);
        assert!(!cfg.use_std3_ascii_rules);
        assert!(!cfg.check_bidi);
        assert!(cfg.check_contextj);
        assert!(!cfg.check_contexto);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = IdnConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: IdnConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            transitional = true
            use_std3_ascii_rules = true
            check_bidi = true
        "#;
        let cfg: IdnConfig = toml::from_str(toml).unwrap();
        assert!(cfg.transitional);
        assert!(cfg.use_std3_ascii_rules);
        assert!(cfg.check_bidi);
        // Omitted fields keep their defaults.
        assert!(cfg.check_contextj);
        assert!(!cfg.check_contexto);
    }

    #[test]
    fn config_toml_contextj_opt_out() {
        let toml = "check_contextj = false";
        let cfg: IdnConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.check_contextj);
    }

    #[test]
    fn load_or_init_creates_then_rereads_the_default_file() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let cfg = load_or_init().unwrap();
        assert_eq!(cfg, IdnConfig::default());
        assert!(config_path().unwrap().exists());

        let again = load_or_init().unwrap();
        assert_eq!(again, cfg);

        std::env::remove_var("XDG_CONFIG_HOME");
    }
}

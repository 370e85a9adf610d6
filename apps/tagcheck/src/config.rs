//! Configuration discovery and effective settings resolution.
//!
//! tagcheck reads an optional `tagcheck.toml|yaml|yml` from the root
//! directory and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `template`: `index.html`
//! - `assets`: `assets`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE: &str = "index.html";
pub const DEFAULT_ASSETS: &str = "assets";
pub const DEFAULT_OUTPUT: &str = "human";

const CONFIG_FILES: [&str; 3] = ["tagcheck.toml", "tagcheck.yaml", "tagcheck.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `tagcheck.toml|yaml`.
pub struct TagcheckConfig {
    pub template: Option<String>,
    pub assets: Option<String>,
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub template: String,
    pub assets: String,
    pub output: String,
    pub source: ConfigSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Where the file-level settings came from.
pub enum ConfigSource {
    /// No config file in the root.
    Defaults,
    /// Settings loaded from this file.
    File(PathBuf),
    /// This file exists but could not be parsed; defaults were used.
    Invalid(PathBuf),
}

/// First config file present in `root`, in lookup order.
pub fn config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}

/// Load `TagcheckConfig` from the first config file present.
///
/// Returns `None` when no file exists or it cannot be parsed.
pub fn load_config(root: &Path) -> Option<TagcheckConfig> {
    parse_config(&config_file(root)?)
}

fn parse_config(path: &Path) -> Option<TagcheckConfig> {
    let s = fs::read_to_string(path).ok()?;
    if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&s).ok()
    } else {
        serde_yaml::from_str(&s).ok()
    }
}

/// Resolve `Effective` by merging CLI flags, config file, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_template: Option<&str>,
    cli_assets: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let root = PathBuf::from(cli_root.unwrap_or("."));
    let (cfg, source) = match config_file(&root) {
        None => (TagcheckConfig::default(), ConfigSource::Defaults),
        Some(path) => match parse_config(&path) {
            Some(cfg) => (cfg, ConfigSource::File(path)),
            None => (TagcheckConfig::default(), ConfigSource::Invalid(path)),
        },
    };

    let template = cli_template
        .map(|s| s.to_string())
        .or(cfg.template)
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
    let assets = cli_assets
        .map(|s| s.to_string())
        .or(cfg.assets)
        .unwrap_or_else(|| DEFAULT_ASSETS.to_string());
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    Effective {
        root,
        template,
        assets,
        output,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path().to_str(), None, None, None);
        assert_eq!(eff.template, "index.html");
        assert_eq!(eff.assets, "assets");
        assert_eq!(eff.output, "human");
        assert_eq!(eff.source, ConfigSource::Defaults);
        assert!(config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_toml_and_cli_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("tagcheck.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
template = "templates/base.html"
assets = "static"
output = "json"
    "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None, None);
        assert_eq!(eff.template, "templates/base.html");
        assert_eq!(eff.assets, "static");
        assert_eq!(eff.output, "json");
        assert_eq!(eff.source, ConfigSource::File(root.join("tagcheck.toml")));

        let eff = resolve_effective(root.to_str(), Some("page.html"), None, Some("human"));
        assert_eq!(eff.template, "page.html");
        assert_eq!(eff.assets, "static");
        assert_eq!(eff.output, "human");
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("tagcheck.yml"), "assets: public\n").unwrap();
        let eff = resolve_effective(root.to_str(), None, None, None);
        assert_eq!(eff.assets, "public");
        assert_eq!(eff.template, "index.html");
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("tagcheck.toml"), "template = [").unwrap();
        assert!(config_file(root).is_some());
        assert!(load_config(root).is_none());
        let eff = resolve_effective(root.to_str(), None, None, None);
        assert_eq!(eff.template, "index.html");
        assert_eq!(eff.source, ConfigSource::Invalid(root.join("tagcheck.toml")));
    }
}

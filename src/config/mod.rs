//! Configuration loading for Clarity.
//!
//! A `.clarityrc.json` is searched for in the working directory and its
//! parents. CLI flags override file values; the resolved API key is passed
//! explicitly into the engine, never read from ambient state inside the
//! library.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".clarityrc.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Credential for the AI-assisted analyzers
    pub api_key: Option<String>,
    /// Completion model override
    pub model: Option<String>,
    /// Completion endpoint override
    pub base_url: Option<String>,
    /// Always run in extended mode
    pub extended: bool,
    /// Minimum overall score (exit 1 below it)
    pub threshold: Option<u8>,
}

/// Load config. An explicit path must exist; otherwise the filename is
/// searched for in `work_dir` and its parents, defaulting when absent.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(d) = dir {
        let candidate = d.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = d.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_no_file_present() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.extended);
    }

    #[test]
    fn reads_camel_case_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let mut file = fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"apiKey": "sk-test", "extended": true, "threshold": 70}}"#
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert!(config.extended);
        assert_eq!(config.threshold, Some(70));
    }

    #[test]
    fn searches_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"model": "gpt-4o"}"#,
        )
        .unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested, None).unwrap();
        assert_eq!(config.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(dir.path(), Some(Path::new("nope.json")));
        assert!(result.is_err());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        let result = load_config(dir.path(), None);
        assert!(result.is_err());
    }
}

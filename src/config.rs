use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".keyscanrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories (or glob patterns) to scan, relative to `sourceRoot`.
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Key list whose entries are left out of `keys.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_keys: Option<String>,
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/build/**"]
        .map(String::from)
        .to_vec()
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_output_dir() -> String {
    "./i18n-extract".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: default_ignores(),
            ignore_test_files: default_ignore_test_files(),
            source_root: default_source_root(),
            output_dir: default_output_dir(),
            existing_keys: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` or `includes` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Entries without wildcards are literal paths, brackets included.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::config::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.includes.is_empty());
        assert_eq!(config.ignores, default_ignores());
        assert!(config.ignore_test_files);
        assert_eq!(config.source_root, "./");
        assert_eq!(config.output_dir, "./i18n-extract");
        assert_eq!(config.existing_keys, None);
    }

    #[test]
    fn test_parse_config() {
        let json = r#"{
              "includes": ["src"],
              "ignores": ["**/generated/**"],
              "ignoreTestFiles": false,
              "outputDir": "./out",
              "existingKeys": "./locales/en.json"
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.includes, vec!["src"]);
        assert_eq!(config.ignores, vec!["**/generated/**"]);
        assert!(!config.ignore_test_files);
        assert_eq!(config.output_dir, "./out");
        assert_eq!(config.existing_keys.as_deref(), Some("./locales/en.json"));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{ "outputDir": "./reports" }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.output_dir, "./reports");
        assert_eq!(config.ignores, default_ignores());
        assert_eq!(config.source_root, "./");
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("src").join("components");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_stops_at_git_root() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        assert!(find_config_file(dir.path()).is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["**/test/**"] }"#,
        )
        .unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file);
        assert_eq!(result.config.ignores, vec!["**/test/**"]);
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file);
        assert_eq!(result.config, Config::default());
    }

    #[test]
    fn test_load_config_invalid_json_fails() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ nope").unwrap();

        let err = load_config(dir.path()).err().unwrap();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_validate_invalid_ignore_pattern() {
        let config = Config {
            ignores: vec!["[invalid".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ignores"));
    }

    #[test]
    fn test_validate_invalid_include_pattern() {
        let config = Config {
            includes: vec!["src/**/[invalid".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("includes"));
    }

    #[test]
    fn test_validate_bracket_literal_include() {
        let config = Config {
            includes: vec!["app/[locale]".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        assert!(json.contains("\"outputDir\""));
        assert!(!json.contains("existingKeys"));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Config::default());
    }
}

//! Comparison settings loaded from TOML
//!
//! Every key is optional:
//!
//! ```toml
//! [diff]
//! ignore_whitespace = true
//! ignore_case = false
//!
//! [summary]
//! top_sections_count = 5
//! max_key_number_changes = 10
//! ```

use anyhow::Context;
use diff_engine::{DiffOptions, SummaryOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub diff: DiffOptions,
    pub summary: SummaryOptions,
}

impl CompareConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Apply command-line flags on top of file values
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(on) = overrides.ignore_whitespace {
            self.diff.ignore_whitespace = on;
        }
        if let Some(on) = overrides.ignore_case {
            self.diff.ignore_case = on;
        }
        if let Some(n) = overrides.top_sections {
            self.summary.top_sections_count = n;
        }
        if let Some(n) = overrides.max_number_changes {
            self.summary.max_key_number_changes = n;
        }
        self
    }
}

/// Flags that take precedence over the config file; `None` keeps the file value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub ignore_whitespace: Option<bool>,
    pub ignore_case: Option<bool>,
    pub top_sections: Option<usize>,
    pub max_number_changes: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CompareConfig::from_str("").unwrap();
        assert_eq!(config, CompareConfig::default());
        assert_eq!(config.summary.top_sections_count, 5);
        assert_eq!(config.summary.max_key_number_changes, 10);
    }

    #[test]
    fn test_partial_tables() {
        let config = CompareConfig::from_str(
            r#"
            [diff]
            ignore_case = true

            [summary]
            max_key_number_changes = 3
            "#,
        )
        .unwrap();
        assert!(config.diff.ignore_case);
        assert!(!config.diff.ignore_whitespace);
        assert_eq!(config.summary.top_sections_count, 5);
        assert_eq!(config.summary.max_key_number_changes, 3);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let err = CompareConfig::from_str("[diff\nignore_case = ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = CompareConfig::from_str("[summary]\ntop_sections_count = 2").unwrap();
        let config = config.with_overrides(&Overrides {
            ignore_whitespace: Some(true),
            ignore_case: None,
            top_sections: Some(7),
            max_number_changes: None,
        });
        assert!(config.diff.ignore_whitespace);
        assert_eq!(config.summary.top_sections_count, 7);
        assert_eq!(config.summary.max_key_number_changes, 10);
    }

    #[test]
    fn test_overrides_can_switch_file_options_off() {
        let config = CompareConfig::from_str("[diff]\nignore_case = true\nignore_whitespace = true")
            .unwrap()
            .with_overrides(&Overrides {
                ignore_case: Some(false),
                ..Default::default()
            });
        assert!(!config.diff.ignore_case);
        assert!(config.diff.ignore_whitespace);
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = CompareConfig::from_file("/nonexistent/compare.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/compare.toml"));
    }
}

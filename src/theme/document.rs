//! TextMate / VS Code theme JSON format.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::core::{ParseColorError, RuleSettings};

/// Errors from loading or building a theme.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ThemeError {
    /// Theme file could not be read.
    #[error("failed to read theme {path}: {source}")]
    Io {
        /// Path of the theme file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Malformed JSON or an unsupported rule shape.
    #[error("invalid theme json: {0}")]
    Json(#[from] serde_json::Error),
    /// A color string in a rule or in `colors` did not parse.
    #[error(transparent)]
    Color(#[from] ParseColorError),
    /// A consulted `colors` entry is not a string.
    #[error("colors.{key} must be a color string")]
    ColorNotString {
        /// The offending `colors` key.
        key: String,
    },
}

/// A parsed theme document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    /// Color roles (`foreground`, `editor.background`, ...).
    #[serde(default)]
    pub colors: HashMap<String, serde_json::Value>,
    /// VS Code style rule list.
    #[serde(default)]
    pub token_colors: Vec<ThemeRule>,
    /// TextMate style rule list.
    #[serde(default)]
    pub settings: Vec<ThemeRule>,
}

/// One scope rule.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeRule {
    /// Scopes the rule applies to. Missing means every scope.
    #[serde(default)]
    pub scope: Option<ScopeSpec>,
    /// Style applied to those scopes.
    pub settings: RuleSettings,
}

/// The `scope` field: a comma-separated string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScopeSpec {
    /// `"keyword, storage.type"`
    One(String),
    /// `["keyword", "storage.type"]`
    Many(Vec<String>),
}

impl ScopeSpec {
    /// Individual scopes named by this `scope` value. An empty string applies to
    /// every scope.
    pub fn scopes(&self) -> Vec<&str> {
        match self {
            ScopeSpec::One(s) if s.is_empty() => vec![""],
            ScopeSpec::One(s) => crate::core::split_scope_list(s),
            ScopeSpec::Many(list) => list.iter().map(String::as_str).collect(),
        }
    }
}

impl ThemeDocument {
    /// Parse a document from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(s)?)
    }

    /// All rules, `tokenColors` before `settings`.
    pub fn rules(&self) -> impl Iterator<Item = &ThemeRule> {
        self.token_colors.iter().chain(self.settings.iter())
    }

    /// First present color among `keys`.
    pub fn color_role(&self, keys: &[&str]) -> Result<Option<&str>, ThemeError> {
        for key in keys {
            if let Some(value) = self.colors.get(*key) {
                return match value.as_str() {
                    Some(s) => Ok(Some(s)),
                    None => Err(ThemeError::ColorNotString {
                        key: (*key).to_string(),
                    }),
                };
            }
        }
        Ok(None)
    }
}

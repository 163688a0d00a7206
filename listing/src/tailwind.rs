//! Build-scan configuration for the CSS utility generator.
//!
//! Tailwind scans the project tree for utility-class usage and emits only
//! the classes it finds. This module owns the typed form of that
//! configuration: which paths to scan, the custom wine palette, and the
//! plugins to enable. [`ScanConfig::render_js`] emits the
//! `tailwind.config.js` module the build tool actually reads, so the
//! checked-in file is generated, never hand-edited.
//!
//! # Example
//!
//! ```rust
//! use vintry_listing::tailwind::ScanConfig;
//!
//! let config = ScanConfig::default();
//! config.validate().unwrap();
//! std::fs::write("tailwind.config.js", config.render_js()).unwrap();
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error raised by [`ScanConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A content glob was empty.
    #[error("empty content glob at index {0}")]
    EmptyGlob(usize),
    /// A palette entry was not a #rrggbb hex string.
    #[error("color '{name}' has malformed hex value '{value}'")]
    BadColor {
        /// Palette key.
        name: String,
        /// Offending value.
        value: String,
    },
}

/// The complete build-scan configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Glob patterns for files to scan for utility-class usage.
    pub content: Vec<String>,
    /// Theme customization.
    pub theme: Theme,
    /// Plugin package names to enable.
    pub plugins: Vec<String>,
}

/// Theme section; only extensions, the base theme is untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Additions layered over the default theme.
    pub extend: ThemeExtend,
}

/// Additions to the base theme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeExtend {
    /// Named colors added to the palette, as #rrggbb hex strings.
    /// BTreeMap keeps the emitted config stable across runs.
    pub colors: BTreeMap<String, String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        let mut colors = BTreeMap::new();
        colors.insert("wine".to_string(), "#722F37".to_string());
        colors.insert("wine-light".to_string(), "#A4424D".to_string());
        colors.insert("wine-dark".to_string(), "#4A1F24".to_string());

        ScanConfig {
            content: vec![
                "./templates/**/*.html".to_string(),
                "./*/templates/**/*.html".to_string(),
                "./static/**/*.js".to_string(),
            ],
            theme: Theme {
                extend: ThemeExtend { colors },
            },
            plugins: vec!["@tailwindcss/forms".to_string()],
        }
    }
}

impl ScanConfig {
    /// Check that every glob is non-empty and every color is #rrggbb hex.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, glob) in self.content.iter().enumerate() {
            if glob.trim().is_empty() {
                return Err(ConfigError::EmptyGlob(i));
            }
        }
        for (name, value) in &self.theme.extend.colors {
            let hex = value.strip_prefix('#').unwrap_or("");
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ConfigError::BadColor {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Serialize the configuration as JSON, the form deployment tooling
    /// stores overrides in.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a configuration from its JSON form.
    pub fn from_json(json: &str) -> Result<ScanConfig, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Emit the `tailwind.config.js` module consumed by the build tool.
    pub fn render_js(&self) -> String {
        let mut out = String::new();
        out.push_str("/** @type {import('tailwindcss').Config} */\n");
        out.push_str("module.exports = {\n");

        out.push_str("  content: [\n");
        for glob in &self.content {
            out.push_str(&format!("    '{glob}',\n"));
        }
        out.push_str("  ],\n");

        out.push_str("  theme: {\n    extend: {\n      colors: {\n");
        for (name, value) in &self.theme.extend.colors {
            out.push_str(&format!("        '{name}': '{value}',\n"));
        }
        out.push_str("      }\n    },\n  },\n");

        out.push_str("  plugins: [\n");
        for plugin in &self.plugins {
            out.push_str(&format!("    require('{plugin}'),\n"));
        }
        out.push_str("  ],\n}\n");

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_carries_declared_entries() {
        let config = ScanConfig::default();

        assert_eq!(
            config.content,
            vec![
                "./templates/**/*.html",
                "./*/templates/**/*.html",
                "./static/**/*.js",
            ]
        );
        assert_eq!(config.theme.extend.colors.len(), 3);
        assert_eq!(
            config.theme.extend.colors.get("wine").map(String::as_str),
            Some("#722F37")
        );
        assert_eq!(
            config.theme.extend.colors.get("wine-light").map(String::as_str),
            Some("#A4424D")
        );
        assert_eq!(
            config.theme.extend.colors.get("wine-dark").map(String::as_str),
            Some("#4A1F24")
        );
        assert_eq!(config.plugins, vec!["@tailwindcss/forms"]);
    }

    #[test]
    fn default_validates() {
        assert_eq!(ScanConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_malformed_hex() {
        let mut config = ScanConfig::default();
        config
            .theme
            .extend
            .colors
            .insert("mud".to_string(), "#72G".to_string());

        assert_eq!(
            config.validate(),
            Err(ConfigError::BadColor {
                name: "mud".to_string(),
                value: "#72G".to_string(),
            })
        );
    }

    #[test]
    fn rejects_empty_glob() {
        let mut config = ScanConfig::default();
        config.content.push("  ".to_string());

        assert_eq!(config.validate(), Err(ConfigError::EmptyGlob(3)));
    }

    #[test]
    fn renders_config_module() {
        let js = ScanConfig::default().render_js();

        assert!(js.starts_with("/** @type {import('tailwindcss').Config} */"));
        assert!(js.contains("'./templates/**/*.html',"));
        assert!(js.contains("'./*/templates/**/*.html',"));
        assert!(js.contains("'./static/**/*.js',"));
        assert!(js.contains("'wine': '#722F37',"));
        assert!(js.contains("'wine-light': '#A4424D',"));
        assert!(js.contains("'wine-dark': '#4A1F24',"));
        assert!(js.contains("require('@tailwindcss/forms'),"));
    }

    #[test]
    fn json_round_trip() {
        let config = ScanConfig::default();
        let json = config.to_json().unwrap();
        let back = ScanConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn json_rejects_wrong_shape() {
        assert!(ScanConfig::from_json(r#"{"content": "not-a-list"}"#).is_err());
    }
}

//! Theme configuration resolved once at application start.
//!
//! Platforms parse the embedded `assets/theme/theme.json` (or any other JSON
//! they ship), provide the result through context, and components read it
//! with [`use_theme`]. Missing fields fall back to [`ThemeConfig::default`].

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default theme shipped with the shared crate.
pub const DEFAULT_THEME_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/theme.json"
));

/// Shared stylesheet (tokens, page layout, nav links). Platforms inline it.
pub const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid theme configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme value `{field}` must be positive (got {value})")]
    NonPositive { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Title rendered next to the default logo.
    pub template_name: String,
    /// Expanded drawer width in px.
    pub navigation_size: f64,
    /// Collapsed drawer width in px.
    pub collapsed_navigation_size: f64,
    /// Right border of the drawer in px.
    pub navigation_border_width: f64,
    /// Length of one spacing unit in rem.
    pub spacing_rem: f64,
    /// Minimum toolbar height in px; the nav header matches it.
    pub toolbar_min_height: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            template_name: "Navshell".to_string(),
            navigation_size: 260.0,
            collapsed_navigation_size: 68.0,
            navigation_border_width: 0.0,
            spacing_rem: 0.25,
            toolbar_min_height: 64.0,
        }
    }
}

impl ThemeConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the embedded default theme.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_THEME_JSON)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("navigationSize", self.navigation_size),
            ("collapsedNavigationSize", self.collapsed_navigation_size),
            ("spacingRem", self.spacing_rem),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    /// CSS length for `units` spacing units (`spacing(6)` → `1.5rem`).
    pub fn spacing(&self, units: f64) -> String {
        let rem = units * self.spacing_rem;
        if rem == 0.0 {
            "0".to_string()
        } else {
            format!("{}rem", trim_float(rem))
        }
    }
}

/// Theme from context, or the built-in default when no provider exists.
pub fn use_theme() -> ThemeConfig {
    try_use_context::<ThemeConfig>().unwrap_or_default()
}

/// Render floats without trailing zeros (`1.5`, `6`, `1.59375`). Six decimals
/// keep every eighth of a spacing unit exact.
pub(crate) fn trim_float(value: f64) -> String {
    let s = format!("{value:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_theme_parses() {
        let theme = ThemeConfig::embedded().unwrap();
        assert_eq!(theme.navigation_size, 260.0);
        assert_eq!(theme.collapsed_navigation_size, 68.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let theme = ThemeConfig::from_json(r#"{"templateName":"Console"}"#).unwrap();
        assert_eq!(theme.template_name, "Console");
        assert_eq!(theme.spacing_rem, ThemeConfig::default().spacing_rem);
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = ThemeConfig::from_json("{ navigationSize: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_spacing_is_rejected() {
        let err = ThemeConfig::from_json(r#"{"spacingRem":0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "spacingRem",
                ..
            }
        ));
    }

    #[test]
    fn spacing_converts_units_to_rem() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.spacing(6.0), "1.5rem");
        assert_eq!(theme.spacing(0.0), "0");
        assert_eq!(theme.spacing(4.5), "1.125rem");
    }

    #[test]
    fn spacing_keeps_fractional_units_exact() {
        let theme = ThemeConfig::default();
        // (81 - 0 - 30) / 8 = 6.375 units
        assert_eq!(theme.spacing(6.375), "1.59375rem");
        assert_eq!(theme.spacing(0.125), "0.03125rem");
        assert_eq!(trim_float(-0.0000001), "0");
    }
}

//! Navigation-related user settings.
//!
//! The settings store itself lives in the platform crate (a `Signal<Settings>`
//! provided through context). Components only ever receive a snapshot and hand
//! a modified copy back through a `save_settings` callback.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentWidth {
    Full,
    #[default]
    Boxed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Sidebar narrowed to icon-only width.
    pub nav_collapsed: bool,
    pub mode: Mode,
    pub content_width: ContentWidth,
}

impl Settings {
    /// Copy of these settings with the pinned/collapsed state flipped.
    pub fn with_nav_toggled(&self) -> Self {
        Self {
            nav_collapsed: !self.nav_collapsed,
            ..self.clone()
        }
    }
}

//! Layout values derived from the navigation state on every render.
//!
//! All values are in theme spacing units unless noted; convert them with
//! [`ThemeConfig::spacing`](crate::core::theme::ThemeConfig::spacing).

use crate::core::settings::Settings;
use crate::core::theme::trim_float;

/// Left padding of the header whenever the menu is visually expanded.
pub const EXPANDED_PADDING_LEFT: f64 = 6.0;

/// Horizontal room (px) reserved for the brand mark in a collapsed drawer.
const COLLAPSED_BRAND_ALLOWANCE: f64 = 30.0;

/// Pixels per spacing unit used when centering the mark in a collapsed drawer.
const COLLAPSED_PADDING_DIVISOR: f64 = 8.0;

/// Transition applied to every element that fades with the collapsed state.
pub const FADE_TRANSITION: &str = "opacity .25s ease-in-out";

/// The drawer is narrowed and the pointer is not expanding it.
pub fn is_menu_collapsed(nav_collapsed: bool, nav_hover: bool) -> bool {
    nav_collapsed && !nav_hover
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderLayout {
    /// Left padding in spacing units.
    pub padding_left: f64,
    /// Opacity shared by the lock/unlock icons and the header title.
    pub icon_opacity: f64,
}

impl HeaderLayout {
    /// `padding_left` goes negative when `collapsed_nav_width` is narrower
    /// than the border plus the brand allowance; renderers clamp it with
    /// [`HeaderLayout::css_padding_left`].
    pub fn compute(
        settings: &Settings,
        nav_hover: bool,
        custom_branding: bool,
        collapsed_nav_width: f64,
        navigation_border_width: f64,
    ) -> Self {
        let collapsed = is_menu_collapsed(settings.nav_collapsed, nav_hover);

        let padding_left = match (collapsed, custom_branding) {
            (true, true) => 0.0,
            (true, false) => {
                (collapsed_nav_width - navigation_border_width - COLLAPSED_BRAND_ALLOWANCE)
                    / COLLAPSED_PADDING_DIVISOR
            }
            (false, _) => EXPANDED_PADDING_LEFT,
        };

        Self {
            padding_left,
            icon_opacity: if collapsed { 0.0 } else { 1.0 },
        }
    }

    /// Left padding safe to emit as CSS (never below zero).
    pub fn css_padding_left(&self) -> f64 {
        self.padding_left.max(0.0)
    }

    /// Inline style for the default lock/unlock icons.
    pub fn icon_style(&self) -> String {
        format!(
            "font-size:1.25rem;pointer-events:none;opacity:{};transition:{FADE_TRANSITION};",
            trim_float(self.icon_opacity)
        )
    }
}

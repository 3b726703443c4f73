//! Shared UI crate for Navshell: the vertical navigation drawer and the
//! platform-agnostic state/layout logic behind it.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Inline icon set and static brand mark
    pub mod icons;
    pub mod logo;

    // Navigation header, pin toggle and the drawer composing them
    pub mod nav_toggle;
    pub mod vertical_nav;
    pub mod vertical_nav_header;

    pub use nav_toggle::VerticalNavToggle;
    pub use vertical_nav::VerticalNav;
    pub use vertical_nav_header::register_brand_link;
    pub use vertical_nav_header::{
        Branding, BrandingRenderer, DefaultBranding, MenuLockedIcon, MenuUnlockedIcon,
        NavHeaderContext, VerticalNavHeader,
    };
}

#[cfg(test)]
mod tests {
    mod i18n_missing_keys;
}

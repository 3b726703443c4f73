#![cfg(test)]
/*!
Selector lint for the stylesheets the navigation components rely on.

Components emit these class names from Rust; if a refactor renames or drops one
in CSS the drawer silently loses its styling in packaged desktop builds. When a
selector is renamed on purpose, update the component markup and this list together.

A substring presence check is enough as an early warning.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAV_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/vertical-nav.css"
));

const THEME_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".visually-hidden",
    ".app-shell {",
    ".app-shell__content",
    ".app-shell__menu-button",
    ".app-shell--drawer-closed",
    ".nav-link {",
    ".nav-link.active",
    ".page {",
    "@media (max-width: 720px)",
];

const NAV_SELECTORS: &[&str] = &[
    ".vertical-nav {",
    ".vertical-nav--collapsed",
    ".vertical-nav__menu",
    ".nav-header {",
    ".nav-header__brand-link",
    ".nav-header__logo",
    ".nav-header__title",
    ".nav-header__toggle",
    ".nav-header__toggle--close",
    ".icon {",
];

fn missing(css: &str, selectors: &[&'static str]) -> Vec<&'static str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, THEME_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} required selectors in main.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn nav_stylesheet_contains_required_selectors() {
    let missing = missing(NAV_CSS, NAV_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} required selectors in vertical-nav.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn header_transitions_match_component_timing() {
    // Components fade with `opacity .25s ease-in-out`; the CSS padding/width
    // transitions use the same duration.
    assert!(NAV_CSS.contains("transition: padding .25s ease-in-out"));
    assert!(NAV_CSS.contains("transition: width .25s ease-in-out"));
}

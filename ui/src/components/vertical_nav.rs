use dioxus::prelude::*;

use crate::components::nav_toggle::VerticalNavToggle;
use crate::components::vertical_nav_header::{Branding, VerticalNavHeader};
use crate::core::layout::{is_menu_collapsed, HeaderLayout};
use crate::core::settings::Settings;
use crate::core::theme::{trim_float, use_theme, ThemeConfig};

// Sidebar stylesheet (inlined as well in release native builds)
const VERTICAL_NAV_CSS: Asset = asset!("/assets/styling/vertical-nav.css");
const VERTICAL_NAV_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/vertical-nav.css"
));

/// Drawer width in px for the current collapsed/hover state.
pub fn drawer_width(theme: &ThemeConfig, nav_collapsed: bool, nav_hover: bool) -> f64 {
    if is_menu_collapsed(nav_collapsed, nav_hover) {
        theme.collapsed_navigation_size
    } else {
        theme.navigation_size
    }
}

/// Vertical navigation drawer.
///
/// Owns the transient hover state (a collapsed drawer expands while the
/// pointer is over it), composes [`VerticalNavHeader`] with the pin toggle and
/// renders `children` as the menu body. Settings stay with the caller: the
/// toggle reports changes through `save_settings`.
#[component]
pub fn VerticalNav(
    #[props(default)] hidden: bool,
    settings: Settings,
    save_settings: EventHandler<Settings>,
    toggle_nav_visibility: EventHandler<()>,
    menu_locked_icon: Option<Element>,
    menu_unlocked_icon: Option<Element>,
    vertical_nav_menu_branding: Option<Branding>,
    children: Element,
) -> Element {
    let theme = use_theme();
    let mut nav_hover = use_signal(|| false);
    let hover = nav_hover();

    let layout = HeaderLayout::compute(
        &settings,
        hover,
        vertical_nav_menu_branding.is_some(),
        theme.collapsed_navigation_size,
        theme.navigation_border_width,
    );
    let width = drawer_width(&theme, settings.nav_collapsed, hover);
    let collapsed = is_menu_collapsed(settings.nav_collapsed, hover);
    let class = if collapsed {
        "vertical-nav vertical-nav--collapsed"
    } else {
        "vertical-nav"
    };
    let style = format!(
        "width:{}px;border-right-width:{}px;",
        trim_float(width),
        trim_float(theme.navigation_border_width)
    );

    rsx! {
        document::Link { rel: "stylesheet", href: VERTICAL_NAV_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{VERTICAL_NAV_CSS_INLINE}" }
        }

        aside {
            class: "{class}",
            style: "{style}",
            onmouseenter: move |_| nav_hover.set(true),
            onmouseleave: move |_| nav_hover.set(false),
            VerticalNavHeader {
                hidden,
                nav_hover: hover,
                settings: settings.clone(),
                collapsed_nav_width: theme.collapsed_navigation_size,
                navigation_border_width: theme.navigation_border_width,
                menu_locked_icon: menu_locked_icon.clone(),
                menu_unlocked_icon: menu_unlocked_icon.clone(),
                toggle_nav_visibility,
                save_settings,
                vertical_nav_menu_branding,
                actions: rsx! {
                    VerticalNavToggle {
                        hidden,
                        settings: settings.clone(),
                        layout,
                        menu_locked_icon: menu_locked_icon.clone(),
                        menu_unlocked_icon: menu_unlocked_icon.clone(),
                        toggle_nav_visibility,
                        save_settings,
                    }
                },
            }
            nav { class: "vertical-nav__menu", {children} }
        }
    }
}

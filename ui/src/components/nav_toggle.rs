use dioxus::prelude::*;

use crate::components::icons::CloseIcon;
use crate::components::vertical_nav_header::{MenuLockedIcon, MenuUnlockedIcon};
use crate::core::layout::HeaderLayout;
use crate::core::settings::Settings;
use crate::i18n;
use crate::t;

/// Button at the end of the nav header row.
///
/// In drawer mode (`hidden`) it closes the drawer. Otherwise it pins or
/// unpins the menu by saving the settings with `nav_collapsed` flipped; a
/// collapsed menu shows the unlocked icon, a pinned one the locked icon.
#[component]
pub fn VerticalNavToggle(
    hidden: bool,
    settings: Settings,
    layout: HeaderLayout,
    menu_locked_icon: Option<Element>,
    menu_unlocked_icon: Option<Element>,
    toggle_nav_visibility: EventHandler<()>,
    save_settings: EventHandler<Settings>,
) -> Element {
    i18n::init();

    if hidden {
        let label = t!("nav-close");
        return rsx! {
            button {
                class: "nav-header__toggle nav-header__toggle--close",
                r#type: "button",
                aria_label: "{label}",
                onclick: move |_| toggle_nav_visibility.call(()),
                CloseIcon { style: "font-size:1.25rem;pointer-events:none;".to_string() }
            }
        };
    }

    let collapsed = settings.nav_collapsed;
    let label = if collapsed { t!("nav-pin") } else { t!("nav-unpin") };
    let next = settings.with_nav_toggled();

    rsx! {
        button {
            class: "nav-header__toggle",
            r#type: "button",
            aria_label: "{label}",
            aria_pressed: if collapsed { "false" } else { "true" },
            onclick: move |_| save_settings.call(next.clone()),
            if collapsed {
                MenuUnlockedIcon { layout, icon: menu_unlocked_icon }
            } else {
                MenuLockedIcon { layout, icon: menu_locked_icon }
            }
        }
    }
}

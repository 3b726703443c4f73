use dioxus::prelude::*;

use crate::core::settings::Settings;

#[component]
pub fn Home() -> Element {
    // Subscribe to the platform settings store (if provided) so the status
    // line follows the pin toggle.
    let settings_ctx: Option<Signal<Settings>> = try_use_context::<Signal<Settings>>();
    let nav_collapsed = settings_ctx
        .as_ref()
        .map(|s| s.read().nav_collapsed)
        .unwrap_or_default();

    let status = if nav_collapsed {
        crate::t!("home-nav-collapsed")
    } else {
        crate::t!("home-nav-pinned")
    };

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }
            p { class: "page-home__status", "{status}" }
        }
    }
}

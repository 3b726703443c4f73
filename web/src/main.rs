use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use ui::components::{register_brand_link, VerticalNav};
use ui::core::settings::Settings;
use ui::core::theme::{ThemeConfig, MAIN_CSS};
use ui::i18n;
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
}

fn brand_link(children: Element) -> Element {
    rsx!(Link {
        class: "nav-header__brand-link",
        to: Route::Home {},
        {children}
    })
}

fn load_theme() -> ThemeConfig {
    ThemeConfig::embedded().unwrap_or_else(|err| {
        warn!(%err, "falling back to the built-in theme");
        ThemeConfig::default()
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();
    register_brand_link(brand_link);

    // Theme is resolved once; the settings signal is the app's settings store.
    use_context_provider(load_theme);
    let settings = use_signal(Settings::default);
    use_context_provider(|| settings);

    rsx! {
        document::Style { "{MAIN_CSS}" }

        Router::<Route> {}
    }
}

/// Web layout: the shared vertical nav next to the routed page.
#[component]
fn WebShell() -> Element {
    let mut settings = use_context::<Signal<Settings>>();
    // Small screens show the drawer only after the menu button opens it.
    let mut drawer_open = use_signal(|| false);
    let open = drawer_open();

    rsx! {
        div { class: if open { "app-shell" } else { "app-shell app-shell--drawer-closed" },
            VerticalNav {
                hidden: open,
                settings: settings(),
                save_settings: move |next: Settings| settings.set(next),
                toggle_nav_visibility: move |_| drawer_open.set(!open),
                Link { class: "nav-link", active_class: "active", to: Route::Home {}, {i18n::tr_nav_home()} }
            }
            main { class: "app-shell__content",
                button {
                    class: "app-shell__menu-button",
                    r#type: "button",
                    onclick: move |_| drawer_open.set(!open),
                    "☰"
                }
                Outlet::<Route> {}
            }
        }
    }
}

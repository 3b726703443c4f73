#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
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
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
}

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Navshell – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn brand_link(children: Element) -> Element {
    rsx!(Link { class: "nav-header__brand-link", to: Route::Home {}, {children} })
}

fn load_theme() -> ThemeConfig {
    ThemeConfig::embedded().unwrap_or_else(|err| {
        warn!(%err, "falling back to the built-in theme");
        ThemeConfig::default()
    })
}

#[component]
fn App() -> Element {
    i18n::init();
    register_brand_link(brand_link);

    use_context_provider(load_theme);
    let settings = use_signal(Settings::default);
    use_context_provider(|| settings);

    rsx! {
        // Always inline the shared theme (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS}" }

        Router::<Route> {}
    }
}

/// Desktop layout. The window is wide enough that the drawer never runs in
/// close-button mode; collapsing is done with the pin toggle.
#[component]
fn DesktopShell() -> Element {
    let mut settings = use_context::<Signal<Settings>>();

    rsx! {
        div { class: "app-shell",
            VerticalNav {
                settings: settings(),
                save_settings: move |next: Settings| settings.set(next),
                toggle_nav_visibility: |_| {},
                Link { class: "nav-link", active_class: "active", to: Route::Home {}, {i18n::tr_nav_home()} }
            }
            main { class: "app-shell__content",
                Outlet::<Route> {}
            }
        }
    }
}

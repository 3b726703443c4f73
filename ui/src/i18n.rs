//! Fluent strings for the navigation shell.
//!
//! Bundles live under `i18n/<lang>/navshell-ui.ftl` and are compiled in with
//! `rust-embed`; `en-US` is the fallback every other locale is checked
//! against. The domain is pinned in `i18n.toml` so the compile-time `fl!`
//! checks and the runtime [`LOADER`] read the same files.
//!
//! Components call [`init`] before their first lookup. The requested
//! languages come from the OS on native targets and from
//! `navigator.languages` on the web.
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Looks a key up in the shared [`LOADER`], e.g. `t!("nav-close")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match `domain` in `i18n.toml`.
const DOMAIN: &str = "navshell-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Bundles;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("constant language tag");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Select the user's languages once; later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Bundles, &requested) {
            Ok(selected) => debug!(?selected, "nav shell languages selected"),
            Err(err) => warn!(%err, "language selection failed, using en-US"),
        }
    });
}

/// Label of the home menu entry. Platform crates cannot call `t!` themselves
/// (the `fl!` macro resolves `i18n.toml` from the calling crate).
pub fn tr_nav_home() -> String {
    crate::t!("nav-home")
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    const I18N_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n.toml"));

    #[test]
    fn manifest_pins_the_loader_domain() {
        let expected = format!("domain = \"{DOMAIN}\"");
        assert!(
            I18N_TOML.lines().any(|line| line.trim() == expected),
            "i18n.toml must declare `{expected}` so fl! and LOADER agree"
        );
    }

    #[test]
    fn every_locale_ships_a_bundle_for_the_domain() {
        let file = format!("{DOMAIN}.ftl");
        let mut locales = 0;
        for path in Bundles::iter() {
            let (_, name) = path.split_once('/').expect("bundle inside a locale folder");
            assert_eq!(name, file, "unexpected bundle {path}");
            locales += 1;
        }
        assert!(locales >= 3, "expected en-US, es-ES and fr-FR bundles");
        assert!(Bundles::get(&format!("en-US/{file}")).is_some());
    }

    #[test]
    fn fallback_lookup_resolves() {
        init();
        assert_eq!(fl!(&*LOADER, "nav-home-link"), "Go to home page");
    }
}

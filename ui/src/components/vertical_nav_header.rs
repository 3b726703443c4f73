use std::fmt;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::components::icons::{CircleOutlineIcon, RecordCircleOutlineIcon};
use crate::components::logo::BrandLogo;
use crate::core::layout::{HeaderLayout, FADE_TRANSITION};
use crate::core::settings::Settings;
use crate::core::theme::{trim_float, use_theme};
use crate::i18n;
use crate::t;

const BRAND_LINK_STYLE: &str = "display:flex;align-items:center;text-decoration:none;";

/// Builds the link to the application root around the brand content.
///
/// The shared crate does not know each platform's `Route` enum, so platforms
/// register a builder that wraps `children` in their router `Link`:
/// ```ignore
/// register_brand_link(|children| rsx! {
///     Link { class: "nav-header__brand-link", to: Route::Home {}, {children} }
/// });
/// ```
/// Without a registered builder a plain `<a href="/">` is rendered.
pub type BrandLinkBuilder = fn(children: Element) -> Element;

static BRAND_LINK: OnceCell<BrandLinkBuilder> = OnceCell::new();

pub fn register_brand_link(builder: BrandLinkBuilder) {
    if BRAND_LINK.set(builder).is_err() {
        debug!("brand link builder already registered; keeping the first one");
    }
}

fn root_link(children: Element) -> Element {
    match BRAND_LINK.get() {
        Some(build) => build(children),
        None => rsx! {
            a { class: "nav-header__brand-link", style: BRAND_LINK_STYLE, href: "/", {children} }
        },
    }
}

/// Everything the header received, handed to a custom [`BrandingRenderer`].
#[derive(Clone)]
pub struct NavHeaderContext {
    pub hidden: bool,
    pub nav_hover: bool,
    pub settings: Settings,
    pub collapsed_nav_width: f64,
    pub navigation_border_width: f64,
    pub menu_locked_icon: Option<Element>,
    pub menu_unlocked_icon: Option<Element>,
    pub toggle_nav_visibility: EventHandler<()>,
    pub save_settings: EventHandler<Settings>,
    pub layout: HeaderLayout,
}

/// Renders the branding slot of the navigation header.
pub trait BrandingRenderer {
    fn render(&self, ctx: &NavHeaderContext) -> Element;
}

impl<F> BrandingRenderer for F
where
    F: Fn(&NavHeaderContext) -> Element,
{
    fn render(&self, ctx: &NavHeaderContext) -> Element {
        self(ctx)
    }
}

/// Logo plus template title, linked to the application root.
pub struct DefaultBranding;

impl BrandingRenderer for DefaultBranding {
    fn render(&self, ctx: &NavHeaderContext) -> Element {
        rsx! {
            DefaultBrandLink { title_opacity: ctx.layout.icon_opacity }
        }
    }
}

/// Shareable handle to a custom branding renderer. Two handles are equal only
/// when they point at the same renderer.
#[derive(Clone)]
pub struct Branding(Rc<dyn BrandingRenderer>);

impl Branding {
    pub fn new(renderer: impl BrandingRenderer + 'static) -> Self {
        Self(Rc::new(renderer))
    }

    pub fn render(&self, ctx: &NavHeaderContext) -> Element {
        self.0.render(ctx)
    }
}

impl PartialEq for Branding {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Branding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Branding(..)")
    }
}

#[component]
fn DefaultBrandLink(title_opacity: f64) -> Element {
    let theme = use_theme();
    let title_style = format!(
        "opacity:{};transition:{FADE_TRANSITION}, margin .25s ease-in-out;",
        trim_float(title_opacity)
    );
    let label = t!("nav-home-link");

    root_link(rsx! {
        span { class: "visually-hidden", "{label}" }
        BrandLogo {}
        span { class: "nav-header__title", style: "{title_style}", "{theme.template_name}" }
    })
}

/// Pinned-state icon. Renders `icon` when given, otherwise the default
/// record-circle outline faded with the collapsed state.
#[component]
pub fn MenuLockedIcon(layout: HeaderLayout, icon: Option<Element>) -> Element {
    match icon {
        Some(icon) => icon,
        None => rsx! {
            RecordCircleOutlineIcon { style: layout.icon_style() }
        },
    }
}

/// Auto-collapse icon. Renders `icon` when given, otherwise the default
/// circle outline faded with the collapsed state.
#[component]
pub fn MenuUnlockedIcon(layout: HeaderLayout, icon: Option<Element>) -> Element {
    match icon {
        Some(icon) => icon,
        None => rsx! {
            CircleOutlineIcon { style: layout.icon_style() }
        },
    }
}

/// Header of the vertical navigation drawer: brand slot inside a toolbar-high
/// flex row whose left padding follows the collapsed/hover state.
#[component]
pub fn VerticalNavHeader(
    hidden: bool,
    nav_hover: bool,
    settings: Settings,
    collapsed_nav_width: f64,
    navigation_border_width: f64,
    menu_locked_icon: Option<Element>,
    menu_unlocked_icon: Option<Element>,
    toggle_nav_visibility: EventHandler<()>,
    save_settings: EventHandler<Settings>,
    vertical_nav_menu_branding: Option<Branding>,
    // Trailing controls at the far end of the row (the nav toggle).
    actions: Option<Element>,
) -> Element {
    i18n::init();
    let theme = use_theme();

    let layout = HeaderLayout::compute(
        &settings,
        nav_hover,
        vertical_nav_menu_branding.is_some(),
        collapsed_nav_width,
        navigation_border_width,
    );

    #[cfg(debug_assertions)]
    debug!(
        nav_collapsed = settings.nav_collapsed,
        nav_hover,
        padding_left = layout.padding_left,
        "VerticalNavHeader render"
    );

    let ctx = NavHeaderContext {
        hidden,
        nav_hover,
        settings,
        collapsed_nav_width,
        navigation_border_width,
        menu_locked_icon,
        menu_unlocked_icon,
        toggle_nav_visibility,
        save_settings,
        layout,
    };

    let brand = match &vertical_nav_menu_branding {
        Some(branding) => branding.render(&ctx),
        None => DefaultBranding.render(&ctx),
    };

    let style = format!(
        "padding-left:{};padding-right:{};padding-top:1.5rem;margin-bottom:1rem;min-height:{}px;",
        theme.spacing(layout.css_padding_left()),
        theme.spacing(4.5),
        trim_float(theme.toolbar_min_height),
    );

    rsx! {
        div { class: "nav-header", style: "{style}",
            {brand}
            {actions}
        }
    }
}

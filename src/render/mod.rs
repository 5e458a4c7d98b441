//! Menu template dispatch and shared rendering helpers.
//!
//! Every template is a pure function from the same normalized inputs —
//! restaurant, branch, grouped items, ordered category list — to a complete
//! HTML document. The dispatcher maps a branch's stored template identifier
//! to exactly one renderer through an exhaustive `match`; unknown, empty,
//! and `"default"` identifiers all land on the default renderer, so a stale
//! identifier in the store can never break a public page.
//!
//! HTML comes from [maud](https://maud.lambda.xyz/): compile-time checked
//! templates, auto-escaped interpolation, no runtime template files.
//!
//! The hello-chicken variant predates the grouped-map contract and consumes
//! an ordered list of `{title, items}` sections instead; the dispatcher owns
//! that reshaping so the renderer stays a plain presentation function.

mod default;
mod elegant_minimal;
mod fast_food_dark;
mod hello_chicken;
mod playful_cream;
mod rustic_wood;

use maud::{DOCTYPE, Markup, html};

use crate::config::SiteConfig;
use crate::group::GroupedMenu;
use crate::resolve::NotFoundReason;
use crate::types::{Branch, MenuItem, Restaurant};

const CSS: &str = include_str!("../../static/menu.css");

/// The closed set of known template identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateId {
    Default,
    RusticWood,
    ElegantMinimal,
    FastFoodDark,
    PlayfulCream,
    HelloChicken,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Default,
        TemplateId::RusticWood,
        TemplateId::ElegantMinimal,
        TemplateId::FastFoodDark,
        TemplateId::PlayfulCream,
        TemplateId::HelloChicken,
    ];

    /// Parse a stored or URL identifier. Total: anything unrecognized —
    /// including the empty string and the `"default"` sentinel — maps to
    /// [`TemplateId::Default`].
    pub fn parse(id: &str) -> TemplateId {
        match id {
            "rustic-wood" => TemplateId::RusticWood,
            "elegant-minimal" => TemplateId::ElegantMinimal,
            "fast-food-dark" => TemplateId::FastFoodDark,
            "playful-cream" => TemplateId::PlayfulCream,
            "hello-chicken" => TemplateId::HelloChicken,
            _ => TemplateId::Default,
        }
    }

    /// The identifier as stored on branches and used in public URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Default => "default",
            TemplateId::RusticWood => "rustic-wood",
            TemplateId::ElegantMinimal => "elegant-minimal",
            TemplateId::FastFoodDark => "fast-food-dark",
            TemplateId::PlayfulCream => "playful-cream",
            TemplateId::HelloChicken => "hello-chicken",
        }
    }

    /// Human name for operator-facing listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateId::Default => "Default",
            TemplateId::RusticWood => "Rustic Wood",
            TemplateId::ElegantMinimal => "Elegant Minimal",
            TemplateId::FastFoodDark => "Fast Food Dark",
            TemplateId::PlayfulCream => "Playful Cream",
            TemplateId::HelloChicken => "Hello Chicken",
        }
    }

    /// One-line description for operator-facing listings.
    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::Default => "Clean modern layout",
            TemplateId::RusticWood => "Wood texture with gold accents",
            TemplateId::ElegantMinimal => "Clean cream with serif fonts",
            TemplateId::FastFoodDark => "Dark theme with orange accents",
            TemplateId::PlayfulCream => "Colorful and fun design",
            TemplateId::HelloChicken => "Red bold style, Arabic friendly",
        }
    }
}

/// Everything a template renderer may look at.
#[derive(Debug, Clone, Copy)]
pub struct MenuPage<'a> {
    pub restaurant: &'a Restaurant,
    pub branch: &'a Branch,
    pub menu: &'a GroupedMenu,
    pub site: &'a SiteConfig,
}

/// One titled section of the reshaped menu consumed by the hello-chicken
/// renderer.
#[derive(Debug, Clone, Copy)]
pub struct MenuSection<'a> {
    pub title: &'a str,
    pub items: &'a [MenuItem],
}

/// Render the page with the given template. The single dispatch point.
pub fn render_menu(template: TemplateId, page: &MenuPage) -> Markup {
    match template {
        TemplateId::Default => default::render(page),
        TemplateId::RusticWood => rustic_wood::render(page),
        TemplateId::ElegantMinimal => elegant_minimal::render(page),
        TemplateId::FastFoodDark => fast_food_dark::render(page),
        TemplateId::PlayfulCream => playful_cream::render(page),
        TemplateId::HelloChicken => {
            // Reshape here, not in the renderer: ordered list of sections in
            // canonical category order.
            let sections: Vec<MenuSection> = page
                .menu
                .ordered
                .iter()
                .map(|cat| MenuSection {
                    title: cat,
                    items: page.menu.items(cat),
                })
                .collect();
            hello_chicken::render(page, &sections)
        }
    }
}

/// The "menu not found" view: rendered for unresolved links, never thrown.
pub fn render_not_found(reason: NotFoundReason) -> Markup {
    let content = html! {
        div.not-found {
            h3 { "Menu Not Found" }
            p { "This menu link is invalid or unpublished." }
            p.reason { (reason.message()) }
        }
    };
    base_document("Menu Not Found", None, content)
}

// =========================================================================
// Shared helpers used by every renderer
// =========================================================================

/// Base HTML document: shared stylesheet inline, template palette via body
/// class, optional inline style for settings-driven colors.
pub(crate) fn base_document(title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}

/// Localized price text: integer part grouped by thousands, then the
/// currency label. `5000` → `"5,000 IQD"`.
pub fn format_price(price: f64, currency: &str) -> String {
    let negative_guard = price.max(0.0);
    let whole = negative_guard.trunc() as u64;
    let fraction = negative_guard.fract();
    let grouped = group_thousands(whole);
    if fraction > f64::EPSILON {
        // Menu prices are almost always whole; keep two places when not.
        format!("{grouped}.{:02} {currency}", (fraction * 100.0).round() as u64)
    } else {
        format!("{grouped} {currency}")
    }
}

fn group_thousands(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 1000) as u16);
        n /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push(',');
        out.push_str(&format!("{g:03}"));
    }
    out
}

/// Resolve an item/branch image reference to a displayable URL: absolute
/// URLs pass through, anything else is treated as a storage key under the
/// blob store's public base path.
pub fn item_image_url(image: &str, site: &SiteConfig) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        image.to_string()
    } else {
        format!(
            "{}/{}",
            site.storage_base_url.trim_end_matches('/'),
            image.trim_start_matches('/')
        )
    }
}

/// Inline handler that swaps a broken image for the placeholder graphic.
pub(crate) fn image_fallback(site: &SiteConfig) -> String {
    format!(
        "this.onerror=null;this.src='{}'",
        site.placeholder_image.replace('\'', "")
    )
}

/// An item thumbnail: image with broken-link fallback when a reference is
/// present, placeholder block otherwise. Shared by the card-style templates.
pub(crate) fn item_media(item: &MenuItem, site: &SiteConfig) -> Markup {
    match &item.image {
        Some(image) => html! {
            img.item-media
                src=(item_image_url(image, site))
                alt=(item.name)
                loading="lazy"
                onerror=(image_fallback(site));
        },
        None => html! {
            div.item-media-placeholder { "🍽" }
        },
    }
}

/// Shared empty-menu state. Templates wrap it in their own palette.
pub(crate) fn empty_menu() -> Markup {
    html! {
        div.empty-menu {
            h3 { "No menu items" }
            p { "This branch has no menu items yet" }
        }
    }
}

pub(crate) fn page_title(page: &MenuPage) -> String {
    format!("{} — {}", page.restaurant.name, page.branch.name)
}

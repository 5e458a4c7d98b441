//! Hello-chicken template: bold red, Arabic-friendly, built from reshaped
//! `{title, items}` sections rather than the grouped map.
//!
//! The only template that reads per-branch settings: `primaryColor` and
//! `accentColor` from `template_settings` override the stock red/white.

use maud::{Markup, html};

use super::{MenuPage, MenuSection, base_document, empty_menu, format_price, item_image_url,
            image_fallback, page_title};

const STOCK_PRIMARY: &str = "#d0021b";
const STOCK_ACCENT: &str = "#fff";

pub(super) fn render(page: &MenuPage, sections: &[MenuSection]) -> Markup {
    let primary = page
        .branch
        .template_setting("primaryColor")
        .unwrap_or(STOCK_PRIMARY);
    let accent = page
        .branch
        .template_setting("accentColor")
        .unwrap_or(STOCK_ACCENT);
    let backdrop = format!(
        "background:radial-gradient(circle at 20% 10%, #ffe5e5 0%, {primary} 100%);min-height:100vh"
    );

    let content = html! {
        div style=(backdrop) {
            main.menu-page {
                header.menu-header {
                    @if let Some(logo) = &page.restaurant.logo {
                        img.restaurant-logo
                            src=(item_image_url(logo, page.site))
                            alt="Logo"
                            style="border-radius:9999px;background:#fff"
                            onerror=(image_fallback(page.site));
                    }
                    h1 style={ "color:" (accent) } { (page.restaurant.name) }
                    p.branch-name style={ "color:" (accent) ";opacity:0.85" } { (page.branch.name) }
                }
                @if sections.is_empty() {
                    div.menu-section { (empty_menu()) }
                } @else {
                    @for section in sections {
                        div.menu-section {
                            h2 style={ "color:" (primary) ";text-align:center" } { (section.title) }
                            div.item-grid {
                                @for item in section.items {
                                    div style="background:#fff;border-radius:0.75rem;padding:0.75rem;text-align:center;border:1px solid #fecaca" {
                                        @if let Some(image) = &item.image {
                                            img.item-media
                                                style="width:5rem;height:5rem;margin:0 auto 0.5rem"
                                                src=(item_image_url(image, page.site))
                                                alt=(item.name)
                                                onerror=(image_fallback(page.site));
                                        }
                                        div.item-name style={ "color:" (primary) } { (item.name) }
                                        @if let Some(desc) = &item.description {
                                            p.item-description dir="auto" { (desc) }
                                        }
                                        div.item-price style={ "color:" (STOCK_PRIMARY) } {
                                            (format_price(item.price, &page.site.currency))
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                footer.menu-footer style={ "color:" (accent) } {
                    span { "Powered by Menu Press" }
                }
            }
        }
    };
    base_document(&page_title(page), Some("tpl-hello-chicken"), content)
}

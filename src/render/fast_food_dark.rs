//! Fast-food dark template: near-black background, skewed orange banner,
//! per-category icon chips.

use maud::{Markup, html};

use super::{MenuPage, base_document, empty_menu, format_price, item_media, page_title};

/// Icon glyph per category, matching the dark theme's chip row.
fn category_icon(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "pizza" => "🍕",
        "beverages" => "☕",
        "desserts" => "🍪",
        _ => "🍴",
    }
}

pub(super) fn render(page: &MenuPage) -> Markup {
    let content = html! {
        main.menu-page {
            header.menu-header {
                div style="display:inline-block;background:#f97316;transform:skewX(-3deg);border-radius:0.375rem;padding:0.5rem 2rem" {
                    h1 style="margin:0;font-size:1.25rem;letter-spacing:0.1em;text-transform:uppercase" {
                        (page.restaurant.name)
                    }
                }
                p.branch-name style="color:#fb923c;margin-top:0.75rem" { (page.branch.name) }
                div.branch-meta {
                    span { (page.branch.state) " - " (page.branch.location) }
                    span {
                        "Delivery: "
                        (format_price(page.branch.delivery_price, &page.site.currency))
                    }
                }
            }
            @if page.menu.is_empty() {
                (empty_menu())
            } @else {
                @for category in &page.menu.ordered {
                    section.category {
                        h2.category-title style="color:#fb923c" {
                            span { (category_icon(category)) " " }
                            (category)
                        }
                        div.item-grid {
                            @for item in page.menu.items(category) {
                                div.menu-item {
                                    div style="display:flex;align-items:center;gap:1rem" {
                                        (item_media(item, page.site))
                                        span.item-name { (item.name) }
                                    }
                                    span.item-price {
                                        (format_price(item.price, &page.site.currency))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    base_document(&page_title(page), Some("tpl-fast-food-dark"), content)
}

//! Playful cream template: warm amber palette, a "fresh & tasty" ribbon,
//! numbered category cards with descriptions.

use maud::{Markup, html};

use super::{MenuPage, base_document, empty_menu, format_price, item_media, page_title};

pub(super) fn render(page: &MenuPage) -> Markup {
    let content = html! {
        main.menu-page {
            header.menu-header {
                h1 style="color:#ea580c" { (page.restaurant.name) }
                p.branch-name style="color:#ea580c;letter-spacing:0.1em" { (page.branch.name) }
                span style="display:inline-block;background:#dc2626;color:#fff;border-radius:9999px;padding:0.25rem 1rem;text-transform:uppercase;letter-spacing:0.1em;font-size:0.8rem" {
                    "Fresh & Tasty"
                }
            }
            @if page.menu.is_empty() {
                (empty_menu())
            } @else {
                @for (index, category) in page.menu.ordered.iter().enumerate() {
                    section.category {
                        p style="color:#f97316;letter-spacing:0.1em;font-size:0.85rem;margin:0" {
                            "Nº " ((index + 1))
                        }
                        h2.category-title style="color:#9a3412" { (category) }
                        div.item-grid {
                            @for item in page.menu.items(category) {
                                div.menu-item {
                                    div style="display:flex;align-items:center;gap:1rem" {
                                        (item_media(item, page.site))
                                        div {
                                            span.item-name { (item.name) }
                                            @if let Some(desc) = &item.description {
                                                p.item-description { (desc) }
                                            }
                                        }
                                    }
                                    span.item-price style="color:#dc2626" {
                                        (format_price(item.price, &page.site.currency))
                                    }
                                }
                            }
                        }
                    }
                }
                footer.menu-footer {
                    span { (page.branch.state) " - " (page.branch.location) }
                    span {
                        " · Delivery: "
                        (format_price(page.branch.delivery_price, &page.site.currency))
                    }
                }
            }
        }
    };
    base_document(&page_title(page), Some("tpl-playful-cream"), content)
}

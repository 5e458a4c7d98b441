//! Rustic wood template: dark timber background, red banner, gold headings.

use maud::{Markup, html};

use super::{MenuPage, base_document, empty_menu, format_price, item_media, page_title};

pub(super) fn render(page: &MenuPage) -> Markup {
    let content = html! {
        main.menu-page {
            header.menu-header style="background:linear-gradient(to right,#991b1b,#b91c1c)" {
                h1 style="color:#facc15;letter-spacing:0.05em" { (page.restaurant.name) }
                p.branch-name style="color:#fef3c7" { (page.branch.name) }
                div.branch-meta style="color:#fde68a" {
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
                        h2.category-title style="color:#facc15;text-align:center;border-bottom:2px solid #92400e;padding-bottom:0.5rem" {
                            "— " (category) " —"
                        }
                        div.item-grid {
                            @for item in page.menu.items(category) {
                                div.menu-item {
                                    div style="display:flex;align-items:center;gap:1rem" {
                                        (item_media(item, page.site))
                                        div {
                                            span.item-name style="color:#fef3c7" { (item.name) }
                                            @if let Some(desc) = &item.description {
                                                p.item-description { (desc) }
                                            }
                                        }
                                    }
                                    span.item-price style="color:#facc15" {
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
    base_document(&page_title(page), Some("tpl-rustic-wood"), content)
}

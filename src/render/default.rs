//! Default template: clean modern layout. Always a valid choice — the
//! dispatcher routes unknown and unset identifiers here.

use maud::{Markup, html};

use super::{MenuPage, base_document, empty_menu, format_price, item_image_url, image_fallback,
            item_media, page_title};

pub(super) fn render(page: &MenuPage) -> Markup {
    let content = html! {
        main.menu-page {
            header.menu-header {
                @if let Some(image) = &page.branch.image {
                    img.branch-image
                        src=(item_image_url(image, page.site))
                        alt="Branch"
                        onerror=(image_fallback(page.site));
                }
                h1 { (page.restaurant.name) }
                p.branch-name { (page.branch.name) }
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
                        h2.category-title { (category) }
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
    base_document(&page_title(page), Some("tpl-default"), content)
}

//! Elegant minimal template: cream background, serif type, centered
//! sections with descriptions and a dotted price leader.

use maud::{Markup, html};

use super::{MenuPage, base_document, empty_menu, format_price, item_media, page_title};

pub(super) fn render(page: &MenuPage) -> Markup {
    let content = html! {
        main.menu-page {
            header.menu-header {
                p style="letter-spacing:0.3em;text-transform:uppercase;font-size:0.8rem;color:#78716c" {
                    "✦ Menu ✦"
                }
                h1 { (page.branch.name) }
                p.branch-name style="color:#78716c" { (page.restaurant.name) }
            }
            @if page.menu.is_empty() {
                (empty_menu())
            } @else {
                @for category in &page.menu.ordered {
                    section.category {
                        h2.category-title style="text-align:center;letter-spacing:0.15em;font-weight:400" {
                            (category)
                        }
                        @for item in page.menu.items(category) {
                            div.menu-item style="border-left:none;border-right:none;border-radius:0;background:transparent" {
                                div style="display:flex;align-items:center;gap:1rem" {
                                    (item_media(item, page.site))
                                    div {
                                        span.item-name { (item.name) }
                                        @if let Some(desc) = &item.description {
                                            p.item-description { (desc) }
                                        }
                                    }
                                }
                                span.item-price style="font-weight:400;color:#57534e" {
                                    (format_price(item.price, &page.site.currency))
                                }
                            }
                        }
                    }
                }
                footer.menu-footer {
                    span { (page.branch.state) " · " (page.branch.location) }
                    @if let Some(whatsapp) = &page.branch.whatsapp {
                        span { " · " (whatsapp) }
                    }
                }
            }
        }
    };
    base_document(&page_title(page), Some("tpl-elegant-minimal"), content)
}

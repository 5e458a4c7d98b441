//! CLI output formatting.
//!
//! Information-first: every entity leads with its positional index and
//! display name; storage details (ids, URLs) appear as indented context
//! lines. Each command has a pure `format_*` function returning lines (for
//! tests) and a `print_*` wrapper that writes stdout.

use std::path::Path;

use crate::config::SiteConfig;
use crate::publish::public_menu_url;
use crate::render::TemplateId;
use crate::types::{Branch, Restaurant};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{pos:0>3}")
}

/// Whether the admin listing badges a branch as published: an explicitly
/// chosen, non-default template. Cosmetic only — every resolvable branch
/// is publicly viewable regardless.
pub fn is_published(branch: &Branch) -> bool {
    matches!(branch.active_template.as_deref(), Some(t) if !t.is_empty() && t != "default")
}

// =========================================================================
// `list` output
// =========================================================================

/// Restaurants with their branches, published badges, and public URLs.
pub fn format_list_output(
    listing: &[(Restaurant, Vec<Branch>)],
    site: &SiteConfig,
) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Restaurants".to_string());
    for (i, (restaurant, branches)) in listing.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} branches)",
            format_index(i + 1),
            restaurant.name,
            branches.len()
        ));
        lines.push(format!("        Id: {}", restaurant.id));
        for (j, branch) in branches.iter().enumerate() {
            let badge = if is_published(branch) { " [published]" } else { "" };
            lines.push(format!(
                "    {} {} - {}{}",
                format_index(j + 1),
                branch.name,
                branch.state,
                badge
            ));
            lines.push(format!("            Id: {}", branch.id));
            if is_published(branch) {
                let template =
                    TemplateId::parse(branch.active_template.as_deref().unwrap_or_default());
                lines.push(format!(
                    "            URL: {}",
                    public_menu_url(&site.origin, &restaurant.name, &branch.name, template)
                ));
            }
        }
    }
    lines
}

pub fn print_list_output(listing: &[(Restaurant, Vec<Branch>)], site: &SiteConfig) {
    for line in format_list_output(listing, site) {
        println!("{line}");
    }
}

// =========================================================================
// `templates` output
// =========================================================================

/// The template catalog, one identifier per line with its blurb.
pub fn format_template_list() -> Vec<String> {
    let mut lines = vec!["Templates".to_string()];
    for template in TemplateId::ALL {
        lines.push(format!(
            "    {:<16} {} ({})",
            template.as_str(),
            template.display_name(),
            template.description()
        ));
    }
    lines
}

pub fn print_template_list() {
    for line in format_template_list() {
        println!("{line}");
    }
}

// =========================================================================
// `render` output
// =========================================================================

/// Summary line after a page is written.
pub fn format_render_output(
    restaurant_name: &str,
    branch_name: &str,
    template: TemplateId,
    out_path: &Path,
) -> Vec<String> {
    vec![format!(
        "{} / {} ({}) \u{2192} {}",
        restaurant_name,
        branch_name,
        template.as_str(),
        out_path.display()
    )]
}

pub fn print_render_output(
    restaurant_name: &str,
    branch_name: &str,
    template: TemplateId,
    out_path: &Path,
) {
    for line in format_render_output(restaurant_name, branch_name, template, out_path) {
        println!("{line}");
    }
}

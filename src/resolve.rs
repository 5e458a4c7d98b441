//! Slug-based menu resolution.
//!
//! Public menu URLs carry slugs, not identifiers, so resolution works
//! backwards from the URL: fetch candidate rows, slugify each stored name,
//! and take the first row whose slug equals the incoming segment. The legacy
//! URL form (`/{restaurant}/{branch}/menu`) instead matches stored names
//! case-insensitively without slugification; it must keep resolving for
//! links published before slugs existed.
//!
//! The queries are strictly sequential — restaurants, then the matched
//! restaurant's branches, then the matched branch's items — because each
//! filter needs the previous step's id. A restaurant miss short-circuits:
//! no branch or item query is issued.
//!
//! Tie-breaks: two names that collide after slugification are resolved only
//! by store order (newest first), with no uniqueness constraint anywhere.
//! Open question, documented rather than special-cased.

use serde_json::Value;

use crate::render::TemplateId;
use crate::slug::slugify;
use crate::store::{MenuStore, StoreError};
use crate::types::{Branch, MenuItem, Restaurant};

/// How a public menu request addresses its branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAddress {
    /// Modern form: `/{restaurant-slug}/{branch-slug}/{template-id}`.
    /// The template segment mirrors the published URL shape but rendering
    /// follows the branch's stored template, so it is optional here.
    Slugs {
        restaurant: String,
        branch: String,
        template: Option<String>,
    },
    /// Legacy form: `/{restaurant-name}/{branch-name}/menu`, matched
    /// case-insensitively against stored names.
    Names { restaurant: String, branch: String },
}

/// Why resolution found no menu. User-facing; rendered, never thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    Restaurant,
    Branch,
}

impl NotFoundReason {
    pub fn message(&self) -> &'static str {
        match self {
            NotFoundReason::Restaurant => "Restaurant not found for this URL.",
            NotFoundReason::Branch => "Branch not found for this URL or not linked to restaurant.",
        }
    }
}

/// A fully resolved public menu, ready for grouping and rendering.
#[derive(Debug, Clone)]
pub struct ResolvedMenu {
    pub restaurant: Restaurant,
    pub branch: Branch,
    pub items: Vec<MenuItem>,
    /// The branch's stored template, already defaulted: absent, empty, and
    /// unknown identifiers all land on [`TemplateId::Default`].
    pub template: TemplateId,
}

/// Outcome of a resolution pass. Not-found is a value, not an error —
/// callers branch on it to render the "menu not found" view. Transport and
/// storage faults surface separately as [`StoreError`].
#[derive(Debug, Clone)]
pub enum Resolution {
    Found(Box<ResolvedMenu>),
    NotFound(NotFoundReason),
}

/// Resolve a menu address to its restaurant, branch, and items.
pub fn resolve(store: &dyn MenuStore, address: &MenuAddress) -> Result<Resolution, StoreError> {
    let (restaurant_row, branch_row) = match address {
        MenuAddress::Slugs {
            restaurant, branch, ..
        } => match resolve_by_slugs(store, restaurant, branch)? {
            Ok(rows) => rows,
            Err(reason) => return Ok(Resolution::NotFound(reason)),
        },
        MenuAddress::Names { restaurant, branch } => {
            match resolve_by_names(store, restaurant, branch)? {
                Ok(rows) => rows,
                Err(reason) => return Ok(Resolution::NotFound(reason)),
            }
        }
    };

    let restaurant = Restaurant::from_row(&restaurant_row);
    let branch = Branch::from_row(&branch_row);
    let items = store
        .items_of(&branch.id)?
        .iter()
        .map(MenuItem::from_row)
        .collect();
    let template = TemplateId::parse(branch.active_template.as_deref().unwrap_or_default());

    Ok(Resolution::Found(Box::new(ResolvedMenu {
        restaurant,
        branch,
        items,
        template,
    })))
}

type RowOutcome = Result<(Value, Value), NotFoundReason>;

fn resolve_by_slugs(
    store: &dyn MenuStore,
    restaurant_slug: &str,
    branch_slug: &str,
) -> Result<RowOutcome, StoreError> {
    // Incoming segments are lowercased up front; slugify() lowercases the
    // stored side, so comparison is case-insensitive by construction.
    let restaurant_slug = restaurant_slug.to_lowercase();
    let branch_slug = branch_slug.to_lowercase();

    let restaurants = store.restaurants()?;
    let Some(restaurant_row) = first_slug_match(&restaurants, &restaurant_slug) else {
        return Ok(Err(NotFoundReason::Restaurant));
    };

    let restaurant_id = row_id(restaurant_row);
    let branches = store.branches_of(&restaurant_id)?;
    let Some(branch_row) = first_slug_match(&branches, &branch_slug) else {
        return Ok(Err(NotFoundReason::Branch));
    };

    Ok(Ok((restaurant_row.clone(), branch_row.clone())))
}

fn resolve_by_names(
    store: &dyn MenuStore,
    restaurant_name: &str,
    branch_name: &str,
) -> Result<RowOutcome, StoreError> {
    let restaurants = store.restaurants_named_ci(restaurant_name)?;
    let Some(restaurant_row) = restaurants.first() else {
        return Ok(Err(NotFoundReason::Restaurant));
    };

    let restaurant_id = row_id(restaurant_row);
    let branches = store.branches_named_ci(&restaurant_id, branch_name)?;
    let Some(branch_row) = branches.first() else {
        return Ok(Err(NotFoundReason::Branch));
    };

    Ok(Ok((restaurant_row.clone(), branch_row.clone())))
}

/// First row whose slugified name equals `slug`. A name that slugifies to
/// the empty string never matches, even against an empty URL segment.
fn first_slug_match<'a>(rows: &'a [Value], slug: &str) -> Option<&'a Value> {
    rows.iter().find(|row| {
        let name = crate::normalize::normalize_value(row.get("name").unwrap_or(&Value::Null));
        let row_slug = slugify(&name);
        !row_slug.is_empty() && row_slug == slug
    })
}

fn row_id(row: &Value) -> String {
    crate::normalize::normalize_value(row.get("id").unwrap_or(&Value::Null))
}

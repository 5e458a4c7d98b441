//! Applying a template to a branch and building its public URL.
//!
//! Applying is the core's only write: persist the chosen template identifier
//! onto the branch record. Last write wins; repeating the same apply is a
//! no-op on the stored row. On success the branch's public URL becomes
//! shareable; on failure the caller must leave its local selection untouched
//! — [`PreviewSession`] exists so that rule (and the stale-resolution rule
//! for re-navigation) has one obvious home.

use crate::render::TemplateId;
use crate::resolve::Resolution;
use crate::slug::slugify;
use crate::store::{MenuStore, StoreError};
use crate::types::{Branch, Restaurant};

/// Persist `template` as the branch's active template.
pub fn apply_template(
    store: &mut dyn MenuStore,
    branch_id: &str,
    template: TemplateId,
) -> Result<(), StoreError> {
    store.set_branch_template(branch_id, template.as_str())
}

/// The shareable public URL for a branch menu:
/// `{origin}/{restaurant-slug}/{branch-slug}/{template-id}`.
///
/// Names that slugify to nothing fall back to fixed placeholder segments so
/// the URL stays well-formed (such a link will not resolve, matching the
/// resolver's refusal to match empty slugs).
pub fn public_menu_url(
    origin: &str,
    restaurant_name: &str,
    branch_name: &str,
    template: TemplateId,
) -> String {
    let restaurant_slug = non_empty_slug(restaurant_name, "restaurant");
    let branch_slug = non_empty_slug(branch_name, "branch");
    format!(
        "{}/{restaurant_slug}/{branch_slug}/{}",
        origin.trim_end_matches('/'),
        template.as_str()
    )
}

fn non_empty_slug(name: &str, fallback: &str) -> String {
    let slug = slugify(name);
    if slug.is_empty() { fallback.to_string() } else { slug }
}

/// Scan the store for a branch by id, returning it with its restaurant.
/// Used by operator tooling that has only the branch id in hand.
pub fn locate_branch(
    store: &dyn MenuStore,
    branch_id: &str,
) -> Result<Option<(Restaurant, Branch)>, StoreError> {
    for restaurant_row in store.restaurants()? {
        let restaurant = Restaurant::from_row(&restaurant_row);
        for branch_row in store.branches_of(&restaurant.id)? {
            let branch = Branch::from_row(&branch_row);
            if branch.id == branch_id {
                return Ok(Some((restaurant, branch)));
            }
        }
    }
    Ok(None)
}

/// Monotonic ticket identifying one preview navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Serializes preview navigations so a slow resolution can never clobber a
/// newer selection.
///
/// Each navigation calls [`begin`](PreviewSession::begin) before resolving
/// and [`commit`](PreviewSession::commit) with its ticket afterwards. Only
/// the most recently issued ticket may commit; results arriving under a
/// superseded ticket are dropped.
#[derive(Debug, Default)]
pub struct PreviewSession {
    last_issued: u64,
    current: Option<Resolution>,
}

impl PreviewSession {
    pub fn new() -> PreviewSession {
        PreviewSession::default()
    }

    /// Start a navigation; invalidates every earlier ticket.
    pub fn begin(&mut self) -> Ticket {
        self.last_issued += 1;
        Ticket(self.last_issued)
    }

    /// Install a resolution result. Returns `false` (and changes nothing)
    /// when the ticket has been superseded by a newer `begin`.
    pub fn commit(&mut self, ticket: Ticket, resolution: Resolution) -> bool {
        if ticket.0 != self.last_issued {
            return false;
        }
        self.current = Some(resolution);
        true
    }

    /// The most recently committed resolution, if any.
    pub fn current(&self) -> Option<&Resolution> {
        self.current.as_ref()
    }
}

//! Category grouping and canonical section ordering.
//!
//! Menu sections always appear in the fixed canonical order below, never in
//! storage order. Grouping is stable: items keep their relative order inside
//! each category bucket.
//!
//! Known quirk, preserved on purpose: a category outside the canonical list
//! is grouped but never enters [`GroupedMenu::ordered`], so renderers that
//! iterate the ordered list never show its items. Whether such items should
//! be appended, rejected at write time, or stay hidden is an open product
//! question; [`GroupedMenu::orphaned_categories`] at least makes the hidden
//! keys observable.

use std::collections::BTreeMap;

use crate::types::MenuItem;

/// The fixed section order for every rendered menu.
pub const CANONICAL_CATEGORIES: [&str; 12] = [
    "Appetizers",
    "Main Course",
    "Grills",
    "Seafood",
    "Sandwiches",
    "Pizza",
    "Pasta",
    "Salads",
    "Soups",
    "Desserts",
    "Beverages",
    "Breakfast",
];

/// A branch's menu partitioned by category.
#[derive(Debug, Clone, Default)]
pub struct GroupedMenu {
    /// Category key → items in original relative order.
    pub by_category: BTreeMap<String, Vec<MenuItem>>,
    /// Canonical category sequence filtered to categories present in the
    /// data. Renderers iterate this, not the map.
    pub ordered: Vec<String>,
}

impl GroupedMenu {
    /// True when no category will be rendered. A menu whose only categories
    /// are off-list counts as empty, matching what viewers see.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Items for one ordered category.
    pub fn items(&self, category: &str) -> &[MenuItem] {
        self.by_category.get(category).map_or(&[], Vec::as_slice)
    }

    /// Categories present in the data but missing from the canonical list.
    /// Their items are unreachable through [`GroupedMenu::ordered`].
    pub fn orphaned_categories(&self) -> Vec<&str> {
        self.by_category
            .keys()
            .map(String::as_str)
            .filter(|cat| !CANONICAL_CATEGORIES.contains(cat))
            .collect()
    }
}

/// Partition items by category and compute the ordered section list.
pub fn group_items(items: Vec<MenuItem>) -> GroupedMenu {
    let mut by_category: BTreeMap<String, Vec<MenuItem>> = BTreeMap::new();
    for item in items {
        by_category.entry(item.category.clone()).or_default().push(item);
    }
    let ordered = CANONICAL_CATEGORIES
        .iter()
        .filter(|cat| by_category.contains_key(**cat))
        .map(|cat| cat.to_string())
        .collect();
    GroupedMenu {
        by_category,
        ordered,
    }
}

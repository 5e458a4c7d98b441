//! Row-store abstraction and the file-backed JSON implementation.
//!
//! The core only needs four reads and one write from its persistence
//! collaborator, so the [`MenuStore`] trait captures exactly those: list all
//! restaurants, list a restaurant's branches, list a branch's items (all
//! newest-first), a case-insensitive name lookup for the legacy URL form,
//! and the single `set_branch_template` write. Resolution logic takes
//! `&dyn MenuStore`, so tests run against in-memory fakes.
//!
//! [`JsonStore`] is the shipping implementation: one JSON document with
//! `restaurants`, `branches`, and `menu_items` arrays of loose rows. Rows
//! stay untyped (`serde_json::Value`) here — the typed boundary is
//! [`crate::types`], not the store.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::normalize::normalize_value;

/// Failures from the persistence collaborator.
///
/// Deliberately distinct from "menu not found": a missing restaurant is a
/// normal [`Resolution::NotFound`](crate::resolve::Resolution) value, while
/// these are real faults the caller may retry or surface as errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store document is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Transient backend failure (network, timeout). Retryable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// Write rejected: the target branch row does not exist.
    #[error("no branch with id {0:?}")]
    UnknownBranch(String),
}

impl StoreError {
    /// Whether retrying the same operation could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Io(_) | StoreError::Unavailable(_))
    }
}

/// Read/write surface of the row store.
///
/// All listing methods return rows ordered by `created_at` descending
/// (newest first); resolution tie-breaks depend on that order.
pub trait MenuStore {
    /// Every restaurant row.
    fn restaurants(&self) -> Result<Vec<Value>, StoreError>;

    /// Branch rows owned by the given restaurant.
    fn branches_of(&self, restaurant_id: &str) -> Result<Vec<Value>, StoreError>;

    /// Menu item rows owned by the given branch.
    fn items_of(&self, branch_id: &str) -> Result<Vec<Value>, StoreError>;

    /// Restaurant rows whose name equals `name` case-insensitively.
    fn restaurants_named_ci(&self, name: &str) -> Result<Vec<Value>, StoreError>;

    /// Branch rows of `restaurant_id` whose name equals `name`
    /// case-insensitively.
    fn branches_named_ci(&self, restaurant_id: &str, name: &str)
    -> Result<Vec<Value>, StoreError>;

    /// Persist `template` as the branch's active template. Last write wins;
    /// no optimistic-concurrency check. Idempotent.
    fn set_branch_template(&mut self, branch_id: &str, template: &str) -> Result<(), StoreError>;
}

/// On-disk document shape for [`JsonStore`].
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreDoc {
    #[serde(default)]
    restaurants: Vec<Value>,
    #[serde(default)]
    branches: Vec<Value>,
    #[serde(default)]
    menu_items: Vec<Value>,
}

/// File-backed row store over a single JSON document.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    doc: StoreDoc,
}

impl JsonStore {
    /// Load the document at `path`, sorting every collection newest-first.
    pub fn open(path: &Path) -> Result<JsonStore, StoreError> {
        let content = fs::read_to_string(path)?;
        let mut doc: StoreDoc = serde_json::from_str(&content)?;
        sort_newest_first(&mut doc.restaurants);
        sort_newest_first(&mut doc.branches);
        sort_newest_first(&mut doc.menu_items);
        Ok(JsonStore {
            path: path.to_path_buf(),
            doc,
        })
    }

    fn write_back(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Sort rows by `created_at` descending. Timestamps are RFC 3339 text, so
/// lexicographic comparison matches chronological order.
fn sort_newest_first(rows: &mut [Value]) {
    rows.sort_by(|a, b| row_text(b, "created_at").cmp(&row_text(a, "created_at")));
}

fn row_text(row: &Value, key: &str) -> String {
    normalize_value(row.get(key).unwrap_or(&Value::Null))
}

/// Case-insensitive name equality. The legacy URL form matches stored names
/// exactly apart from case, so this is a full comparison, not a substring one.
pub(crate) fn name_matches_ci(row: &Value, name: &str) -> bool {
    row_text(row, "name").to_lowercase() == name.to_lowercase()
}

fn id_matches(row: &Value, key: &str, id: &str) -> bool {
    row_text(row, key) == id
}

impl MenuStore for JsonStore {
    fn restaurants(&self) -> Result<Vec<Value>, StoreError> {
        Ok(self.doc.restaurants.clone())
    }

    fn branches_of(&self, restaurant_id: &str) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .doc
            .branches
            .iter()
            .filter(|b| id_matches(b, "restaurant_id", restaurant_id))
            .cloned()
            .collect())
    }

    fn items_of(&self, branch_id: &str) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .doc
            .menu_items
            .iter()
            .filter(|i| id_matches(i, "branch_id", branch_id))
            .cloned()
            .collect())
    }

    fn restaurants_named_ci(&self, name: &str) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .doc
            .restaurants
            .iter()
            .filter(|r| name_matches_ci(r, name))
            .cloned()
            .collect())
    }

    fn branches_named_ci(
        &self,
        restaurant_id: &str,
        name: &str,
    ) -> Result<Vec<Value>, StoreError> {
        Ok(self
            .doc
            .branches
            .iter()
            .filter(|b| id_matches(b, "restaurant_id", restaurant_id) && name_matches_ci(b, name))
            .cloned()
            .collect())
    }

    fn set_branch_template(&mut self, branch_id: &str, template: &str) -> Result<(), StoreError> {
        let row = self
            .doc
            .branches
            .iter_mut()
            .find(|b| id_matches(b, "id", branch_id))
            .ok_or_else(|| StoreError::UnknownBranch(branch_id.to_string()))?;
        match row.as_object_mut() {
            Some(obj) => {
                obj.insert(
                    "active_template".to_string(),
                    Value::String(template.to_string()),
                );
            }
            None => return Err(StoreError::UnknownBranch(branch_id.to_string())),
        }
        self.write_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn store_with(doc: Value) -> (TempDir, JsonStore) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("menu-data.json");
        fs::write(&path, doc.to_string()).unwrap();
        let store = JsonStore::open(&path).unwrap();
        (tmp, store)
    }

    #[test]
    fn restaurants_newest_first() {
        let (_tmp, store) = store_with(json!({
            "restaurants": [
                {"id": "old", "name": "Old", "created_at": "2025-01-01T00:00:00Z"},
                {"id": "new", "name": "New", "created_at": "2026-06-01T00:00:00Z"},
            ],
        }));
        let rows = store.restaurants().unwrap();
        assert_eq!(rows[0]["id"], "new");
        assert_eq!(rows[1]["id"], "old");
    }

    #[test]
    fn branches_filter_by_owner() {
        let (_tmp, store) = store_with(json!({
            "branches": [
                {"id": "b1", "restaurant_id": "r1", "name": "A", "created_at": "1"},
                {"id": "b2", "restaurant_id": "r2", "name": "B", "created_at": "2"},
            ],
        }));
        let rows = store.branches_of("r1").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "b1");
    }

    #[test]
    fn equality_filter_handles_numeric_ids() {
        let (_tmp, store) = store_with(json!({
            "branches": [
                {"id": "b1", "restaurant_id": 7, "name": "A", "created_at": "1"},
            ],
        }));
        assert_eq!(store.branches_of("7").unwrap().len(), 1);
    }

    #[test]
    fn name_lookup_is_case_insensitive_and_exact() {
        let (_tmp, store) = store_with(json!({
            "restaurants": [
                {"id": "r1", "name": "Burger House", "created_at": "1"},
                {"id": "r2", "name": "Burger", "created_at": "2"},
            ],
        }));
        let rows = store.restaurants_named_ci("BURGER HOUSE").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], "r1");
        // No substring matching: "Burger" must not match "Burger House".
        assert_eq!(store.restaurants_named_ci("burger").unwrap().len(), 1);
    }

    #[test]
    fn set_branch_template_persists() {
        let (tmp, mut store) = store_with(json!({
            "branches": [
                {"id": "b1", "restaurant_id": "r1", "name": "A", "created_at": "1"},
            ],
        }));
        store.set_branch_template("b1", "rustic-wood").unwrap();

        let reopened = JsonStore::open(&tmp.path().join("menu-data.json")).unwrap();
        let rows = reopened.branches_of("r1").unwrap();
        assert_eq!(rows[0]["active_template"], "rustic-wood");
    }

    #[test]
    fn set_branch_template_is_idempotent() {
        let (tmp, mut store) = store_with(json!({
            "branches": [
                {"id": "b1", "restaurant_id": "r1", "name": "A", "created_at": "1"},
            ],
        }));
        store.set_branch_template("b1", "playful-cream").unwrap();
        store.set_branch_template("b1", "playful-cream").unwrap();

        let reopened = JsonStore::open(&tmp.path().join("menu-data.json")).unwrap();
        assert_eq!(
            reopened.branches_of("r1").unwrap()[0]["active_template"],
            "playful-cream"
        );
    }

    #[test]
    fn set_branch_template_unknown_branch_is_rejected() {
        let (_tmp, mut store) = store_with(json!({}));
        let err = store.set_branch_template("ghost", "default").unwrap_err();
        assert!(matches!(err, StoreError::UnknownBranch(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let (_tmp, store) = store_with(json!({}));
        assert!(store.restaurants().unwrap().is_empty());
        assert!(store.items_of("b1").unwrap().is_empty());
    }

    #[test]
    fn malformed_document_is_a_store_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("menu-data.json");
        fs::write(&path, "not json").unwrap();
        let err = JsonStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)));
    }

    #[test]
    fn missing_file_is_transient_io() {
        let tmp = TempDir::new().unwrap();
        let err = JsonStore::open(&tmp.path().join("absent.json")).unwrap_err();
        assert!(err.is_transient());
    }
}

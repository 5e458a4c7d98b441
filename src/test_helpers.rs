//! Shared test utilities: in-memory stores and rendering fixtures.
//!
//! `MemStore` is the fake persistence collaborator used by resolver and
//! publish tests; `CountingStore` wraps it to assert on query traffic, and
//! `FailingStore` simulates a backend outage. `page_fixture` builds a ready
//! `MenuPage` input set for the template renderers.

use std::cell::Cell;

use serde_json::{Value, json};

use crate::config::SiteConfig;
use crate::group::{GroupedMenu, group_items};
use crate::render::MenuPage;
use crate::store::{MenuStore, StoreError};
use crate::types::{Branch, MenuItem, Restaurant};

// =========================================================================
// In-memory stores
// =========================================================================

/// In-memory row store. Rows keep the order they were built in, so fixtures
/// list newest rows first, matching the real store's contract.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    pub restaurants: Vec<Value>,
    pub branches: Vec<Value>,
    pub menu_items: Vec<Value>,
}

impl MenuStore for MemStore {
    fn restaurants(&self) -> Result<Vec<Value>, StoreError> {
        Ok(self.restaurants.clone())
    }

    fn branches_of(&self, restaurant_id: &str) -> Result<Vec<Value>, StoreError> {
        Ok(filter_eq(&self.branches, "restaurant_id", restaurant_id))
    }

    fn items_of(&self, branch_id: &str) -> Result<Vec<Value>, StoreError> {
        Ok(filter_eq(&self.menu_items, "branch_id", branch_id))
    }

    fn restaurants_named_ci(&self, name: &str) -> Result<Vec<Value>, StoreError> {
        Ok(filter_name_ci(&self.restaurants, name))
    }

    fn branches_named_ci(
        &self,
        restaurant_id: &str,
        name: &str,
    ) -> Result<Vec<Value>, StoreError> {
        let owned = filter_eq(&self.branches, "restaurant_id", restaurant_id);
        Ok(filter_name_ci(&owned, name))
    }

    fn set_branch_template(&mut self, branch_id: &str, template: &str) -> Result<(), StoreError> {
        let row = self
            .branches
            .iter_mut()
            .find(|b| field_text(b, "id") == branch_id)
            .ok_or_else(|| StoreError::UnknownBranch(branch_id.to_string()))?;
        row.as_object_mut()
            .expect("fixture branch rows are objects")
            .insert(
                "active_template".to_string(),
                Value::String(template.to_string()),
            );
        Ok(())
    }
}

fn field_text(row: &Value, key: &str) -> String {
    crate::normalize::normalize_value(row.get(key).unwrap_or(&Value::Null))
}

fn filter_eq(rows: &[Value], key: &str, want: &str) -> Vec<Value> {
    rows.iter()
        .filter(|r| field_text(r, key) == want)
        .cloned()
        .collect()
}

fn filter_name_ci(rows: &[Value], name: &str) -> Vec<Value> {
    rows.iter()
        .filter(|r| field_text(r, "name").to_lowercase() == name.to_lowercase())
        .cloned()
        .collect()
}

/// Wraps a [`MemStore`] and counts branch/item queries, for asserting that
/// a restaurant miss short-circuits the query sequence.
pub struct CountingStore {
    inner: MemStore,
    branch_queries: Cell<u32>,
    item_queries: Cell<u32>,
}

impl CountingStore {
    pub fn new(inner: MemStore) -> CountingStore {
        CountingStore {
            inner,
            branch_queries: Cell::new(0),
            item_queries: Cell::new(0),
        }
    }

    pub fn branch_queries(&self) -> u32 {
        self.branch_queries.get()
    }

    pub fn item_queries(&self) -> u32 {
        self.item_queries.get()
    }
}

impl MenuStore for CountingStore {
    fn restaurants(&self) -> Result<Vec<Value>, StoreError> {
        self.inner.restaurants()
    }

    fn branches_of(&self, restaurant_id: &str) -> Result<Vec<Value>, StoreError> {
        self.branch_queries.set(self.branch_queries.get() + 1);
        self.inner.branches_of(restaurant_id)
    }

    fn items_of(&self, branch_id: &str) -> Result<Vec<Value>, StoreError> {
        self.item_queries.set(self.item_queries.get() + 1);
        self.inner.items_of(branch_id)
    }

    fn restaurants_named_ci(&self, name: &str) -> Result<Vec<Value>, StoreError> {
        self.inner.restaurants_named_ci(name)
    }

    fn branches_named_ci(
        &self,
        restaurant_id: &str,
        name: &str,
    ) -> Result<Vec<Value>, StoreError> {
        self.branch_queries.set(self.branch_queries.get() + 1);
        self.inner.branches_named_ci(restaurant_id, name)
    }

    fn set_branch_template(&mut self, branch_id: &str, template: &str) -> Result<(), StoreError> {
        self.inner.set_branch_template(branch_id, template)
    }
}

/// Every query fails with a transient error, as in a backend outage.
pub struct FailingStore;

impl MenuStore for FailingStore {
    fn restaurants(&self) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Unavailable("simulated outage".to_string()))
    }

    fn branches_of(&self, _restaurant_id: &str) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Unavailable("simulated outage".to_string()))
    }

    fn items_of(&self, _branch_id: &str) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Unavailable("simulated outage".to_string()))
    }

    fn restaurants_named_ci(&self, _name: &str) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Unavailable("simulated outage".to_string()))
    }

    fn branches_named_ci(
        &self,
        _restaurant_id: &str,
        _name: &str,
    ) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Unavailable("simulated outage".to_string()))
    }

    fn set_branch_template(&mut self, _branch_id: &str, _template: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("simulated outage".to_string()))
    }
}

// =========================================================================
// Sample data
// =========================================================================

/// Two restaurants, three branches, a small Downtown menu. Newest first,
/// including a symbols-only restaurant whose slug is empty (it must never
/// match) and one menu item with loosely typed id/category/price.
pub fn sample_store() -> MemStore {
    MemStore {
        restaurants: vec![
            json!({"id": "r-bang", "name": "!!!", "created_at": "2026-03-01T00:00:00Z"}),
            json!({
                "id": "r-burger",
                "name": "Burger House",
                "logo": "logos/burger-house.png",
                "created_at": "2026-02-01T00:00:00Z",
            }),
            json!({"id": "r-pasta", "name": "Pasta Palace", "created_at": "2026-01-01T00:00:00Z"}),
        ],
        branches: vec![
            json!({
                "id": "b-yarmouk",
                "restaurant_id": "r-burger",
                "name": "اليرموك",
                "state": "Baghdad",
                "location": "Yarmouk",
                "delivery_price": 1000,
                "created_at": "2026-02-03T00:00:00Z",
            }),
            json!({
                "id": "b-downtown",
                "restaurant_id": "r-burger",
                "name": "Downtown",
                "state": "Baghdad",
                "location": "Karrada",
                "delivery_price": 2500,
                "whatsapp": "+964-770-000-0000",
                "image": "branches/downtown.jpg",
                "active_template": "fast-food-dark",
                "created_at": "2026-02-02T00:00:00Z",
            }),
            json!({
                "id": "b-riverside",
                "restaurant_id": "r-pasta",
                "name": "Riverside",
                "state": "Basra",
                "location": "Corniche",
                "delivery_price": 0,
                "created_at": "2026-01-02T00:00:00Z",
            }),
        ],
        menu_items: vec![
            json!({
                "id": "m-cheese",
                "branch_id": "b-downtown",
                "restaurant_id": "r-burger",
                "name": "Cheeseburger",
                "price": 5000,
                "category": "Main Course",
                "image": "items/cheeseburger.jpg",
                "description": "Double patty, cheddar, house sauce",
                "created_at": "2026-02-10T00:00:00Z",
            }),
            json!({
                "id": "m-baklava",
                "branch_id": "b-downtown",
                "restaurant_id": "r-burger",
                "name": "Baklava",
                "price": 3000,
                "category": "Desserts",
                "created_at": "2026-02-09T00:00:00Z",
            }),
            json!({
                "id": 901,
                "branch_id": "b-downtown",
                "restaurant_id": "r-burger",
                "name": "Mystery Combo",
                "price": "7500",
                "category": 12,
                "created_at": "2026-02-08T00:00:00Z",
            }),
        ],
    }
}

// =========================================================================
// Rendering fixtures
// =========================================================================

/// Owned inputs for one rendered page; borrow a [`MenuPage`] via
/// [`PageFixture::page`]. Fields are public so tests can tweak them before
/// rendering.
pub struct PageFixture {
    pub restaurant: Restaurant,
    pub branch: Branch,
    pub menu: GroupedMenu,
    pub site: SiteConfig,
}

impl PageFixture {
    pub fn page(&self) -> MenuPage<'_> {
        MenuPage {
            restaurant: &self.restaurant,
            branch: &self.branch,
            menu: &self.menu,
            site: &self.site,
        }
    }
}

fn fixture_item(name: &str, price: f64, category: &str) -> MenuItem {
    MenuItem {
        id: format!("id-{name}"),
        branch_id: "b-downtown".to_string(),
        restaurant_id: "r-burger".to_string(),
        name: name.to_string(),
        price,
        category: category.to_string(),
        image: None,
        description: None,
        created_at: "2026-02-10T00:00:00Z".to_string(),
    }
}

/// A Burger House page with a two-category menu.
pub fn page_fixture() -> PageFixture {
    let mut cheeseburger = fixture_item("Cheeseburger", 5000.0, "Main Course");
    cheeseburger.image = Some("items/cheeseburger.jpg".to_string());
    cheeseburger.description = Some("Double patty, cheddar, house sauce".to_string());
    let baklava = fixture_item("Baklava", 3000.0, "Desserts");

    PageFixture {
        restaurant: Restaurant {
            id: "r-burger".to_string(),
            name: "Burger House".to_string(),
            logo: Some("logos/burger-house.png".to_string()),
            created_at: "2026-02-01T00:00:00Z".to_string(),
        },
        branch: Branch {
            id: "b-downtown".to_string(),
            restaurant_id: "r-burger".to_string(),
            name: "Downtown".to_string(),
            state: "Baghdad".to_string(),
            location: "Karrada".to_string(),
            delivery_price: 2500.0,
            whatsapp: Some("+964-770-000-0000".to_string()),
            image: Some("branches/downtown.jpg".to_string()),
            active_template: Some("fast-food-dark".to_string()),
            template_settings: serde_json::Map::new(),
            created_at: "2026-02-02T00:00:00Z".to_string(),
        },
        menu: group_items(vec![cheeseburger, baklava]),
        site: SiteConfig::default(),
    }
}

/// Same branch with no menu items at all.
pub fn empty_page_fixture() -> PageFixture {
    let mut fixture = page_fixture();
    fixture.menu = GroupedMenu::default();
    fixture
}

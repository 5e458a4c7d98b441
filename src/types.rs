//! Typed domain model and the untyped→typed row boundary.
//!
//! Rows come out of the store as loose JSON ([`serde_json::Value`]); the
//! `from_row` constructors here are the single place where they become typed
//! domain values. Identifiers and category labels pass through
//! [`normalize_value`](crate::normalize::normalize_value) exactly once, so
//! everything past this module can treat them as opaque strings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::normalize::normalize_value;

/// Root of the hierarchy. Owned by nothing; branches hang off it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
    /// RFC 3339 timestamp, kept opaque. Store ordering compares it as text.
    pub created_at: String,
}

/// A single physical location of a restaurant; the unit at which a menu and
/// its template are configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub state: String,
    pub location: String,
    /// Non-negative; absent or unparsable values read as 0.
    pub delivery_price: f64,
    pub whatsapp: Option<String>,
    pub image: Option<String>,
    /// Absent, empty, or `"default"` all mean the default renderer.
    pub active_template: Option<String>,
    /// Open-ended presentation parameters (e.g. `primaryColor`).
    pub template_settings: Map<String, Value>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub branch_id: String,
    /// Denormalized; write paths keep it consistent with the branch's owner.
    pub restaurant_id: String,
    pub name: String,
    /// Non-negative; absent or unparsable values read as 0.
    pub price: f64,
    /// Free-text label, expected to match the canonical category list but
    /// not enforced here.
    pub category: String,
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

impl Restaurant {
    pub fn from_row(row: &Value) -> Restaurant {
        Restaurant {
            id: id_field(row, "id"),
            name: text_field(row, "name"),
            logo: optional_text(row, "logo"),
            created_at: text_field(row, "created_at"),
        }
    }
}

impl Branch {
    pub fn from_row(row: &Value) -> Branch {
        Branch {
            id: id_field(row, "id"),
            restaurant_id: id_field(row, "restaurant_id"),
            name: text_field(row, "name"),
            state: text_field(row, "state"),
            location: text_field(row, "location"),
            delivery_price: price_field(row, "delivery_price"),
            whatsapp: optional_text(row, "whatsapp"),
            image: optional_text(row, "image"),
            active_template: optional_text(row, "active_template"),
            template_settings: row
                .get("template_settings")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
            created_at: text_field(row, "created_at"),
        }
    }

    /// Setting value for the given key, when it is a string.
    pub fn template_setting(&self, key: &str) -> Option<&str> {
        self.template_settings.get(key).and_then(Value::as_str)
    }
}

impl MenuItem {
    pub fn from_row(row: &Value) -> MenuItem {
        MenuItem {
            id: id_field(row, "id"),
            branch_id: id_field(row, "branch_id"),
            restaurant_id: id_field(row, "restaurant_id"),
            name: text_field(row, "name"),
            price: price_field(row, "price"),
            category: id_field(row, "category"),
            image: optional_text(row, "image"),
            description: optional_text(row, "description"),
            created_at: text_field(row, "created_at"),
        }
    }
}

// =========================================================================
// Field extraction helpers
// =========================================================================

/// Identifier-like field: coerced through the normalizer, so numbers and
/// structured values become stable string keys.
fn id_field(row: &Value, key: &str) -> String {
    normalize_value(row.get(key).unwrap_or(&Value::Null))
}

/// Plain display text. Non-string values still coerce rather than vanish.
fn text_field(row: &Value, key: &str) -> String {
    id_field(row, key)
}

/// Optional text: absent, null, or empty values read as `None`.
fn optional_text(row: &Value, key: &str) -> Option<String> {
    let text = id_field(row, key);
    if text.is_empty() { None } else { Some(text) }
}

/// Non-negative price. Accepts JSON numbers and numeric strings; anything
/// else (including negatives) reads as 0.
fn price_field(row: &Value, key: &str) -> f64 {
    let parsed = match row.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(p) if p.is_finite() && p >= 0.0 => p,
        _ => 0.0,
    }
}

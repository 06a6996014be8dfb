// src/overlay.rs

//! Merge helpers for layering an override table over defaults.
//!
//! Two modes, selected by the `merge` command:
//!
//! - [`deep_merge`]: nested tables are combined recursively, the overlay
//!   wins on conflicts.
//! - [`shallow_merge`]: every overlay key replaces the corresponding base
//!   entry wholesale; nested tables are not combined.

use serde_json::{Map, Value};

/// Recursively merge `overlay` into `base`. Table values merge key by key;
/// any other value, or a table/non-table conflict, is replaced by the
/// overlay's value.
pub fn deep_merge(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        match (base.get_mut(key), value) {
            (Some(Value::Object(slot)), Value::Object(nested)) => deep_merge(slot, nested),
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Key-level override: each overlay key replaces the base entry wholesale.
pub fn shallow_merge(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        base.insert(key.clone(), value.clone());
    }
}

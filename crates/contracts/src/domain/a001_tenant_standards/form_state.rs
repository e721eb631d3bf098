//! Editable values of the standards form.
//!
//! Values are kept flat, keyed by dotted path relative to `standards`.
//! Expansion back into nested JSON happens only in `submission`.

use super::record::{TenantStandardsRecord, SELECTION_MARKER_PREFIX};
use super::schema::FormSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Entry picked in a multi-select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    Selection(Vec<SelectedOption>),
    /// Anything the form has no widget for; carried through unchanged.
    Other(Value),
    /// Top-level record key with no field at or below it. Sent back as is,
    /// under its exact key, even when the key contains dots.
    Verbatim(Value),
}

impl FieldValue {
    pub fn to_json(&self) -> Value {
        match self {
            Self::Flag(b) => Value::Bool(*b),
            Self::Text(s) => Value::String(s.clone()),
            Self::Selection(items) => Value::Array(
                items
                    .iter()
                    .map(|o| serde_json::json!({ "value": o.value, "label": o.label }))
                    .collect(),
            ),
            Self::Other(v) | Self::Verbatim(v) => v.clone(),
        }
    }

    fn from_array(items: &[Value]) -> Self {
        let mut selected = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(s) => selected.push(SelectedOption {
                    value: s.clone(),
                    label: s.clone(),
                }),
                Value::Object(obj) => {
                    let Some(value) = obj.get("value").and_then(Value::as_str) else {
                        return Self::Other(Value::Array(items.to_vec()));
                    };
                    let label = obj
                        .get("label")
                        .and_then(Value::as_str)
                        .unwrap_or(value);
                    selected.push(SelectedOption {
                        value: value.to_string(),
                        label: label.to_string(),
                    });
                }
                _ => return Self::Other(Value::Array(items.to_vec())),
            }
        }
        Self::Selection(selected)
    }
}

/// Explicit state of a toggle. `Absent` and `Disabled` both serialise as omission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Enabled,
    Disabled,
    Absent,
}

impl ToggleState {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build initial values from the first record of a tenant fetch.
    ///
    /// Only paths the schema covers are taken apart: a toggle path that holds
    /// an object hydrates as enabled with the object's members flattened.
    /// Other top-level keys are kept whole as `Verbatim`; unknown members of
    /// covered objects as `Other`.
    pub fn hydrate(record: Option<&TenantStandardsRecord>, schema: &FormSchema) -> Self {
        let mut state = Self::new();
        if let Some(record) = record {
            for (key, value) in &record.standards {
                if key.starts_with(SELECTION_MARKER_PREFIX) {
                    continue;
                }
                if !schema.covers(key) {
                    state
                        .values
                        .insert(key.clone(), FieldValue::Verbatim(value.clone()));
                    continue;
                }
                state.absorb(key.clone(), value, schema);
            }
        }
        state
    }

    fn absorb(&mut self, path: String, value: &Value, schema: &FormSchema) {
        if !schema.covers(&path) {
            self.values.insert(path, FieldValue::Other(value.clone()));
            return;
        }
        match value {
            Value::Bool(b) => {
                self.values.insert(path, FieldValue::Flag(*b));
            }
            Value::String(s) => {
                self.values.insert(path, FieldValue::Text(s.clone()));
            }
            Value::Array(items) => {
                self.values.insert(path, FieldValue::from_array(items));
            }
            Value::Object(obj) if schema.is_toggle(&path) => {
                self.values.insert(path.clone(), FieldValue::Flag(true));
                for (key, child) in obj {
                    self.absorb(format!("{}.{}", path, key), child, schema);
                }
            }
            Value::Object(obj) if obj.is_empty() => {
                self.values.insert(path, FieldValue::Other(value.clone()));
            }
            Value::Object(obj) => {
                for (key, child) in obj {
                    self.absorb(format!("{}.{}", path, key), child, schema);
                }
            }
            other => {
                self.values.insert(path, FieldValue::Other(other.clone()));
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&FieldValue> {
        self.values.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }

    pub fn toggle(&self, path: &str) -> ToggleState {
        match self.values.get(path) {
            Some(FieldValue::Flag(true)) => ToggleState::Enabled,
            Some(FieldValue::Flag(false)) => ToggleState::Disabled,
            _ => ToggleState::Absent,
        }
    }

    pub fn set_toggle(&mut self, path: &str, enabled: bool) {
        self.values
            .insert(path.to_string(), FieldValue::Flag(enabled));
    }

    pub fn text(&self, path: &str) -> String {
        match self.values.get(path) {
            Some(FieldValue::Text(s)) => s.clone(),
            _ => String::new(),
        }
    }

    pub fn set_text(&mut self, path: &str, text: String) {
        self.values.insert(path.to_string(), FieldValue::Text(text));
    }

    pub fn selection(&self, path: &str) -> Vec<SelectedOption> {
        match self.values.get(path) {
            Some(FieldValue::Selection(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn is_selected(&self, path: &str, value: &str) -> bool {
        matches!(
            self.values.get(path),
            Some(FieldValue::Selection(items)) if items.iter().any(|o| o.value == value)
        )
    }

    /// Add or remove one option of a multi-select, keeping pick order.
    pub fn set_selected(&mut self, path: &str, option: SelectedOption, selected: bool) {
        let mut items = self.selection(path);
        items.retain(|o| o.value != option.value);
        if selected {
            items.push(option);
        }
        self.values
            .insert(path.to_string(), FieldValue::Selection(items));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tenant_standards::catalog::{
        AddedComponent, ComponentKind, StandardCatalogItem, StandardCategory,
    };
    use serde_json::json;

    const CATALOG: &[StandardCatalogItem] = &[
        StandardCatalogItem::toggle("a", "A", StandardCategory::Global),
        StandardCatalogItem::toggle("b", "B", StandardCategory::Global).with_component(
            AddedComponent {
                kind: ComponentKind::Text,
                name: "b.extra",
                label: "Extra",
                values: &[],
            },
        ),
    ];

    fn record(standards: Value) -> TenantStandardsRecord {
        TenantStandardsRecord {
            standards: standards.as_object().cloned().unwrap_or_default(),
            ..Default::default()
        }
    }

    #[test]
    fn hydrate_without_record_is_empty() {
        let schema = FormSchema::build(CATALOG);
        let state = FormState::hydrate(None, &schema);
        assert_eq!(state, FormState::new());
        assert_eq!(state.toggle("a"), ToggleState::Absent);
    }

    #[test]
    fn hydrate_reads_flags() {
        let schema = FormSchema::build(CATALOG);
        let state = FormState::hydrate(Some(&record(json!({ "a": true, "b": false }))), &schema);
        assert_eq!(state.toggle("a"), ToggleState::Enabled);
        assert_eq!(state.toggle("b"), ToggleState::Disabled);
    }

    #[test]
    fn hydrate_flattens_nested_objects() {
        let schema = FormSchema::build(CATALOG);
        let state = FormState::hydrate(
            Some(&record(json!({
                "b": { "extra": "hello" },
                "IntuneTemplate": {
                    "enabled": true,
                    "TemplateList": [{ "value": "g-1", "label": "Baseline" }]
                },
                "Select_contoso.onmicrosoft.com": "contoso.onmicrosoft.com"
            }))),
            &schema,
        );
        assert_eq!(state.toggle("b"), ToggleState::Enabled);
        assert_eq!(state.text("b.extra"), "hello");
        assert_eq!(state.toggle("IntuneTemplate.enabled"), ToggleState::Enabled);
        assert!(state.is_selected("IntuneTemplate.TemplateList", "g-1"));
        assert!(state.get("Select_contoso.onmicrosoft.com").is_none());
    }

    #[test]
    fn unknown_shapes_are_kept_as_other() {
        let schema = FormSchema::build(CATALOG);
        let state = FormState::hydrate(
            Some(&record(json!({ "legacy": 3, "mixed": [1, "x"] }))),
            &schema,
        );
        assert_eq!(state.get("legacy"), Some(&FieldValue::Verbatim(json!(3))));
        assert_eq!(
            state.get("mixed").map(FieldValue::to_json),
            Some(json!([1, "x"]))
        );
    }

    #[test]
    fn keys_without_fields_are_kept_whole() {
        let schema = FormSchema::build(CATALOG);
        let state = FormState::hydrate(
            Some(&record(json!({
                "legacyNull": null,
                "legacyObj": {},
                "legacyTree": { "x": { "y": 1 } },
                "a.b": true,
                "b": { "extra": "hi", "note": null }
            }))),
            &schema,
        );
        assert_eq!(state.get("legacyNull"), Some(&FieldValue::Verbatim(Value::Null)));
        assert_eq!(state.get("legacyObj"), Some(&FieldValue::Verbatim(json!({}))));
        assert_eq!(
            state.get("legacyTree"),
            Some(&FieldValue::Verbatim(json!({ "x": { "y": 1 } })))
        );
        assert_eq!(state.get("a.b"), Some(&FieldValue::Verbatim(json!(true))));
        assert_eq!(state.toggle("b"), ToggleState::Enabled);
        assert_eq!(state.text("b.extra"), "hi");
        assert_eq!(state.get("b.note"), Some(&FieldValue::Other(Value::Null)));
    }

    #[test]
    fn selection_toggles_single_options() {
        let mut state = FormState::new();
        let option = |v: &str| SelectedOption {
            value: v.into(),
            label: v.to_uppercase(),
        };
        state.set_selected("X.TemplateList", option("one"), true);
        state.set_selected("X.TemplateList", option("two"), true);
        state.set_selected("X.TemplateList", option("one"), true);
        assert_eq!(
            state
                .selection("X.TemplateList")
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>(),
            vec!["two", "one"]
        );
        state.set_selected("X.TemplateList", option("two"), false);
        assert!(!state.is_selected("X.TemplateList", "two"));
        assert!(state.is_selected("X.TemplateList", "one"));
    }
}

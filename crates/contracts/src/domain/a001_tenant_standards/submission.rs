//! Wire encoding of a standards submission for `/api/AddStandardsDeploy`.
//!
//! The deploy endpoint reads "key absent" as "standard disabled". Internally
//! toggles are tri-state (`ToggleState`); this module is the one place that
//! turns them into that omission-based encoding:
//!
//! 1. fields whose visibility predicate is false are dropped;
//! 2. dotted paths expand into nested objects, except keys hydrated
//!    verbatim, which go back under their exact key;
//! 3. top-level entries equal to `false` are removed;
//! 4. a single `Select_<tenant>` marker is added.

use super::form_state::{FieldValue, FormState};
use super::record::{TenantKey, SELECTION_MARKER_PREFIX};
use super::schema::FormSchema;
use serde_json::{Map, Value};

pub fn encode_payload(
    schema: &FormSchema,
    state: &FormState,
    tenant: &TenantKey,
) -> Map<String, Value> {
    let mut payload = Map::new();

    // BTreeMap order puts an owner toggle ahead of the paths nested under it.
    for (path, value) in state.iter() {
        if path.starts_with(SELECTION_MARKER_PREFIX) {
            continue;
        }
        let visible = schema
            .field(path)
            .map(|field| field.is_visible(state))
            .unwrap_or(true);
        if !visible {
            continue;
        }
        match value {
            FieldValue::Verbatim(raw) => {
                payload.insert(path.clone(), raw.clone());
            }
            _ => insert_path(&mut payload, path, value.to_json()),
        }
    }

    payload.retain(|key, value| {
        !matches!(value, Value::Bool(false)) && !key.starts_with(SELECTION_MARKER_PREFIX)
    });

    payload.insert(
        tenant.selection_marker(),
        Value::String(tenant.as_str().to_string()),
    );
    payload
}

/// Set `path` inside `root`, creating intermediate objects.
///
/// A non-object met on the way is replaced by an object, so a dependent value
/// stored under its own toggle turns that toggle into `{ <field>: value }`.
fn insert_path(root: &mut Map<String, Value>, path: &str, value: Value) {
    let mut segments = path.split('.').peekable();
    let mut current = root;
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_string(), value);
            return;
        }
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        let Value::Object(map) = entry else {
            return;
        };
        current = map;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_tenant_standards::catalog::{
        AddedComponent, ComponentKind, StandardCatalogItem, StandardCategory,
    };
    use crate::domain::a001_tenant_standards::form_state::SelectedOption;
    use crate::domain::a001_tenant_standards::record::TenantStandardsRecord;
    use crate::domain::a001_tenant_standards::schema::DEFAULT_SCHEMA;
    use crate::domain::a001_tenant_standards::template::TemplateKind;
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

    fn tenant() -> TenantKey {
        TenantKey::parse("contoso.onmicrosoft.com").unwrap()
    }

    fn hydrated(standards: Value) -> (FormSchema, FormState) {
        let schema = FormSchema::build(CATALOG);
        let record = TenantStandardsRecord {
            standards: standards.as_object().cloned().unwrap_or_default(),
            ..Default::default()
        };
        let state = FormState::hydrate(Some(&record), &schema);
        (schema, state)
    }

    #[test]
    fn scenario_false_toggle_is_omitted() {
        let (schema, state) = hydrated(json!({ "a": true, "b": false }));
        let payload = encode_payload(&schema, &state, &tenant());
        assert_eq!(
            Value::Object(payload),
            json!({
                "a": true,
                "Select_contoso.onmicrosoft.com": "contoso.onmicrosoft.com"
            })
        );
    }

    #[test]
    fn scenario_revealed_field_is_sent_when_enabled() {
        let (schema, mut state) = hydrated(json!({ "a": true, "b": false }));
        state.set_toggle("b", true);
        state.set_text("b.extra", "value".into());
        let payload = encode_payload(&schema, &state, &tenant());
        assert_eq!(payload.get("b"), Some(&json!({ "extra": "value" })));
        assert_eq!(payload.get("a"), Some(&json!(true)));
    }

    #[test]
    fn hidden_dependent_is_not_sent() {
        let (schema, mut state) = hydrated(json!({}));
        state.set_toggle("b", true);
        state.set_text("b.extra", "typed then disabled".into());
        state.set_toggle("b", false);
        let payload = encode_payload(&schema, &state, &tenant());
        assert!(!payload.contains_key("b"));
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn other_keys_pass_through_unchanged() {
        let (schema, state) = hydrated(json!({
            "a": true,
            "legacyFlag": true,
            "legacyText": "kept",
            "legacyNumber": 7,
            "legacyOff": false
        }));
        let payload = encode_payload(&schema, &state, &tenant());
        assert_eq!(payload.get("legacyFlag"), Some(&json!(true)));
        assert_eq!(payload.get("legacyText"), Some(&json!("kept")));
        assert_eq!(payload.get("legacyNumber"), Some(&json!(7)));
        assert!(!payload.contains_key("legacyOff"));
    }

    #[test]
    fn keys_without_fields_round_trip_exactly() {
        let (schema, state) = hydrated(json!({
            "a": true,
            "legacyNull": null,
            "legacyObj": {},
            "a.b": true,
            "b": { "extra": "x", "note": null }
        }));
        let payload = encode_payload(&schema, &state, &tenant());
        assert_eq!(
            Value::Object(payload),
            json!({
                "a": true,
                "legacyNull": null,
                "legacyObj": {},
                "a.b": true,
                "b": { "extra": "x", "note": null },
                "Select_contoso.onmicrosoft.com": "contoso.onmicrosoft.com"
            })
        );
    }

    #[test]
    fn default_schema_keeps_unknown_keys_intact() {
        let record = TenantStandardsRecord {
            standards: json!({
                "AuditLog": true,
                "legacyNull": null,
                "legacyObj": {},
                "a.b": true
            })
            .as_object()
            .cloned()
            .unwrap(),
            ..Default::default()
        };
        let state = FormState::hydrate(Some(&record), &DEFAULT_SCHEMA);
        let payload = encode_payload(&DEFAULT_SCHEMA, &state, &tenant());
        assert_eq!(payload.get("AuditLog"), Some(&json!(true)));
        assert_eq!(payload.get("legacyNull"), Some(&Value::Null));
        assert_eq!(payload.get("legacyObj"), Some(&json!({})));
        assert_eq!(payload.get("a.b"), Some(&json!(true)));
        assert!(!payload.contains_key("a"));
        assert_eq!(payload.len(), 5);
    }

    #[test]
    fn exactly_one_selection_marker() {
        let (schema, mut state) = hydrated(json!({
            "a": true,
            "Select_other.onmicrosoft.com": "other.onmicrosoft.com"
        }));
        state.set_text("Select_stale", "stale".into());
        let payload = encode_payload(&schema, &state, &tenant());
        let markers: Vec<_> = payload
            .iter()
            .filter(|(k, _)| k.starts_with("Select_"))
            .collect();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].0, "Select_contoso.onmicrosoft.com");
        assert_eq!(markers[0].1, &json!("contoso.onmicrosoft.com"));
    }

    #[test]
    fn template_section_encodes_nested_object() {
        let (schema, mut state) = hydrated(json!({}));
        let kind = TemplateKind::Intune;
        state.set_toggle(&kind.toggle_path(), true);
        state.set_selected(
            &kind.list_path(),
            SelectedOption {
                value: "g-1".into(),
                label: "Baseline".into(),
            },
            true,
        );
        let payload = encode_payload(&schema, &state, &tenant());
        assert_eq!(
            payload.get("IntuneTemplate"),
            Some(&json!({
                "enabled": true,
                "TemplateList": [{ "value": "g-1", "label": "Baseline" }]
            }))
        );
    }

    #[test]
    fn disabled_template_keeps_flag_but_drops_list() {
        let (schema, state) = hydrated(json!({
            "GroupTemplate": {
                "enabled": false,
                "TemplateList": [{ "value": "g-9", "label": "Sales" }]
            }
        }));
        let payload = encode_payload(&schema, &state, &tenant());
        assert_eq!(
            payload.get("GroupTemplate"),
            Some(&json!({ "enabled": false }))
        );
    }

    #[test]
    fn no_false_value_survives_at_top_level() {
        let (schema, mut state) = hydrated(json!({ "a": false, "x": false, "y": true }));
        state.set_toggle("b", false);
        let payload = encode_payload(&schema, &state, &tenant());
        assert!(payload.values().all(|v| v != &Value::Bool(false)));
        assert_eq!(payload.get("y"), Some(&json!(true)));
    }
}

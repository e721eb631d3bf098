use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default domain of a managed tenant; the key every standards call is scoped by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantKey(String);

impl TenantKey {
    /// Returns `None` for blank input.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Marker key telling the deploy endpoint which tenant a bundle targets.
    pub fn selection_marker(&self) -> String {
        format!("{}{}", SELECTION_MARKER_PREFIX, self.0)
    }
}

impl fmt::Display for TenantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const SELECTION_MARKER_PREFIX: &str = "Select_";

/// Standards currently applied to one tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenantStandardsRecord {
    #[serde(rename = "Tenant", alias = "tenantKey", default)]
    pub tenant_key: String,
    #[serde(rename = "appliedBy", default)]
    pub applied_by: Option<String>,
    #[serde(rename = "appliedAt", default)]
    pub applied_at: Option<String>,
    #[serde(default)]
    pub standards: serde_json::Map<String, serde_json::Value>,
}

impl TenantStandardsRecord {
    pub fn is_applied(&self) -> bool {
        self.applied_by
            .as_deref()
            .map(|by| !by.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Banner shown above the editor.
pub fn applied_banner(record: Option<&TenantStandardsRecord>) -> String {
    match record {
        Some(record) if record.is_applied() => format!(
            "This standard has been applied at {} by {}",
            format_applied_at(record.applied_at.as_deref().unwrap_or_default()),
            record.applied_by.as_deref().unwrap_or_default()
        ),
        _ => "This tenant does not yet have a standard applied".to_string(),
    }
}

/// RFC 3339 timestamps are shown as `YYYY-MM-DD HH:MM:SS UTC`; anything else as sent.
pub fn format_applied_at(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Row of the all-tenants overview.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TenantStandardsSummary {
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(rename = "StandardsExport", default)]
    pub standards_export: String,
}

/// Envelope of the action endpoints (`{"Results": "..."}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsResponse {
    #[serde(rename = "Results", default)]
    pub results: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tenant_key_rejects_blank() {
        assert!(TenantKey::parse("   ").is_none());
        let key = TenantKey::parse(" contoso.onmicrosoft.com ").unwrap();
        assert_eq!(key.as_str(), "contoso.onmicrosoft.com");
        assert_eq!(key.selection_marker(), "Select_contoso.onmicrosoft.com");
    }

    #[test]
    fn record_deserializes_with_missing_fields() {
        let record: TenantStandardsRecord = serde_json::from_value(json!({
            "Tenant": "contoso.onmicrosoft.com",
            "standards": { "AuditLog": true }
        }))
        .unwrap();
        assert_eq!(record.tenant_key, "contoso.onmicrosoft.com");
        assert!(record.applied_by.is_none());
        assert!(!record.is_applied());
        assert_eq!(record.standards.get("AuditLog"), Some(&json!(true)));

        let empty: TenantStandardsRecord = serde_json::from_value(json!({})).unwrap();
        assert!(empty.standards.is_empty());
    }

    #[test]
    fn banner_for_never_applied_tenant() {
        assert_eq!(
            applied_banner(None),
            "This tenant does not yet have a standard applied"
        );
        let record = TenantStandardsRecord {
            applied_by: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            applied_banner(Some(&record)),
            "This tenant does not yet have a standard applied"
        );
    }

    #[test]
    fn banner_names_who_and_when() {
        let record = TenantStandardsRecord {
            tenant_key: "contoso.onmicrosoft.com".into(),
            applied_by: Some("admin@contoso.com".into()),
            applied_at: Some("2024-03-15T14:02:26Z".into()),
            standards: Default::default(),
        };
        assert_eq!(
            applied_banner(Some(&record)),
            "This standard has been applied at 2024-03-15 14:02:26 UTC by admin@contoso.com"
        );
    }

    #[test]
    fn applied_at_falls_back_to_raw_text() {
        assert_eq!(format_applied_at("15/03/2024 14:02"), "15/03/2024 14:02");
        assert_eq!(
            format_applied_at("2024-03-15T16:02:26+02:00"),
            "2024-03-15 14:02:26 UTC"
        );
    }

    #[test]
    fn summary_uses_wire_names() {
        let rows: Vec<TenantStandardsSummary> = serde_json::from_value(json!([
            { "displayName": "Contoso", "StandardsExport": "AuditLog, laps" },
            { "displayName": "Fabrikam" }
        ]))
        .unwrap();
        assert_eq!(rows[0].standards_export, "AuditLog, laps");
        assert_eq!(rows[1].standards_export, "");
    }
}

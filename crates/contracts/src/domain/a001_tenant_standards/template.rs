//! Deployable template kinds and their reference lists.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateKind {
    Intune,
    TransportRule,
    ConditionalAccess,
    ExchangeConnector,
    Group,
}

impl TemplateKind {
    /// Render order of the "Templates" section.
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Intune,
        TemplateKind::TransportRule,
        TemplateKind::ConditionalAccess,
        TemplateKind::ExchangeConnector,
        TemplateKind::Group,
    ];

    /// Key of the kind's object inside `standards`.
    pub fn form_key(&self) -> &'static str {
        match self {
            Self::Intune => "IntuneTemplate",
            Self::TransportRule => "TransportRuleTemplate",
            Self::ConditionalAccess => "ConditionalAccess",
            Self::ExchangeConnector => "ExConnector",
            Self::Group => "GroupTemplate",
        }
    }

    pub fn toggle_path(&self) -> String {
        format!("{}.enabled", self.form_key())
    }

    pub fn list_path(&self) -> String {
        format!("{}.TemplateList", self.form_key())
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Intune => "/api/ListIntuneTemplates",
            Self::TransportRule => "/api/ListTransportRulesTemplates",
            Self::ConditionalAccess => "/api/ListCAtemplates",
            Self::ExchangeConnector => "/api/ListExConnectorTemplates",
            Self::Group => "/api/ListGroupTemplates",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            Self::Intune => "Deploy Intune Template",
            Self::TransportRule => "Deploy Transport Rule Template",
            Self::ConditionalAccess => "Deploy Conditional Access Template",
            Self::ExchangeConnector => "Deploy Exchange Connector Template",
            Self::Group => "Deploy Group Template",
        }
    }

    pub fn picker_label(&self) -> &'static str {
        match self {
            Self::Intune => "Choose your Intune templates to apply",
            Self::TransportRule => "Choose your Transport Rule templates to apply",
            Self::ConditionalAccess => "Choose your Conditional Access templates to apply",
            Self::ExchangeConnector => "Choose your Exchange Connector templates to apply",
            Self::Group => "Choose your Group templates to apply",
        }
    }

    /// Field of a template row holding its display text. Each list endpoint names it differently.
    fn display_field(&self) -> &'static str {
        match self {
            Self::Intune | Self::Group => "Displayname",
            Self::TransportRule | Self::ExchangeConnector => "name",
            Self::ConditionalAccess => "displayName",
        }
    }

    /// Convert raw rows of this kind's endpoint. Rows without a `GUID` are skipped.
    pub fn parse_rows(&self, rows: &[serde_json::Value]) -> Vec<TemplateReference> {
        rows.iter()
            .filter_map(|row| {
                let id = row.get("GUID")?.as_str()?.to_string();
                let display_name = row
                    .get(self.display_field())
                    .and_then(|v| v.as_str())
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| id.clone());
                Some(TemplateReference { id, display_name })
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateReference {
    pub id: String,
    pub display_name: String,
}

//! Static catalog of configurable standards.
//!
//! Every item is addressed by a dotted path relative to the `standards`
//! object of a tenant record. Items may carry one dependent input that is only
//! meaningful while the item's toggle is on.

use serde::Serialize;

/// Section a standard is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StandardCategory {
    Global,
    #[serde(rename = "AAD")]
    Aad,
    Exchange,
    Intune,
    SharePoint,
}

impl StandardCategory {
    /// Render order of the catalog sections.
    pub const ORDERED: [StandardCategory; 5] = [
        StandardCategory::Global,
        StandardCategory::Aad,
        StandardCategory::Exchange,
        StandardCategory::Intune,
        StandardCategory::SharePoint,
    ];

    /// Section heading shown above the toggles.
    pub fn section_title(&self) -> &'static str {
        match self {
            Self::Global => "Global Standards",
            Self::Aad => "Azure AD Standards",
            Self::Exchange => "Exchange Standards",
            Self::Intune => "Intune Standards",
            Self::SharePoint => "SharePoint Standards",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentKind {
    Select,
    Text,
}

/// One entry of a catalog-supplied select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Input revealed under a standard's toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddedComponent {
    pub kind: ComponentKind,
    pub name: &'static str,
    pub label: &'static str,
    pub values: &'static [SelectOption],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandardCatalogItem {
    pub name: &'static str,
    pub label: &'static str,
    pub category: StandardCategory,
    pub added_component: Option<AddedComponent>,
}

impl StandardCatalogItem {
    pub const fn toggle(
        name: &'static str,
        label: &'static str,
        category: StandardCategory,
    ) -> Self {
        Self {
            name,
            label,
            category,
            added_component: None,
        }
    }

    pub const fn with_component(mut self, component: AddedComponent) -> Self {
        self.added_component = Some(component);
        self
    }
}

/// Items of one category in catalog order.
pub fn items_in_category(
    catalog: &[StandardCatalogItem],
    category: StandardCategory,
) -> impl Iterator<Item = &StandardCatalogItem> {
    catalog.iter().filter(move |item| item.category == category)
}

const TAP_OPTIONS: &[SelectOption] = &[
    SelectOption {
        value: "true",
        label: "Only Once",
    },
    SelectOption {
        value: "false",
        label: "Multiple Logons",
    },
];

const ENABLED_DISABLED: &[SelectOption] = &[
    SelectOption {
        value: "enabled",
        label: "Enabled",
    },
    SelectOption {
        value: "disabled",
        label: "Disabled",
    },
];

const SHARING_LEVELS: &[SelectOption] = &[
    SelectOption {
        value: "disabled",
        label: "Only people in the organization",
    },
    SelectOption {
        value: "existingExternalUserSharingOnly",
        label: "Existing guests",
    },
    SelectOption {
        value: "externalUserSharingOnly",
        label: "New and existing guests",
    },
    SelectOption {
        value: "externalUserAndGuestSharing",
        label: "Anyone",
    },
];

use StandardCategory::*;

/// Default catalog shipped with the console.
pub static ALL_STANDARDS: &[StandardCatalogItem] = &[
    StandardCatalogItem::toggle("AuditLog", "Enable the Unified Audit Log", Global),
    StandardCatalogItem::toggle("laps", "Enable LAPS on the tenant", Global),
    StandardCatalogItem::toggle(
        "PWnumberMatchingRequiredState",
        "Enable Passwordless with Number Matching",
        Global,
    ),
    StandardCatalogItem::toggle(
        "TAP",
        "Enable Temporary Access Passwords",
        Global,
    )
    .with_component(AddedComponent {
        kind: ComponentKind::Select,
        name: "TAP.config",
        label: "Select TAP Lifetime",
        values: TAP_OPTIONS,
    }),
    StandardCatalogItem::toggle("SecurityDefaults", "Enable Security Defaults", Aad),
    StandardCatalogItem::toggle(
        "DisableSelfServiceLicenses",
        "Disable Self Service Licensing",
        Aad,
    ),
    StandardCatalogItem::toggle(
        "PasswordExpireDisabled",
        "Do not expire passwords",
        Aad,
    ),
    StandardCatalogItem::toggle(
        "OauthConsent",
        "Require admin consent for applications (Prevent OAuth phishing)",
        Aad,
    )
    .with_component(AddedComponent {
        kind: ComponentKind::Text,
        name: "OauthConsent.AllowedApps",
        label: "Allowed application IDs, comma separated",
        values: &[],
    }),
    StandardCatalogItem::toggle(
        "SpoofWarn",
        "Enable Spoofing warnings for Outlook",
        Exchange,
    )
    .with_component(AddedComponent {
        kind: ComponentKind::Select,
        name: "SpoofWarn.state",
        label: "Enable or disable the warning",
        values: ENABLED_DISABLED,
    }),
    StandardCatalogItem::toggle("AutoExpandArchive", "Enable Auto-expanding archives", Exchange),
    StandardCatalogItem::toggle("EnableMailTips", "Enable all MailTips", Exchange),
    StandardCatalogItem::toggle(
        "DisableBasicAuthSMTP",
        "Disable SMTP Basic Authentication",
        Exchange,
    ),
    StandardCatalogItem::toggle(
        "intuneDeviceRetirementDays",
        "Set inactive device retirement days",
        Intune,
    )
    .with_component(AddedComponent {
        kind: ComponentKind::Text,
        name: "intuneDeviceRetirementDays.days",
        label: "Maximum days",
        values: &[],
    }),
    StandardCatalogItem::toggle(
        "intuneRequireMFA",
        "Require Multifactor Authentication to register or join devices",
        Intune,
    ),
    StandardCatalogItem::toggle(
        "DisableUserSiteCreate",
        "Disable site creation by standard users",
        SharePoint,
    ),
    StandardCatalogItem::toggle(
        "sharingCapability",
        "Set Sharing Level for OneDrive and SharePoint",
        SharePoint,
    )
    .with_component(AddedComponent {
        kind: ComponentKind::Select,
        name: "sharingCapability.Level",
        label: "Select Sharing Level",
        values: SHARING_LEVELS,
    }),
    StandardCatalogItem::toggle(
        "ExcludedfileExt",
        "Exclude File Extensions from Syncing",
        SharePoint,
    )
    .with_component(AddedComponent {
        kind: ComponentKind::Text,
        name: "ExcludedfileExt.ext",
        label: "Extensions, comma separated",
        values: &[],
    }),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_unique() {
        let mut seen = HashSet::new();
        for item in ALL_STANDARDS {
            assert!(seen.insert(item.name), "duplicate standard {}", item.name);
            if let Some(component) = item.added_component {
                assert!(seen.insert(component.name), "duplicate field {}", component.name);
            }
        }
    }

    #[test]
    fn every_category_has_items() {
        for category in StandardCategory::ORDERED {
            assert!(items_in_category(ALL_STANDARDS, category).next().is_some());
        }
    }

    #[test]
    fn category_filter_preserves_catalog_order() {
        let names: Vec<_> = items_in_category(ALL_STANDARDS, StandardCategory::Exchange)
            .map(|item| item.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "SpoofWarn",
                "AutoExpandArchive",
                "EnableMailTips",
                "DisableBasicAuthSMTP"
            ]
        );
    }

    #[test]
    fn select_components_carry_values() {
        for item in ALL_STANDARDS {
            if let Some(component) = item.added_component {
                match component.kind {
                    ComponentKind::Select => assert!(!component.values.is_empty()),
                    ComponentKind::Text => assert!(component.values.is_empty()),
                }
            }
        }
    }
}

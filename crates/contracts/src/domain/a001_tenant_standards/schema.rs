//! Declarative field set of the standards form.
//!
//! The schema lists every field the form can show, grouped into sections,
//! each with an optional owner toggle. Visibility is a pure function of the
//! current `FormState`, so renderers and the submission encoder share a
//! single definition of which fields are active.

use super::catalog::{
    items_in_category, ComponentKind, SelectOption, StandardCatalogItem, StandardCategory,
    ALL_STANDARDS,
};
use super::form_state::FormState;
use super::template::TemplateKind;
use once_cell::sync::Lazy;

/// Schema of the built-in catalog.
pub static DEFAULT_SCHEMA: Lazy<FormSchema> = Lazy::new(|| FormSchema::build(ALL_STANDARDS));

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Toggle,
    Text,
    Select(&'static [SelectOption]),
    TemplatePicker(TemplateKind),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub path: String,
    pub label: String,
    pub kind: FieldKind,
    /// Toggle that must be enabled for this field to be active.
    pub owner: Option<String>,
}

impl FieldDescriptor {
    fn toggle(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
            kind: FieldKind::Toggle,
            owner: None,
        }
    }

    pub fn is_visible(&self, state: &FormState) -> bool {
        match &self.owner {
            Some(owner) => state.toggle(owner).is_enabled(),
            None => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionKind {
    Catalog(StandardCategory),
    Templates,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSection {
    pub kind: SectionKind,
    pub title: &'static str,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormSchema {
    sections: Vec<FormSection>,
}

impl FormSchema {
    /// Five catalog sections in fixed order, then the templates section.
    pub fn build(catalog: &[StandardCatalogItem]) -> Self {
        let mut sections: Vec<FormSection> = StandardCategory::ORDERED
            .iter()
            .map(|category| catalog_section(catalog, *category))
            .collect();
        sections.push(templates_section());
        Self { sections }
    }

    pub fn sections(&self) -> &[FormSection] {
        &self.sections
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn field(&self, path: &str) -> Option<&FieldDescriptor> {
        self.fields().find(|f| f.path == path)
    }

    pub fn is_toggle(&self, path: &str) -> bool {
        matches!(self.field(path), Some(f) if f.kind == FieldKind::Toggle)
    }

    /// True when a field sits at `path` or somewhere below it.
    pub fn covers(&self, path: &str) -> bool {
        self.fields().any(|f| {
            f.path == path
                || f.path
                    .strip_prefix(path)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    /// Fields whose visibility predicate holds for `state`, in render order.
    pub fn active_fields<'a>(
        &'a self,
        state: &'a FormState,
    ) -> impl Iterator<Item = &'a FieldDescriptor> + 'a {
        self.fields().filter(move |f| f.is_visible(state))
    }
}

fn catalog_section(catalog: &[StandardCatalogItem], category: StandardCategory) -> FormSection {
    let mut fields = Vec::new();
    for item in items_in_category(catalog, category) {
        fields.push(FieldDescriptor::toggle(item.name, item.label));
        if let Some(component) = item.added_component {
            let kind = match component.kind {
                ComponentKind::Select => FieldKind::Select(component.values),
                ComponentKind::Text => FieldKind::Text,
            };
            fields.push(FieldDescriptor {
                path: component.name.to_string(),
                label: component.label.to_string(),
                kind,
                owner: Some(item.name.to_string()),
            });
        }
    }
    FormSection {
        kind: SectionKind::Catalog(category),
        title: category.section_title(),
        fields,
    }
}

fn templates_section() -> FormSection {
    let mut fields = Vec::new();
    for kind in TemplateKind::ALL {
        let toggle_path = kind.toggle_path();
        fields.push(FieldDescriptor::toggle(toggle_path.clone(), kind.toggle_label()));
        fields.push(FieldDescriptor {
            path: kind.list_path(),
            label: kind.picker_label().to_string(),
            kind: FieldKind::TemplatePicker(kind),
            owner: Some(toggle_path),
        });
    }
    FormSection {
        kind: SectionKind::Templates,
        title: "Templates",
        fields,
    }
}

//! On-demand loading of template reference lists.
//!
//! Each template kind owns one lane. A lane leaves `Uninitialized` exactly
//! once, so however often its toggle is flipped at most one request is issued
//! per page lifetime. Failed lanes stay failed; the user reloads the page to
//! try again.

use super::form_state::FormState;
use super::template::{TemplateKind, TemplateReference};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LaneState {
    #[default]
    Uninitialized,
    Loading,
    Loaded(Vec<TemplateReference>),
    Failed(String),
}

impl LaneState {
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateLanes {
    lanes: BTreeMap<TemplateKind, LaneState>,
}

impl TemplateLanes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, kind: TemplateKind) -> LaneState {
        self.lanes.get(&kind).cloned().unwrap_or_default()
    }

    /// Claim the lane for a fetch. Returns `true` only for the call that moves
    /// it out of `Uninitialized`; the caller must then issue the request.
    pub fn request(&mut self, kind: TemplateKind) -> bool {
        let lane = self.lanes.entry(kind).or_default();
        if lane.is_uninitialized() {
            *lane = LaneState::Loading;
            true
        } else {
            false
        }
    }

    /// Kinds whose toggle is enabled in `form` and whose lane was never
    /// requested, in section order. Covers toggles hydrated as enabled.
    pub fn pending(&self, form: &FormState) -> Vec<TemplateKind> {
        TemplateKind::ALL
            .into_iter()
            .filter(|kind| form.toggle(&kind.toggle_path()).is_enabled())
            .filter(|kind| self.state(*kind).is_uninitialized())
            .collect()
    }

    /// Store the outcome of a fetch. Responses arriving after the toggle was
    /// switched off are kept.
    pub fn resolve(&mut self, kind: TemplateKind, result: Result<Vec<TemplateReference>, String>) {
        let state = match result {
            Ok(items) => LaneState::Loaded(items),
            Err(e) => LaneState::Failed(e),
        };
        self.lanes.insert(kind, state);
    }
}

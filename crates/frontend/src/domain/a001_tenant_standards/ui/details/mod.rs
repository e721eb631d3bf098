//! Standards editor
//!
//! MVVM layout:
//! - view_model.rs: record load, form state, template lanes, save command
//! - view.rs: editor shell (skeleton, banner, submit)
//! - section.rs: one renderer for every schema section

mod section;
mod view;
mod view_model;

pub use view::StandardsEditor;
pub use view_model::{RecordLoad, StandardsEditorVm};

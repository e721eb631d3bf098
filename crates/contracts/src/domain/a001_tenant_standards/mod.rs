pub mod action;
pub mod catalog;
pub mod fetch_lane;
pub mod form_state;
pub mod record;
pub mod request;
pub mod schema;
pub mod submission;
pub mod template;

pub use action::{ActionStatus, RunNowOutcome, ALREADY_RUNNING};
pub use catalog::{StandardCatalogItem, StandardCategory, ALL_STANDARDS};
pub use fetch_lane::{LaneState, TemplateLanes};
pub use form_state::{FieldValue, FormState, SelectedOption, ToggleState};
pub use record::{
    applied_banner, ResultsResponse, TenantKey, TenantStandardsRecord, TenantStandardsSummary,
};
pub use schema::{FieldDescriptor, FieldKind, FormSchema, FormSection, DEFAULT_SCHEMA};
pub use submission::encode_payload;
pub use template::{TemplateKind, TemplateReference};

use serde::Serialize;

pub const LIST_STANDARDS_PATH: &str = "/api/listStandards";
pub const RUN_NOW_PATH: &str = "/api/Standards_OrchestrationStarter";
pub const REMOVE_STANDARD_PATH: &str = "/api/RemoveStandard";
pub const DEPLOY_STANDARDS_PATH: &str = "/api/AddStandardsDeploy";

/// Query of `GET /api/listStandards` for a single tenant.
#[derive(Debug, Clone, Serialize)]
pub struct ListStandardsQuery<'a> {
    #[serde(rename = "TenantFilter")]
    pub tenant_filter: &'a str,
}

/// Query of `GET /api/RemoveStandard`.
#[derive(Debug, Clone, Serialize)]
pub struct RemoveStandardQuery<'a> {
    #[serde(rename = "ID")]
    pub id: &'a str,
}

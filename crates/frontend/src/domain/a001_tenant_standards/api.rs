use crate::shared::api_utils::{api_url, api_url_with_query, get_json, post_json};
use contracts::domain::a001_tenant_standards::request::{
    ListStandardsQuery, RemoveStandardQuery, DEPLOY_STANDARDS_PATH, LIST_STANDARDS_PATH,
    REMOVE_STANDARD_PATH, RUN_NOW_PATH,
};
use contracts::domain::a001_tenant_standards::{
    ResultsResponse, RunNowOutcome, TemplateKind, TemplateReference, TenantKey,
    TenantStandardsRecord, TenantStandardsSummary,
};
use contracts::shared::api::ApiError;
use serde_json::{Map, Value};

/// Applied-standards summary of every tenant
pub async fn fetch_all_summaries() -> Result<Vec<TenantStandardsSummary>, ApiError> {
    get_json(&api_url(LIST_STANDARDS_PATH)).await
}

/// Full standards record(s) of one tenant. Empty when nothing was ever applied.
pub async fn fetch_tenant_standards(
    tenant: &TenantKey,
) -> Result<Vec<TenantStandardsRecord>, ApiError> {
    let url = api_url_with_query(
        LIST_STANDARDS_PATH,
        &ListStandardsQuery {
            tenant_filter: tenant.as_str(),
        },
    )?;
    get_json(&url).await
}

/// Reference list of one template kind
pub async fn fetch_templates(kind: TemplateKind) -> Result<Vec<TemplateReference>, ApiError> {
    let rows: Vec<Value> = get_json(&api_url(kind.endpoint())).await?;
    Ok(kind.parse_rows(&rows))
}

/// Kick off a standards run for all tenants
pub async fn run_standards_now() -> Result<RunNowOutcome, ApiError> {
    let response: ResultsResponse = get_json(&api_url(RUN_NOW_PATH)).await?;
    Ok(RunNowOutcome::classify(&response.results))
}

/// Remove the applied standard of a tenant
pub async fn remove_standard(tenant: &TenantKey) -> Result<String, ApiError> {
    let url = api_url_with_query(
        REMOVE_STANDARD_PATH,
        &RemoveStandardQuery {
            id: tenant.as_str(),
        },
    )?;
    let response: ResultsResponse = get_json(&url).await?;
    Ok(response.results)
}

/// Submit an encoded standards payload
pub async fn deploy_standards(payload: &Map<String, Value>) -> Result<String, ApiError> {
    let response: ResultsResponse = post_json(&api_url(DEPLOY_STANDARDS_PATH), payload).await?;
    Ok(response.results)
}

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use codeious_site_core::content::{get_fallback_content, SectionId};
use codeious_site_core::resolve_locale;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Section content routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/page-content", get(page_content))
        .route("/api/sections", get(visible_sections))
        .route("/api/fallback/{section_id}", get(fallback))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageContentQuery {
    section_id: Option<String>,
    locale: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LangQuery {
    pub lang: Option<String>,
}

fn section_param(raw: Option<&str>) -> ApiResult<SectionId> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("sectionId is required".to_string()))?;
    raw.parse::<SectionId>()
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Stored content for one section, `null` when the store has none.
async fn page_content(
    State(state): State<AppState>,
    Query(query): Query<PageContentQuery>,
) -> ApiResult<Json<Value>> {
    let section = section_param(query.section_id.as_deref())?;
    let locale = resolve_locale(query.locale.as_deref());
    let content = state.resolver().get_content(section, locale).await;
    Ok(Json(json!({ "content": content })))
}

/// Visible stored sections, in page order.
async fn visible_sections(State(state): State<AppState>, Query(query): Query<LangQuery>) -> Json<Value> {
    let locale = resolve_locale(query.lang.as_deref());
    let docs = state.resolver().list_visible(locale).await;
    Json(json!({ "locale": locale, "totalDocs": docs.len(), "docs": docs }))
}

/// Bundled catalog copy for one section.
async fn fallback(Path(section_id): Path<String>, Query(query): Query<LangQuery>) -> ApiResult<Json<Value>> {
    let section: SectionId = section_id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("no catalog entry for section `{section_id}`")))?;
    let locale = resolve_locale(query.lang.as_deref());
    let content = get_fallback_content(section, locale)
        .ok_or_else(|| ApiError::NotFound(format!("no catalog entry for section `{section_id}`")))?;
    Ok(Json(json!({ "locale": locale, "content": content })))
}

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use codeious_site_core::content::SectionId;
use codeious_site_core::page::{build_home_page, render_section, HomePage, SectionView};
use codeious_site_core::resolve_locale;

use super::content::LangQuery;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Rendered page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/home", get(home))
        .route("/api/home/{section_id}", get(section))
}

/// Every homepage section, rendered for the requested language.
async fn home(State(state): State<AppState>, Query(query): Query<LangQuery>) -> Json<HomePage> {
    let locale = resolve_locale(query.lang.as_deref());
    Json(build_home_page(state.resolver(), locale).await)
}

/// One rendered section. Hidden sections answer 404.
async fn section(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
    Query(query): Query<LangQuery>,
) -> ApiResult<Json<SectionView>> {
    let section: SectionId = section_id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("unknown section `{section_id}`")))?;
    let locale = resolve_locale(query.lang.as_deref());
    render_section(state.resolver(), section, locale)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("section `{section_id}` is hidden")))
}

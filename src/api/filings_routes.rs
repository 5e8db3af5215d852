//! Filings API Routes
//!
//! - GET /api/filings - Classified, filtered, paginated filings for one CIK
//! - GET /api/health  - Liveness probe

use axum::{
    extract::{RawQuery, State},
    Json,
};
use serde::Serialize;

use super::AppState;
use crate::config::PagingConfig;
use crate::error::FilingsError;
use crate::filings::{FilingQuery, FilingsResponse, PageRequest};

// ============================================================================
// QUERY PARAMETERS
// ============================================================================

/// Query parameters for the filings endpoint.
///
/// Integers arrive as strings so a malformed value can fall back to its
/// default instead of rejecting the request.
#[derive(Debug, Default)]
pub struct FilingsParams {
    pub cik: Option<String>,
    pub group: Option<String>,
    pub year: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl FilingsParams {
    /// Parse a raw query string. The first occurrence of a key wins and
    /// unknown keys are ignored.
    pub fn from_query(raw: Option<&str>) -> Self {
        let mut params = Self::default();
        let Some(raw) = raw else {
            return params;
        };

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let slot = match key.as_ref() {
                "cik" => &mut params.cik,
                "group" => &mut params.group,
                "year" => &mut params.year,
                "page" => &mut params.page,
                "per_page" => &mut params.per_page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// Resolve defaults and clamp pagination
    pub fn resolve(self, paging: &PagingConfig) -> (String, FilingQuery) {
        let cik = self
            .cik
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| paging.default_cik.clone());

        let page = parse_or(self.page.as_deref(), 1);
        let per_page = parse_or(
            self.per_page.as_deref(),
            i64::try_from(paging.default_per_page).unwrap_or(i64::MAX),
        );

        let query = FilingQuery {
            group: self.group,
            year: self.year,
            page: PageRequest::new(page, per_page, paging.max_per_page),
        };
        (cik, query)
    }
}

fn parse_or(value: Option<&str>, default: i64) -> i64 {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::debug!(value = raw, default, "Ignoring malformed integer parameter");
            default
        }),
        None => default,
    }
}

// ============================================================================
// GET /api/filings
// ============================================================================

/// GET /api/filings?cik=320193&group=Annual%20Filings&year=2024&page=1&per_page=10
///
/// Response: QueryResult, or `{data: [], total: 0, page, per_page}` when the
/// company has no recent filings. Failures are `{"error": "..."}` with 500.
pub async fn get_filings(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<FilingsResponse>, FilingsError> {
    let (cik, query) = FilingsParams::from_query(raw.as_deref()).resolve(&state.paging);

    match state.service.browse(&cik, &query).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::warn!(
                cik = %cik,
                upstream_status = e.upstream_status(),
                error = %e,
                "Failed to serve filings"
            );
            Err(e)
        }
    }
}

// ============================================================================
// GET /api/health
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

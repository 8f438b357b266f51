use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use fakeorfact_store::latest_claims;

use crate::AppState;

#[derive(Deserialize)]
pub struct ClaimsQuery {
    before: Option<String>,
}

/// Blank or absent means "now".
fn parse_before(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, chrono::ParseError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => DateTime::parse_from_rfc3339(value).map(|t| Some(t.with_timezone(&Utc))),
    }
}

/// `GET /api/claims?before=<RFC 3339>`
pub async fn api_claims(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ClaimsQuery>,
) -> Response {
    let before = match parse_before(q.before.as_deref()) {
        Ok(before) => before,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                format!("Invalid 'before' timestamp, expected RFC 3339: {e}"),
            )
                .into_response();
        }
    };

    match latest_claims(state.store.as_ref(), before).await {
        Ok(claims) => Json(claims).into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to load claims");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

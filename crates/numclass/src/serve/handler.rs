use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use numclass_core::number::parse_number;
use numclass_core::response::ErrorResult;
use serde::Deserialize;

use super::AppState;
use crate::classify::classify_data;

#[derive(Debug, Deserialize)]
pub struct ClassifyParams {
    number: Option<String>,
}

/// `GET /api/classify-number?number=<value>`
///
/// Invalid, missing or unparsable input is answered with 400 and the
/// percent-decoded value echoed back. Everything else is 200, with the
/// fallback fun fact when the provider fails. A classifier task that dies is
/// the only 500.
pub async fn classify_number(
    State(state): State<AppState>,
    query: Result<Query<ClassifyParams>, QueryRejection>,
) -> Response {
    let raw = match query {
        Ok(Query(params)) => params.number,
        Err(rejection) => {
            log::debug!("Rejected query string: {rejection}");
            None
        }
    };

    let number = match raw.as_deref().map(parse_number) {
        Some(Ok(number)) => number,
        Some(Err(err)) => {
            log::debug!("Rejected input: {err}");
            return bad_request(Some(err.input().to_string()));
        }
        None => {
            log::debug!("Missing number parameter");
            return bad_request(None);
        }
    };

    match classify_data(number, state.facts.as_ref()).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => {
            log::error!("Failed to classify {number}: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResult::new(raw)),
            )
                .into_response()
        }
    }
}

fn bad_request(raw: Option<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResult::new(raw))).into_response()
}

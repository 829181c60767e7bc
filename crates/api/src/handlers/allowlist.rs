use crate::{errors::ApiError, state::AppState};
use alotame_application::use_cases::AllowlistResponse;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use tracing::{debug, info, instrument};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

#[instrument(skip_all, name = "api_get_allowlist")]
pub async fn get_allowlist(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ApiError> {
    let if_none_match = request
        .headers()
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok());

    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    match state.get_allowlist.execute(if_none_match).await? {
        AllowlistResponse::NotModified { etag } => {
            debug!(etag = %etag, remote_addr = %remote_addr, "Allowlist not modified");
            Ok((
                StatusCode::NOT_MODIFIED,
                [(header::CONTENT_TYPE, TEXT_PLAIN)],
            )
                .into_response())
        }
        AllowlistResponse::Content { etag, body } => {
            info!(size = body.len(), remote_addr = %remote_addr, "Served allowlist");

            let mut response = (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, TEXT_PLAIN),
                    (header::CACHE_CONTROL, "no-cache"),
                ],
                body.to_string(),
            )
                .into_response();

            if let Ok(value) = HeaderValue::from_str(&etag) {
                response.headers_mut().insert(header::ETAG, value);
            }

            Ok(response)
        }
    }
}

//! Cross-origin response handling.

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tukku_core::repository::{CatalogSource, ClientDirectory, RevocationStore};

use crate::state::AppState;

/// Answer preflight requests with 204 and stamp CORS headers on every
/// response. Preflights short-circuit here, before routing, so OPTIONS is
/// accepted on every path.
pub async fn cors_middleware<D, R>(
    State(state): State<AppState<D, R>>,
    req: Request,
    next: Next,
) -> Response
where
    D: ClientDirectory + CatalogSource + Clone + Send + Sync + 'static,
    R: RevocationStore + 'static,
{
    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        apply_cors(resp.headers_mut(), &state.cors_allow_origin);
        return resp;
    }

    let mut resp = next.run(req).await;
    apply_cors(resp.headers_mut(), &state.cors_allow_origin);
    resp
}

fn apply_cors(headers: &mut HeaderMap, allow_origin: &str) {
    if let Ok(value) = HeaderValue::from_str(allow_origin) {
        headers.insert("access-control-allow-origin", value);
    }
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET,POST,OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("Content-Type, Authorization"),
    );
}

//! Request handlers — orchestration only.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, header};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tukku_auth::token::AccessTokenClaims;
use tukku_core::error::TukkuError;
use tukku_core::models::client::ClientProfile;
use tukku_core::models::product::Product;
use tukku_core::pricing;
use tukku_core::repository::{CatalogSource, ClientDirectory, RevocationStore};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Summary used for profiles that do not carry one.
const DEFAULT_SUMMARY: &str = "Registered wholesale client.";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub code: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub client_id: String,
    pub client_name: String,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    /// Seconds since process start, two decimals.
    pub uptime: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    pub id: String,
    pub name: String,
    pub price_multiplier: Decimal,
    pub stock_factor: Decimal,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct ClientsResponse {
    pub clients: Vec<ClientSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub client_id: String,
    pub client_name: String,
    pub price_multiplier: Decimal,
    pub stock_factor: Decimal,
    pub description: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub products: Vec<Product>,
    pub client_name: String,
}

impl From<ClientProfile> for ClientSummary {
    fn from(profile: ClientProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.display_name,
            price_multiplier: profile.price_multiplier,
            stock_factor: profile.stock_factor,
            description: profile.description,
        }
    }
}

pub async fn health<D, R>(State(state): State<AppState<D, R>>) -> Json<HealthResponse>
where
    D: ClientDirectory + CatalogSource + Clone + Send + Sync + 'static,
    R: RevocationStore + 'static,
{
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
        uptime: format!("{:.2}", state.started_at.elapsed().as_secs_f64()),
    })
}

pub async fn clients<D, R>(
    State(state): State<AppState<D, R>>,
) -> ApiResult<Json<ClientsResponse>>
where
    D: ClientDirectory + CatalogSource + Clone + Send + Sync + 'static,
    R: RevocationStore + 'static,
{
    let profiles = state.registry.list_profiles().await?;
    let clients = profiles.into_iter().map(ClientSummary::from).collect();
    Ok(Json(ClientsResponse { clients }))
}

pub async fn login<D, R>(
    State(state): State<AppState<D, R>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>>
where
    D: ClientDirectory + CatalogSource + Clone + Send + Sync + 'static,
    R: RevocationStore + 'static,
{
    let code = body
        .ok()
        .and_then(|Json(req)| req.code)
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .ok_or_else(|| {
            ApiError(TukkuError::InvalidInput {
                message: "Please enter an access code.".into(),
            })
        })?;

    let out = state.auth.login(&code).await?;
    Ok(Json(LoginResponse {
        token: out.token,
        client_id: out.client_id,
        client_name: out.client_name,
    }))
}

pub async fn logout<D, R>(
    State(state): State<AppState<D, R>>,
    headers: HeaderMap,
) -> ApiResult<Json<LogoutResponse>>
where
    D: ClientDirectory + CatalogSource + Clone + Send + Sync + 'static,
    R: RevocationStore + 'static,
{
    // A missing header is a malformed request here, not a failed login.
    let token = bearer_token(&headers).ok_or_else(|| {
        ApiError(TukkuError::InvalidInput {
            message: "Missing token".into(),
        })
    })?;

    state.auth.logout(token).await?;
    Ok(Json(LogoutResponse {
        message: "Logout successful",
    }))
}

pub async fn profile<D, R>(
    State(state): State<AppState<D, R>>,
    headers: HeaderMap,
) -> ApiResult<Json<ProfileResponse>>
where
    D: ClientDirectory + CatalogSource + Clone + Send + Sync + 'static,
    R: RevocationStore + 'static,
{
    let claims = authenticate(&state, &headers).await?;
    let profile = state.registry.get_profile(&claims.client_id).await?;
    Ok(Json(ProfileResponse {
        client_id: profile.id,
        client_name: profile.display_name,
        price_multiplier: profile.price_multiplier,
        stock_factor: profile.stock_factor,
        description: profile.description,
        summary: profile
            .summary
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
    }))
}

pub async fn products<D, R>(
    State(state): State<AppState<D, R>>,
    headers: HeaderMap,
) -> ApiResult<Json<ProductsResponse>>
where
    D: ClientDirectory + CatalogSource + Clone + Send + Sync + 'static,
    R: RevocationStore + 'static,
{
    let claims = authenticate(&state, &headers).await?;
    let profile = state.registry.get_profile(&claims.client_id).await?;
    let rows = state.registry.load_catalog(&claims.client_id).await?;
    let products = pricing::compute_catalog(&profile, &rows);
    Ok(Json(ProductsResponse {
        products,
        client_name: profile.display_name,
    }))
}

async fn authenticate<D, R>(
    state: &AppState<D, R>,
    headers: &HeaderMap,
) -> ApiResult<AccessTokenClaims>
where
    D: ClientDirectory + CatalogSource + Clone + Send + Sync + 'static,
    R: RevocationStore + 'static,
{
    let token = bearer_token(headers).ok_or_else(|| {
        ApiError(TukkuError::AuthenticationFailed {
            reason: "missing bearer token".into(),
        })
    })?;
    state.auth.authenticate(token).await.map_err(ApiError)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

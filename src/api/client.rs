//! HTTP API Client
//!
//! Functions for communicating with the SocialHub REST API. Every call is a
//! single attempt with no retry or timeout; the backend owns all validation
//! beyond the trivial client-side checks.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::state::global::{
    AiOperation, LinkedAccount, MediaType, Platform, Product, ProductDraft, UsageStats,
};
use crate::state::session::{self, User};

/// Default API base URL, overridable at compile time.
pub const DEFAULT_API_BASE: &str = match option_env!("SOCIALHUB_API_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Fallback message when the backend gives no `detail` or never answers.
pub const GENERIC_DETAIL: &str = "Something went wrong. Please try again.";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("socialhub_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Errors ============

/// Uniform request failure surfaced to the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    Http { status: u16, detail: String },
    /// The request produced no response (or an unreadable one).
    Network(String),
}

impl ApiError {
    /// Human-readable message for inline display. Network failures collapse
    /// to the generic fallback; the transport detail stays in `Debug`.
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Http { detail, .. } => detail,
            ApiError::Network(_) => GENERIC_DETAIL,
        }
    }

    /// True when the backend itself rejected the request.
    pub fn is_http(&self) -> bool {
        matches!(self, ApiError::Http { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.detail())
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Extract the backend's `detail` message from a non-2xx response.
async fn rejection(response: Response) -> ApiError {
    let status = response.status();
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| GENERIC_DETAIL.to_string());
    ApiError::Http { status, detail }
}

fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Attach the bearer credential when one is stored.
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

// ============ Response Types ============

/// Login / signup response: a fresh credential plus the server's user.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, serde::Deserialize)]
struct PlatformListResponse {
    platforms: Vec<Platform>,
}

#[derive(Debug, serde::Deserialize)]
struct AccountListResponse {
    accounts: Vec<LinkedAccount>,
}

#[derive(Debug, serde::Deserialize)]
struct ProductListResponse {
    products: Vec<Product>,
}

#[derive(Debug, serde::Deserialize)]
struct AiEditResponse {
    job_id: String,
}

/// The joined result of the five dashboard reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub platforms: Vec<Platform>,
    pub accounts: Vec<LinkedAccount>,
    pub stats: UsageStats,
    pub profile: User,
    pub products: Vec<Product>,
}

// ============ API Functions ============

/// Fetch the authenticated user's profile
pub async fn fetch_profile() -> Result<User, ApiError> {
    let api_base = get_api_base();

    let response = authorized(Request::get(&format!("{}/me", api_base)))
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    response.json().await.map_err(network)
}

/// Sign in with email and password
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct LoginRequest<'a> {
        email: &'a str,
        password: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/login", api_base))
        .json(&LoginRequest { email, password })
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    response.json().await.map_err(network)
}

/// Create an account and sign in
pub async fn signup(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct SignupRequest<'a> {
        name: &'a str,
        email: &'a str,
        password: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/auth/signup", api_base))
        .json(&SignupRequest {
            name,
            email,
            password,
        })
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    response.json().await.map_err(network)
}

/// Fetch the platform catalog (no credential required)
pub async fn fetch_platforms() -> Result<Vec<Platform>, ApiError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/platforms", api_base))
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    let result: PlatformListResponse = response.json().await.map_err(network)?;

    Ok(result.platforms)
}

/// Fetch the user's linked accounts
pub async fn fetch_accounts() -> Result<Vec<LinkedAccount>, ApiError> {
    let api_base = get_api_base();

    let response = authorized(Request::get(&format!("{}/accounts", api_base)))
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    let result: AccountListResponse = response.json().await.map_err(network)?;

    Ok(result.accounts)
}

/// Link a platform account
pub async fn link_account(platform: &str, username: &str) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct LinkRequest<'a> {
        platform: &'a str,
        username: &'a str,
    }

    let api_base = get_api_base();

    let response = authorized(Request::post(&format!("{}/accounts", api_base)))
        .json(&LinkRequest { platform, username })
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    Ok(())
}

/// Fetch today's upload usage
pub async fn fetch_upload_stats() -> Result<UsageStats, ApiError> {
    let api_base = get_api_base();

    let response = authorized(Request::get(&format!("{}/uploads/stats", api_base)))
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    response.json().await.map_err(network)
}

/// Queue an upload targeting the selected platforms
pub async fn queue_upload(
    media_type: MediaType,
    caption: &str,
    platforms: &[String],
) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct UploadRequest<'a> {
        media_type: MediaType,
        caption: &'a str,
        platforms: &'a [String],
    }

    let api_base = get_api_base();

    let response = authorized(Request::post(&format!("{}/upload", api_base)))
        .json(&UploadRequest {
            media_type,
            caption,
            platforms,
        })
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    Ok(())
}

/// Fetch the user's product catalog
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let api_base = get_api_base();

    let response = authorized(Request::get(&format!("{}/products", api_base)))
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    let result: ProductListResponse = response.json().await.map_err(network)?;

    Ok(result.products)
}

/// Create a product from a draft
pub async fn create_product(draft: &ProductDraft) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = authorized(Request::post(&format!("{}/products", api_base)))
        .json(draft)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    Ok(())
}

/// Update an existing product with the draft's fields
pub async fn update_product(id: u64, draft: &ProductDraft) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = authorized(Request::put(&format!("{}/products/{}", api_base, id)))
        .json(draft)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    Ok(())
}

/// Delete a product
pub async fn delete_product(id: u64) -> Result<(), ApiError> {
    let api_base = get_api_base();

    let response = authorized(Request::delete(&format!("{}/products/{}", api_base, id)))
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    Ok(())
}

/// Create an order for a product (simulated payment, fire-and-forget)
pub async fn create_order(product_id: u64, buyer_email: &str) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct OrderRequest<'a> {
        product_id: u64,
        buyer_email: &'a str,
    }

    let api_base = get_api_base();

    let response = authorized(Request::post(&format!("{}/orders", api_base)))
        .json(&OrderRequest {
            product_id,
            buyer_email,
        })
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    Ok(())
}

/// Submit an AI video-edit job; returns the backend's job identifier
pub async fn start_ai_edit(
    source_url: Option<&str>,
    operations: &[AiOperation],
) -> Result<String, ApiError> {
    #[derive(serde::Serialize)]
    struct AiEditRequest<'a> {
        // Serialized as null when absent; the backend expects the field
        source_url: Option<&'a str>,
        operations: &'a [AiOperation],
    }

    let api_base = get_api_base();

    let response = authorized(Request::post(&format!("{}/ai/edit", api_base)))
        .json(&AiEditRequest {
            source_url,
            operations,
        })
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(rejection(response).await);
    }

    let result: AiEditResponse = response.json().await.map_err(network)?;

    Ok(result.job_id)
}

/// Issue the five dashboard reads concurrently and join them all-or-nothing.
/// No result slot is committed unless every read succeeds.
pub async fn fetch_snapshot() -> Result<Snapshot, ApiError> {
    let (platforms, accounts, stats, profile, products) = futures::try_join!(
        fetch_platforms(),
        fetch_accounts(),
        fetch_upload_stats(),
        fetch_profile(),
        fetch_products(),
    )?;

    Ok(Snapshot {
        platforms,
        accounts,
        stats,
        profile,
        products,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_surfaces_backend_detail() {
        let err = ApiError::Http {
            status: 403,
            detail: "Daily upload limit reached".to_string(),
        };
        assert_eq!(err.detail(), "Daily upload limit reached");
        assert!(err.is_http());
    }

    #[test]
    fn network_error_surfaces_generic_detail() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.detail(), GENERIC_DETAIL);
        assert_eq!(err.to_string(), GENERIC_DETAIL);
        assert!(!err.is_http());
    }

    #[test]
    fn auth_response_parses_token_and_user() {
        let body = r#"{"token":"T","user":{"id":1,"name":"A","email":"a@b.com","plan":"free"}}"#;
        let auth: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(auth.token, "T");
        assert_eq!(auth.user.email, "a@b.com");
    }

    #[test]
    fn error_body_detail_is_optional() {
        let with: ErrorBody = serde_json::from_str(r#"{"detail":"nope"}"#).unwrap();
        assert_eq!(with.detail.as_deref(), Some("nope"));

        let without: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(without.detail.is_none());
    }
}

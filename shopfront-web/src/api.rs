use once_cell::unsync::OnceCell;
use reqwest::{Client, StatusCode};
use shared::models::{CartFetchError, CartLine, CartResponse, LoginRequest, LoginResponse};

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<ShopClient> = OnceCell::new();
}

/// Lightweight API client for shop backend interactions.
#[derive(Clone, Debug)]
pub struct ShopClient {
    base_url: String,
    client: Client,
}

impl ShopClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fetch the current user's cart lines.
    ///
    /// One GET with a bearer token, no query parameters, no body. Non-2xx
    /// statuses are treated uniformly as a backend failure carrying the raw
    /// response body.
    pub async fn fetch_cart(&self, token: &str) -> Result<Vec<CartLine>, CartFetchError> {
        let response = self
            .client
            .get(self.api_url("cart"))
            .header("Content-Type", "application/json")
            .bearer_auth(token)
            .send()
            .await
            .map_err(|err| CartFetchError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| CartFetchError::Transport(err.to_string()))?;
        interpret_cart_response(status, &body)
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, reqwest::Error> {
        let response = self
            .client
            .post(self.api_url("auth/login"))
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }
}

/// Map a cart response's status and body text to cart lines.
///
/// A missing `cartItems` field is an empty cart; a body that fails to parse
/// at all surfaces the parser's own message.
pub(crate) fn interpret_cart_response(
    status: StatusCode,
    body: &str,
) -> Result<Vec<CartLine>, CartFetchError> {
    if !status.is_success() {
        return Err(CartFetchError::Backend(body.to_string()));
    }
    let parsed: CartResponse =
        serde_json::from_str(body).map_err(|err| CartFetchError::Transport(err.to_string()))?;
    Ok(parsed.cart_items)
}

use reqwest::{header::AUTHORIZATION, Client, Method, Request};
use rust_i18n::t;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::types::ApiError, config, state::session::SessionStore, utils::navigation,
};

#[cfg(all(test, not(target_arch = "wasm32")))]
use std::sync::{Arc, Mutex, OnceLock};

/// Status and body text of a finished request.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn get_auth_header(&self) -> Result<String, ApiError> {
        match self.session.token() {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => {
                navigation::redirect_to_login_if_needed();
                Err(ApiError::unauthorized(t!("errors.session_expired")))
            }
        }
    }

    fn handle_unauthorized_status(&self, status: u16) {
        if status == 401 {
            log::warn!("request rejected with 401, clearing session");
            self.session.clear();
            navigation::redirect_to_login_if_needed();
        }
    }

    async fn execute<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        authenticated: bool,
    ) -> Result<RawResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let base_url = self.resolved_base_url().await;
        let mut builder = self
            .client
            .request(method, format!("{}{}", base_url, path));
        if authenticated {
            builder = builder.header(AUTHORIZATION, self.get_auth_header()?);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let request = builder
            .build()
            .map_err(|e| ApiError::network(format!("Invalid request: {}", e)))?;

        let response = dispatch(&self.client, request).await?;
        if authenticated {
            self.handle_unauthorized_status(response.status);
        }
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(
                response.status,
                &response.body,
                &t!("errors.generic"),
            ))
        }
    }

    /// Authenticated request whose response body is decoded as `T`.
    pub(crate) async fn request_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(method, path, body, true).await?;
        decode_body(&response.body)
    }

    /// Authenticated request whose body, if any, is ignored.
    pub(crate) async fn request_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.execute(method, path, body, true).await.map(|_| ())
    }

    /// Request sent without a bearer token, such as the login call.
    pub(crate) async fn request_public<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(method, path, body, false).await?;
        decode_body(&response.body)
    }
}

/// Single exit point for every outgoing request.
pub(crate) async fn dispatch(client: &Client, request: Request) -> Result<RawResponse, ApiError> {
    let method = request.method().clone();
    let url = request.url().to_string();

    #[cfg(all(test, not(target_arch = "wasm32")))]
    if let Some(responder) = find_mock(&url) {
        let mocked = responder.respond(&request)?;
        return Ok(RawResponse {
            status: mocked.status,
            body: mocked.body,
        });
    }

    let response = client.execute(request).await.map_err(|e| {
        log::error!("{} {} failed: {}", method, url, e);
        ApiError::network(t!("errors.network"))
    })?;
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    log::debug!("{} {} -> {}", method, url, status);
    Ok(RawResponse { status, body })
}

pub(crate) const NO_BODY: Option<&()> = None;

pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        log::error!("unexpected response body: {}", e);
        ApiError::network(t!("errors.invalid_response"))
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
#[derive(Clone, Debug)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

#[cfg(all(test, not(target_arch = "wasm32")))]
impl MockResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub trait TestResponder: Send + Sync {
    fn respond(&self, request: &Request) -> Result<MockResponse, ApiError>;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
type MockRegistry = Mutex<Vec<(String, Arc<dyn TestResponder>)>>;

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mock_registry() -> &'static MockRegistry {
    static MOCKS: OnceLock<MockRegistry> = OnceLock::new();
    MOCKS.get_or_init(|| Mutex::new(Vec::new()))
}

/// Routes every request whose URL starts with `base_url` to `responder`.
#[cfg(all(test, not(target_arch = "wasm32")))]
pub fn register_mock(base_url: String, responder: Arc<dyn TestResponder>) {
    if let Ok(mut mocks) = mock_registry().lock() {
        mocks.retain(|(base, _)| base != &base_url);
        mocks.push((base_url, responder));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn find_mock(url: &str) -> Option<Arc<dyn TestResponder>> {
    let mocks = mock_registry().lock().ok()?;
    mocks
        .iter()
        .filter(|(base, _)| url.starts_with(base.as_str()))
        .max_by_key(|(base, _)| base.len())
        .map(|(_, responder)| responder.clone())
}

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use reqwest::Method;
use rust_i18n::t;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse},
};
use crate::{
    state::session::{Role, Session},
    utils::masks::digits_only,
};

/// Claim names the backend may use for the role inside the JWT.
const ROLE_CLAIMS: [&str; 2] = [
    "role",
    "http://schemas.microsoft.com/ws/2008/06/identity/claims/role",
];

impl ApiClient {
    /// Authenticates and persists the session. Nothing is stored on failure.
    pub async fn login(&self, cpf: &str, password: &str) -> Result<Session, ApiError> {
        let request = LoginRequest {
            cpf: digits_only(cpf),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .request_public(Method::POST, "/Auth/login", Some(&request))
            .await?;
        if response.token.trim().is_empty() {
            return Err(ApiError::network(t!("errors.invalid_response")));
        }

        let role = response
            .role
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(Role::parse)
            .or_else(|| role_from_token(&response.token))
            .unwrap_or(Role::Seller);
        let session = Session {
            token: response.token,
            seller_id: response.seller_id,
            seller_name: response.name,
            role,
        };
        self.session().save(&session).map_err(ApiError::network)?;
        log::info!("signed in as {}", session.role.as_str());
        Ok(session)
    }

    pub fn logout(&self) {
        self.session().clear();
    }
}

fn role_from_token(token: &str) -> Option<Role> {
    let payload = token.split('.').nth(1)?;
    let decoded = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Value = serde_json::from_slice(&decoded).ok()?;
    ROLE_CLAIMS
        .iter()
        .filter_map(|claim| claims.get(*claim))
        .find_map(|value| match value {
            Value::String(role) => Some(Role::parse(role)),
            Value::Array(roles) => roles
                .iter()
                .filter_map(Value::as_str)
                .map(Role::parse)
                .max_by_key(|role| *role == Role::Admin),
            _ => None,
        })
}

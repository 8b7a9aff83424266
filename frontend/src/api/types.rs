use leptos::*;
use rust_i18n::t;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::utils::geolocation::GeolocationError;

/// Backend ids arrive as strings or numbers depending on the endpoint.
fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "unexpected id value: {}",
            other
        ))),
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub cpf: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, deserialize_with = "id_from_any")]
    pub seller_id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub cpf: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub role: String,
}

/// Body of `POST /Seller` and `PUT /Seller/:id`. `cpf` carries digits only
/// and is left out of updates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SellerPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub zip_code: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub street: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub neighborhood: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub state: String,
}

impl Address {
    /// `Rua A, 10 - Apto 2, Centro, São Paulo - SP`
    pub fn display_line(&self) -> String {
        let mut line = self.street.trim().to_string();
        if !self.number.trim().is_empty() {
            line.push_str(&format!(", {}", self.number.trim()));
        }
        if let Some(complement) = self.complement.as_deref().map(str::trim) {
            if !complement.is_empty() {
                line.push_str(&format!(" - {}", complement));
            }
        }
        let locality: Vec<&str> = [self.neighborhood.trim(), self.city.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        if !locality.is_empty() {
            if !line.is_empty() {
                line.push_str(", ");
            }
            line.push_str(&locality.join(", "));
        }
        if !self.state.trim().is_empty() {
            line.push_str(&format!(" - {}", self.state.trim()));
        }
        line
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub company_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub cnpj: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// Body of `POST /Customer` and `PUT /Customer/:id`. `cnpj` carries digits only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub company_name: String,
    pub cnpj: String,
    pub address: Address,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub customer_id: String,
    pub seller_id: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutRequest {
    pub seller_id: String,
    pub customer_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub summary_check_out: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorKind {
    Network,
    Validation,
    Unauthorized,
    Geolocation,
}

/// The single error shape every service call returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}

impl From<GeolocationError> for ApiError {
    fn from(error: GeolocationError) -> Self {
        ApiError::geolocation(t!(error.i18n_key()).to_string())
    }
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: msg.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            message: msg.into(),
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: msg.into(),
        }
    }

    pub fn geolocation(msg: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Geolocation,
            message: msg.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    /// Builds the error for a non-success response. The message comes from a
    /// `message` field, a JSON string body or a short plain-text body; any
    /// other shape falls back to `fallback`.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = server_message(body).unwrap_or_else(|| fallback.to_string());
        if status == 401 {
            Self::unauthorized(message)
        } else {
            Self::network(message)
        }
    }
}

const MAX_PLAIN_TEXT_MESSAGE: usize = 300;

fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => ["message", "error", "title"]
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(|value| value.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        Ok(Value::String(s)) => Some(s).filter(|s| !s.trim().is_empty()),
        Ok(_) => None,
        Err(_) => {
            let looks_like_markup = trimmed.starts_with('<');
            if looks_like_markup || trimmed.len() > MAX_PLAIN_TEXT_MESSAGE {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

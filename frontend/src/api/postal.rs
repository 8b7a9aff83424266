use reqwest::{Client, Method};
use rust_i18n::t;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{
    client::{decode_body, dispatch},
    types::ApiError,
};
use crate::{config, utils::masks};

/// ViaCEP reports misses as `"erro": true`, sometimes as the string `"true"`.
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(flag)) => flag,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    })
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PostalAddress {
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub erro: bool,
}

/// Public postal-code lookup; no session involved.
#[derive(Clone)]
pub struct PostalClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for PostalClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PostalClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_config().await.postal_lookup_url,
        }
    }

    /// `Ok(None)` when the code is incomplete or unknown.
    pub async fn lookup(&self, cep: &str) -> Result<Option<PostalAddress>, ApiError> {
        let digits = masks::digits_only(cep);
        if digits.len() != masks::CEP_DIGITS {
            return Ok(None);
        }
        let url = format!("{}/{}/json/", self.resolved_base_url().await, digits);
        let request = self
            .client
            .request(Method::GET, url)
            .build()
            .map_err(|e| ApiError::network(format!("Invalid request: {}", e)))?;
        let response = dispatch(&self.client, request).await?;
        if !response.is_success() {
            return Err(ApiError::from_response(
                response.status,
                &response.body,
                &t!("errors.postal_lookup"),
            ));
        }
        let address: PostalAddress = decode_body(&response.body)?;
        Ok(Some(address).filter(|address| !address.erro))
    }
}

use reqwest::Method;

use super::{
    client::{ApiClient, NO_BODY},
    types::{ApiError, Customer, CustomerPayload},
};

impl ApiClient {
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.request_json(Method::GET, "/Customer", NO_BODY).await
    }

    pub async fn get_customer(&self, id: &str) -> Result<Customer, ApiError> {
        self.request_json(Method::GET, &format!("/Customer/{}", id), NO_BODY)
            .await
    }

    pub async fn create_customer(&self, payload: &CustomerPayload) -> Result<(), ApiError> {
        self.request_unit(Method::POST, "/Customer", Some(payload))
            .await
    }

    pub async fn update_customer(
        &self,
        id: &str,
        payload: &CustomerPayload,
    ) -> Result<(), ApiError> {
        self.request_unit(Method::PUT, &format!("/Customer/{}", id), Some(payload))
            .await
    }

    pub async fn delete_customer(&self, id: &str) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, &format!("/Customer/{}", id), NO_BODY)
            .await
    }
}

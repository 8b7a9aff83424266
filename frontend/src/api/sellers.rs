use reqwest::Method;

use super::{
    client::{ApiClient, NO_BODY},
    types::{ApiError, Seller, SellerPayload},
};

impl ApiClient {
    pub async fn list_sellers(&self) -> Result<Vec<Seller>, ApiError> {
        self.request_json(Method::GET, "/Seller", NO_BODY).await
    }

    pub async fn get_seller(&self, id: &str) -> Result<Seller, ApiError> {
        self.request_json(Method::GET, &format!("/Seller/{}", id), NO_BODY)
            .await
    }

    pub async fn create_seller(&self, payload: &SellerPayload) -> Result<(), ApiError> {
        self.request_unit(Method::POST, "/Seller", Some(payload))
            .await
    }

    pub async fn update_seller(&self, id: &str, payload: &SellerPayload) -> Result<(), ApiError> {
        self.request_unit(Method::PUT, &format!("/Seller/{}", id), Some(payload))
            .await
    }

    pub async fn delete_seller(&self, id: &str) -> Result<(), ApiError> {
        self.request_unit(Method::DELETE, &format!("/Seller/{}", id), NO_BODY)
            .await
    }
}

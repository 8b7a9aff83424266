use crate::api::{ApiClient, ApiError, Seller, SellerPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminSellersRepository {
    client: Rc<ApiClient>,
}

impl AdminSellersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_sellers(&self) -> Result<Vec<Seller>, ApiError> {
        self.client.list_sellers().await
    }

    pub async fn fetch_seller(&self, id: &str) -> Result<Seller, ApiError> {
        self.client.get_seller(id).await
    }

    pub async fn create_seller(&self, payload: SellerPayload) -> Result<(), ApiError> {
        self.client.create_seller(&payload).await
    }

    pub async fn update_seller(&self, id: &str, payload: SellerPayload) -> Result<(), ApiError> {
        self.client.update_seller(id, &payload).await
    }

    pub async fn delete_seller(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_seller(id).await
    }
}

use crate::api::{ApiClient, ApiError, CheckInRequest, CheckOutRequest, Customer};
use std::rc::Rc;

#[derive(Clone)]
pub struct SellerDashboardRepository {
    client: Rc<ApiClient>,
}

impl SellerDashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn fetch_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.client.list_customers().await
    }

    pub async fn check_in(&self, request: CheckInRequest) -> Result<(), ApiError> {
        self.client.check_in(&request).await
    }

    pub async fn check_out(&self, request: CheckOutRequest) -> Result<(), ApiError> {
        self.client.check_out(&request).await
    }
}

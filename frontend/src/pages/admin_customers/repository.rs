use crate::api::{ApiClient, ApiError, Customer, CustomerPayload, PostalAddress, PostalClient};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminCustomersRepository {
    client: Rc<ApiClient>,
    postal: PostalClient,
}

impl AdminCustomersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self::new_with_clients(client, PostalClient::new())
    }

    pub fn new_with_clients(client: Rc<ApiClient>, postal: PostalClient) -> Self {
        Self { client, postal }
    }

    pub async fn fetch_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.client.list_customers().await
    }

    pub async fn fetch_customer(&self, id: &str) -> Result<Customer, ApiError> {
        self.client.get_customer(id).await
    }

    pub async fn create_customer(&self, payload: CustomerPayload) -> Result<(), ApiError> {
        self.client.create_customer(&payload).await
    }

    pub async fn update_customer(&self, id: &str, payload: CustomerPayload) -> Result<(), ApiError> {
        self.client.update_customer(id, &payload).await
    }

    pub async fn delete_customer(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete_customer(id).await
    }

    pub async fn lookup_postal_code(&self, cep: &str) -> Result<Option<PostalAddress>, ApiError> {
        self.postal.lookup(cep).await
    }
}

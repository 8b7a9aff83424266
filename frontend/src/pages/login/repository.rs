use crate::api::{ApiClient, ApiError, LoginRequest};
use crate::state::session::Session;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<Session, ApiError> {
        self.client.login(&request.cpf, &request.password).await
    }

    pub fn logout(&self) {
        self.client.logout();
    }
}

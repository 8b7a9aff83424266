use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, CheckInRequest, CheckOutRequest},
};

impl ApiClient {
    pub async fn check_in(&self, request: &CheckInRequest) -> Result<(), ApiError> {
        self.request_unit(Method::POST, "/Visit/checkin", Some(request))
            .await
    }

    pub async fn check_out(&self, request: &CheckOutRequest) -> Result<(), ApiError> {
        self.request_unit(Method::POST, "/Visit/checkout", Some(request))
            .await
    }
}

use crate::api::{ApiError, LoginRequest};
use crate::utils::masks::{digits_only, CPF_DIGITS};
use rust_i18n::t;

/// Checks the form and builds the request with a digits-only CPF.
pub fn validate_credentials(cpf: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let digits = digits_only(cpf);
    if digits.is_empty() {
        return Err(ApiError::validation(t!("login.cpf_required")));
    }
    if digits.len() != CPF_DIGITS {
        return Err(ApiError::validation(t!("login.cpf_invalid")));
    }
    if password.is_empty() {
        return Err(ApiError::validation(t!("login.password_required")));
    }
    Ok(LoginRequest {
        cpf: digits,
        password: password.to_string(),
    })
}

use crate::api::ApiError;
use rust_i18n::t;

pub const CHECK_OUT_TIMEOUT_MS: u32 = 10_000;

/// The check-out summary is mandatory; blank text never reaches the network.
pub fn validate_summary(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation(t!("visit.summary_required")))
    } else {
        Ok(trimmed.to_string())
    }
}

/// `city - state`, skipping whichever part is missing.
pub fn locality(city: &str, state: &str) -> String {
    match (city.trim(), state.trim()) {
        ("", "") => String::new(),
        (city, "") => city.to_string(),
        ("", state) => state.to_string(),
        (city, state) => format!("{} - {}", city, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorKind;

    #[test]
    fn blank_summary_is_rejected() {
        for raw in ["", "   ", "\n\t"] {
            assert_eq!(
                validate_summary(raw).unwrap_err().kind,
                ApiErrorKind::Validation
            );
        }
        assert_eq!(validate_summary("  pedido fechado ").unwrap(), "pedido fechado");
    }

    #[test]
    fn locality_skips_missing_parts() {
        assert_eq!(locality("São Paulo", "SP"), "São Paulo - SP");
        assert_eq!(locality("", "SP"), "SP");
        assert_eq!(locality(" ", " "), "");
    }
}

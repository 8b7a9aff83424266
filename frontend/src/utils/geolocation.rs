use async_trait::async_trait;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionRequest {
    pub high_accuracy: bool,
    pub timeout_ms: Option<u32>,
}

impl PositionRequest {
    pub const fn high_accuracy() -> Self {
        Self {
            high_accuracy: true,
            timeout_ms: None,
        }
    }

    pub const fn with_timeout(self, timeout_ms: u32) -> Self {
        Self {
            timeout_ms: Some(timeout_ms),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeolocationError {
    #[error("geolocation is not supported on this device")]
    Unsupported,
    #[error("geolocation permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("position request timed out")]
    Timeout,
}

impl GeolocationError {
    /// Maps `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => GeolocationError::PermissionDenied,
            3 => GeolocationError::Timeout,
            _ => GeolocationError::Unavailable,
        }
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            GeolocationError::Unsupported => "geo.unsupported",
            GeolocationError::PermissionDenied => "geo.denied",
            GeolocationError::Unavailable => "geo.unavailable",
            GeolocationError::Timeout => "geo.timeout",
        }
    }
}

/// One-shot device position query.
#[async_trait(?Send)]
pub trait PositionProvider {
    async fn current_position(
        &self,
        request: PositionRequest,
    ) -> Result<Coordinates, GeolocationError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserGeolocation;

#[async_trait(?Send)]
impl PositionProvider for BrowserGeolocation {
    async fn current_position(
        &self,
        request: PositionRequest,
    ) -> Result<Coordinates, GeolocationError> {
        let geolocation = web_sys::window()
            .ok_or(GeolocationError::Unsupported)?
            .navigator()
            .geolocation()
            .map_err(|_| GeolocationError::Unsupported)?;

        let options = web_sys::PositionOptions::new();
        options.set_enable_high_accuracy(request.high_accuracy);
        if let Some(timeout) = request.timeout_ms {
            options.set_timeout(timeout);
        }

        let mut query_failed = false;
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            if geolocation
                .get_current_position_with_error_callback_and_options(
                    &resolve,
                    Some(&reject),
                    &options,
                )
                .is_err()
            {
                query_failed = true;
            }
        });
        if query_failed {
            return Err(GeolocationError::Unavailable);
        }

        match JsFuture::from(promise).await {
            Ok(value) => {
                let position: web_sys::Position = value.unchecked_into();
                let coords = position.coords();
                Ok(Coordinates {
                    latitude: coords.latitude(),
                    longitude: coords.longitude(),
                })
            }
            Err(err) => {
                let error: web_sys::PositionError = err.unchecked_into();
                let mapped = GeolocationError::from_code(error.code());
                log::warn!("geolocation failed: {} ({})", mapped, error.message());
                Err(mapped)
            }
        }
    }
}

/// The provider installed in context, or the browser's own.
pub fn use_position_provider() -> Rc<dyn PositionProvider> {
    leptos::use_context::<Rc<dyn PositionProvider>>()
        .unwrap_or_else(|| Rc::new(BrowserGeolocation))
}

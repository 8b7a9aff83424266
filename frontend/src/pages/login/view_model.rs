use super::utils;
use crate::{
    api::{ApiError, LoginRequest},
    components::toast::use_toasts,
    state::{auth, session::Session},
    utils::{
        geolocation::{GeolocationError, PositionProvider, PositionRequest},
        masks, navigation,
    },
};
use leptos::*;
use rust_i18n::t;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub cpf: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<Session, ApiError>>,
}

impl LoginViewModel {
    pub fn set_cpf(&self, raw: String) {
        self.cpf.set(masks::mask_cpf(&raw));
    }

    /// Validates and dispatches. Returns whether a request went out.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        match utils::validate_credentials(&self.cpf.get_untracked(), &self.password.get_untracked()) {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }
}

/// Asks for one position fix so the permission prompt shows up before the
/// seller reaches a customer.
pub async fn probe_location<P>(provider: &P) -> Result<(), GeolocationError>
where
    P: PositionProvider + ?Sized,
{
    provider
        .current_position(PositionRequest::high_accuracy())
        .await
        .map(|_| ())
}

pub fn use_login_view_model() -> LoginViewModel {
    let cpf = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let toasts = use_toasts();
    let navigate = navigation::use_navigator();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => {
                    error.set(None);
                    password.set(String::new());
                    toasts.success(
                        t!("login.welcome", name = session.seller_name).to_string(),
                        "",
                    );
                    navigate.call(auth::landing_route(session.role).to_string());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    #[cfg(target_arch = "wasm32")]
    {
        let provider = crate::utils::geolocation::use_position_provider();
        spawn_local(async move {
            if let Err(err) = probe_location(provider.as_ref()).await {
                log::warn!("location probe failed: {}", err);
                toasts.warning(t!("login.gps_required_title"), t!("login.gps_required"));
            }
        });
    }

    LoginViewModel {
        cpf,
        password,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiErrorKind;
    use crate::test_support::helpers::FixedPosition;
    use crate::test_support::ssr::with_runtime;
    use crate::utils::geolocation::use_position_provider;
    use std::rc::Rc;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.cpf.get().is_empty());
        });
    }

    #[test]
    fn cpf_input_is_masked_progressively() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.set_cpf("1234".into());
            assert_eq!(vm.cpf.get(), "123.4");
            vm.set_cpf("123.4567890".into());
            assert_eq!(vm.cpf.get(), "123.456.789-0");
        });
    }

    #[test]
    fn invalid_form_does_not_dispatch() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.set_cpf("123".into());
            vm.password.set("secret".into());
            assert!(!vm.submit());
            assert_eq!(vm.error.get().map(|e| e.kind), Some(ApiErrorKind::Validation));
            assert_eq!(vm.login_action.version().get(), 0);
        });
    }

    #[tokio::test]
    async fn probe_reports_denied_permission() {
        let denied = FixedPosition::failing(GeolocationError::PermissionDenied);
        assert_eq!(
            probe_location(&denied).await,
            Err(GeolocationError::PermissionDenied)
        );
        let granted = FixedPosition::at(-23.5, -46.6);
        assert!(probe_location(&granted).await.is_ok());
        assert!(granted.last_request().unwrap().high_accuracy);
    }

    #[tokio::test]
    async fn probe_reads_the_provided_position_source() {
        let gps = Rc::new(FixedPosition::failing(GeolocationError::PermissionDenied));
        let provider = with_runtime(|| {
            provide_context::<Rc<dyn PositionProvider>>(gps.clone());
            use_position_provider()
        });

        assert_eq!(
            probe_location(provider.as_ref()).await,
            Err(GeolocationError::PermissionDenied)
        );
        assert_eq!(gps.calls(), 1);
    }
}

use super::{repository::SellerDashboardRepository, utils};
use crate::{
    api::{ApiError, CheckInRequest, CheckOutRequest, Customer},
    components::toast::use_toasts,
    state::auth::use_api_client,
    utils::geolocation::{use_position_provider, PositionProvider, PositionRequest},
};
use leptos::*;
use rust_i18n::t;
use std::rc::Rc;

/// Reads the seller id before touching geolocation; a visit without one
/// cannot be attributed.
fn require_seller_id(repo: &SellerDashboardRepository) -> Result<String, ApiError> {
    repo.client()
        .session()
        .seller_id()
        .ok_or_else(|| ApiError::unauthorized(t!("errors.session_expired")))
}

pub async fn perform_check_in<P>(
    repo: &SellerDashboardRepository,
    provider: &P,
    customer_id: &str,
) -> Result<(), ApiError>
where
    P: PositionProvider + ?Sized,
{
    let seller_id = require_seller_id(repo)?;
    let position = provider
        .current_position(PositionRequest::high_accuracy())
        .await?;
    log::debug!("check-in at {} from {:?}", customer_id, position);
    repo.check_in(CheckInRequest {
        customer_id: customer_id.to_string(),
        seller_id,
        latitude: position.latitude,
        longitude: position.longitude,
    })
    .await
}

pub async fn perform_check_out<P>(
    repo: &SellerDashboardRepository,
    provider: &P,
    customer_id: &str,
    summary: &str,
) -> Result<(), ApiError>
where
    P: PositionProvider + ?Sized,
{
    let summary = utils::validate_summary(summary)?;
    let seller_id = require_seller_id(repo)?;
    let position = provider
        .current_position(
            PositionRequest::high_accuracy().with_timeout(utils::CHECK_OUT_TIMEOUT_MS),
        )
        .await?;
    repo.check_out(CheckOutRequest {
        seller_id,
        customer_id: customer_id.to_string(),
        latitude: position.latitude,
        longitude: position.longitude,
        summary_check_out: summary,
    })
    .await
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckOutInput {
    pub customer_id: String,
    pub summary: String,
}

#[derive(Clone, Copy)]
pub struct SellerDashboardViewModel {
    pub customers_reload: RwSignal<u32>,
    pub customers_resource: Resource<u32, Result<Vec<Customer>, ApiError>>,
    pub check_in_target: RwSignal<Option<Customer>>,
    pub check_out_target: RwSignal<Option<Customer>>,
    pub summary: RwSignal<String>,
    pub alert: RwSignal<Option<String>>,
    pub map_customer: RwSignal<Option<Customer>>,
    pub check_in_action: Action<String, Result<(), ApiError>>,
    pub check_out_action: Action<CheckOutInput, Result<(), ApiError>>,
}

impl SellerDashboardViewModel {
    pub fn busy(&self) -> Signal<bool> {
        let check_in = self.check_in_action.pending();
        let check_out = self.check_out_action.pending();
        Signal::derive(move || check_in.get() || check_out.get())
    }

    pub fn ask_check_in(&self, customer: Customer) {
        self.check_in_target.set(Some(customer));
    }

    pub fn confirm_check_in(&self) -> bool {
        if self.busy().get_untracked() {
            return false;
        }
        match self.check_in_target.get_untracked() {
            Some(customer) => {
                self.check_in_target.set(None);
                self.check_in_action.dispatch(customer.id);
                true
            }
            None => false,
        }
    }

    pub fn ask_check_out(&self, customer: Customer) {
        self.summary.set(String::new());
        self.check_out_target.set(Some(customer));
    }

    pub fn cancel_check_out(&self) {
        self.check_out_target.set(None);
        self.summary.set(String::new());
    }

    /// Blank summaries stay in the dialog with an alert.
    pub fn confirm_check_out(&self) -> bool {
        if self.busy().get_untracked() {
            return false;
        }
        let Some(customer) = self.check_out_target.get_untracked() else {
            return false;
        };
        match utils::validate_summary(&self.summary.get_untracked()) {
            Ok(summary) => {
                self.check_out_target.set(None);
                self.check_out_action.dispatch(CheckOutInput {
                    customer_id: customer.id,
                    summary,
                });
                true
            }
            Err(err) => {
                self.alert.set(Some(err.message));
                false
            }
        }
    }
}

pub fn use_seller_dashboard_view_model() -> SellerDashboardViewModel {
    let repository = SellerDashboardRepository::new_with_client(Rc::new(use_api_client()));
    let provider = use_position_provider();
    let toasts = use_toasts();

    let customers_reload = create_rw_signal(0u32);
    let check_in_target = create_rw_signal(None::<Customer>);
    let check_out_target = create_rw_signal(None::<Customer>);
    let summary = create_rw_signal(String::new());
    let alert = create_rw_signal(None::<String>);
    let map_customer = create_rw_signal(None::<Customer>);

    let repo_for_resource = repository.clone();
    let customers_resource = create_resource(
        move || customers_reload.get(),
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_customers().await }
        },
    );

    let repo_for_check_in = repository.clone();
    let provider_for_check_in = provider.clone();
    let check_in_action = create_action(move |customer_id: &String| {
        let repo = repo_for_check_in.clone();
        let provider = provider_for_check_in.clone();
        let customer_id = customer_id.clone();
        async move { perform_check_in(&repo, provider.as_ref(), &customer_id).await }
    });

    let repo_for_check_out = repository.clone();
    let check_out_action = create_action(move |input: &CheckOutInput| {
        let repo = repo_for_check_out.clone();
        let provider = provider.clone();
        let input = input.clone();
        async move {
            perform_check_out(&repo, provider.as_ref(), &input.customer_id, &input.summary).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = check_in_action.value().get() {
            match result {
                Ok(()) => toasts.success(t!("visit.check_in_success"), ""),
                Err(err) => alert.set(Some(err.message)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = check_out_action.value().get() {
            match result {
                Ok(()) => {
                    summary.set(String::new());
                    toasts.success(t!("visit.check_out_success"), "");
                }
                Err(err) => alert.set(Some(err.message)),
            }
        }
    });

    SellerDashboardViewModel {
        customers_reload,
        customers_resource,
        check_in_target,
        check_out_target,
        summary,
        alert,
        map_customer,
        check_in_action,
        check_out_action,
    }
}

use super::{
    repository::AdminCustomersRepository,
    utils::{filter_customers, CustomerFormState},
};
use crate::{
    api::{ApiError, Customer, CustomerPayload, PostalAddress},
    components::toast::use_toasts,
    state::auth::use_api_client,
    utils::{
        geolocation::{use_position_provider, Coordinates, GeolocationError, PositionProvider, PositionRequest},
        masks, navigation,
        records::{remove_by_id, FormMode},
    },
};
use leptos::*;
use rust_i18n::t;
use std::rc::Rc;

pub async fn save_customer(
    repo: &AdminCustomersRepository,
    mode: &FormMode,
    payload: CustomerPayload,
) -> Result<(), ApiError> {
    match mode {
        FormMode::Create => repo.create_customer(payload).await,
        FormMode::Edit(id) => repo.update_customer(id, payload).await,
    }
}

pub async fn delete_customer(repo: &AdminCustomersRepository, id: String) -> Result<String, ApiError> {
    repo.delete_customer(&id).await?;
    Ok(id)
}

/// Lookup failures are logged and treated as "not found" so the form keeps
/// whatever the admin typed.
pub async fn lookup_postal(repo: &AdminCustomersRepository, cep: &str) -> Option<PostalAddress> {
    match repo.lookup_postal_code(cep).await {
        Ok(found) => found,
        Err(err) => {
            log::warn!("postal code lookup failed for {}: {}", cep, err);
            None
        }
    }
}

pub async fn locate<P>(provider: &P) -> Result<Coordinates, GeolocationError>
where
    P: PositionProvider + ?Sized,
{
    provider
        .current_position(PositionRequest::high_accuracy())
        .await
}

#[derive(Clone, Copy)]
pub struct CustomerListViewModel {
    pub query: RwSignal<String>,
    pub customers: RwSignal<Vec<Customer>>,
    pub reload: RwSignal<u32>,
    pub customers_resource: Resource<u32, Result<Vec<Customer>, ApiError>>,
    pub visible: Memo<Vec<Customer>>,
    pub pending_delete: RwSignal<Option<Customer>>,
    pub map_customer: RwSignal<Option<Customer>>,
    pub alert: RwSignal<Option<String>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
}

impl CustomerListViewModel {
    pub fn confirm_delete(&self) -> bool {
        if self.delete_action.pending().get_untracked() {
            return false;
        }
        match self.pending_delete.get_untracked() {
            Some(customer) => {
                self.pending_delete.set(None);
                self.delete_action.dispatch(customer.id);
                true
            }
            None => false,
        }
    }

    /// Prunes the acknowledged row, or raises the alert. Returns whether a
    /// row was removed.
    pub fn settle_delete(&self, result: Result<String, ApiError>) -> bool {
        match result {
            Ok(id) => {
                self.customers.update(|list| remove_by_id(list, &id));
                true
            }
            Err(err) => {
                self.alert.set(Some(err.message));
                false
            }
        }
    }
}

pub fn use_customer_list_view_model() -> CustomerListViewModel {
    let repository = AdminCustomersRepository::new_with_client(Rc::new(use_api_client()));
    let toasts = use_toasts();

    let query = create_rw_signal(String::new());
    let customers = create_rw_signal(Vec::<Customer>::new());
    let reload = create_rw_signal(0u32);
    let pending_delete = create_rw_signal(None::<Customer>);
    let map_customer = create_rw_signal(None::<Customer>);
    let alert = create_rw_signal(None::<String>);

    let repo_for_resource = repository.clone();
    let customers_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_customers().await }
        },
    );

    create_effect(move |_| {
        if let Some(Ok(list)) = customers_resource.get() {
            customers.set(list);
        }
    });

    let visible = create_memo(move |_| customers.with(|list| filter_customers(list, &query.get())));

    let delete_action = create_action(move |id: &String| {
        let repo = repository.clone();
        let id = id.clone();
        async move { delete_customer(&repo, id).await }
    });

    let vm = CustomerListViewModel {
        query,
        customers,
        reload,
        customers_resource,
        visible,
        pending_delete,
        map_customer,
        alert,
        delete_action,
    };

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            if vm.settle_delete(result) {
                toasts.success(t!("customers.deleted"), "");
            }
        }
    });

    vm
}

#[derive(Clone, Copy)]
pub struct CustomerFormViewModel {
    pub mode: StoredValue<FormMode>,
    pub form: RwSignal<CustomerFormState>,
    pub error: RwSignal<Option<ApiError>>,
    pub load_action: Action<String, Result<Customer, ApiError>>,
    pub save_action: Action<CustomerPayload, Result<(), ApiError>>,
    pub postal_action: Action<String, (String, Option<PostalAddress>)>,
    pub locate_action: Action<(), Result<Coordinates, GeolocationError>>,
}

impl CustomerFormViewModel {
    pub fn is_edit(&self) -> bool {
        self.mode.with_value(FormMode::is_edit)
    }

    pub fn submit(&self) -> bool {
        if self.save_action.pending().get_untracked() {
            return false;
        }
        let request = self
            .mode
            .with_value(|mode| self.form.with_untracked(|form| form.to_request(mode)));
        match request {
            Ok(payload) => {
                self.error.set(None);
                self.save_action.dispatch(payload);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }

    /// Runs on blur; only complete codes reach the postal service. A newer
    /// code is looked up even while an older lookup is in flight.
    pub fn lookup_zip_code(&self, raw: String) -> bool {
        if !masks::is_complete_cep(&raw) {
            return false;
        }
        self.postal_action.dispatch(raw);
        true
    }

    /// Applies a finished lookup only if it still matches the zip code on
    /// the form.
    pub fn settle_postal(&self, cep: &str, found: Option<PostalAddress>) -> bool {
        let Some(found) = found else {
            return false;
        };
        let current = self
            .form
            .with_untracked(|state| masks::digits_only(&state.zip_code));
        if current != masks::digits_only(cep) {
            log::debug!("discarding stale postal lookup for {}", cep);
            return false;
        }
        self.form.update(|state| state.apply_postal(&found));
        true
    }
}

pub fn use_customer_form_view_model(mode: FormMode) -> CustomerFormViewModel {
    let repository = AdminCustomersRepository::new_with_client(Rc::new(use_api_client()));
    let provider = use_position_provider();
    let toasts = use_toasts();
    let navigate = navigation::use_navigator();

    let form = create_rw_signal(CustomerFormState::default());
    let error = create_rw_signal(None::<ApiError>);
    let stored_mode = store_value(mode.clone());

    let repo_for_load = repository.clone();
    let load_action = create_action(move |id: &String| {
        let repo = repo_for_load.clone();
        let id = id.clone();
        async move { repo.fetch_customer(&id).await }
    });

    let repo_for_postal = repository.clone();
    let postal_action = create_action(move |cep: &String| {
        let repo = repo_for_postal.clone();
        let cep = cep.clone();
        async move {
            let found = lookup_postal(&repo, &cep).await;
            (cep, found)
        }
    });

    let locate_action = create_action(move |_: &()| {
        let provider = provider.clone();
        async move { locate(provider.as_ref()).await }
    });

    let save_action = create_action(move |payload: &CustomerPayload| {
        let repo = repository.clone();
        let payload = payload.clone();
        let mode = stored_mode.get_value();
        async move { save_customer(&repo, &mode, payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = load_action.value().get() {
            match result {
                Ok(customer) => form.set(CustomerFormState::from_customer(&customer)),
                Err(err) => {
                    log::error!("failed to load customer: {}", err);
                    toasts.error(t!("common.error"), err.message);
                    navigate.call(navigation::ADMIN_CUSTOMERS_LIST_PATH.to_string());
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = locate_action.value().get() {
            match result {
                Ok(position) => form.update(|state| state.apply_position(position)),
                Err(err) => {
                    log::warn!("could not read current position: {}", err);
                    toasts.warning(t!("customers.position_unavailable"), t!(err.i18n_key()));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    let key = if stored_mode.with_value(FormMode::is_edit) {
                        "customers.updated"
                    } else {
                        "customers.created"
                    };
                    toasts.success(t!(key), "");
                    navigate.call(navigation::ADMIN_CUSTOMERS_LIST_PATH.to_string());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    let vm = CustomerFormViewModel {
        mode: stored_mode,
        form,
        error,
        load_action,
        save_action,
        postal_action,
        locate_action,
    };

    create_effect(move |_| {
        if let Some((cep, found)) = postal_action.value().get() {
            vm.settle_postal(&cep, found);
        }
    });

    if let FormMode::Edit(id) = mode {
        load_action.dispatch(id);
    }

    vm
}

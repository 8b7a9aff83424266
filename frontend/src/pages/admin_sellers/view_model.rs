use super::{
    repository::AdminSellersRepository,
    utils::{filter_sellers, SellerFormState},
};
use crate::{
    api::{ApiError, Seller, SellerPayload},
    components::toast::use_toasts,
    state::auth::use_api_client,
    utils::{
        navigation,
        records::{remove_by_id, FormMode},
    },
};
use leptos::*;
use rust_i18n::t;
use std::rc::Rc;

pub async fn save_seller(
    repo: &AdminSellersRepository,
    mode: &FormMode,
    payload: SellerPayload,
) -> Result<(), ApiError> {
    match mode {
        FormMode::Create => repo.create_seller(payload).await,
        FormMode::Edit(id) => repo.update_seller(id, payload).await,
    }
}

/// Deletes remotely; the caller prunes local state with the returned id.
pub async fn delete_seller(repo: &AdminSellersRepository, id: String) -> Result<String, ApiError> {
    repo.delete_seller(&id).await?;
    Ok(id)
}

#[derive(Clone, Copy)]
pub struct SellerListViewModel {
    pub query: RwSignal<String>,
    pub sellers: RwSignal<Vec<Seller>>,
    pub reload: RwSignal<u32>,
    pub sellers_resource: Resource<u32, Result<Vec<Seller>, ApiError>>,
    pub visible: Memo<Vec<Seller>>,
    pub pending_delete: RwSignal<Option<Seller>>,
    pub alert: RwSignal<Option<String>>,
    pub delete_action: Action<String, Result<String, ApiError>>,
}

impl SellerListViewModel {
    pub fn confirm_delete(&self) -> bool {
        if self.delete_action.pending().get_untracked() {
            return false;
        }
        match self.pending_delete.get_untracked() {
            Some(seller) => {
                self.pending_delete.set(None);
                self.delete_action.dispatch(seller.id);
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
                self.sellers.update(|list| remove_by_id(list, &id));
                true
            }
            Err(err) => {
                self.alert.set(Some(err.message));
                false
            }
        }
    }
}

pub fn use_seller_list_view_model() -> SellerListViewModel {
    let repository = AdminSellersRepository::new_with_client(Rc::new(use_api_client()));
    let toasts = use_toasts();

    let query = create_rw_signal(String::new());
    let sellers = create_rw_signal(Vec::<Seller>::new());
    let reload = create_rw_signal(0u32);
    let pending_delete = create_rw_signal(None::<Seller>);
    let alert = create_rw_signal(None::<String>);

    let repo_for_resource = repository.clone();
    let sellers_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_resource.clone();
            async move { repo.fetch_sellers().await }
        },
    );

    create_effect(move |_| {
        if let Some(Ok(list)) = sellers_resource.get() {
            sellers.set(list);
        }
    });

    let visible = create_memo(move |_| sellers.with(|list| filter_sellers(list, &query.get())));

    let delete_action = create_action(move |id: &String| {
        let repo = repository.clone();
        let id = id.clone();
        async move { delete_seller(&repo, id).await }
    });

    let vm = SellerListViewModel {
        query,
        sellers,
        reload,
        sellers_resource,
        visible,
        pending_delete,
        alert,
        delete_action,
    };

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            if vm.settle_delete(result) {
                toasts.success(t!("sellers.deleted"), "");
            }
        }
    });

    vm
}

#[derive(Clone, Copy)]
pub struct SellerFormViewModel {
    pub mode: StoredValue<FormMode>,
    pub form: RwSignal<SellerFormState>,
    pub error: RwSignal<Option<ApiError>>,
    pub load_action: Action<String, Result<Seller, ApiError>>,
    pub save_action: Action<SellerPayload, Result<(), ApiError>>,
}

impl SellerFormViewModel {
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
}

pub fn use_seller_form_view_model(mode: FormMode) -> SellerFormViewModel {
    let repository = AdminSellersRepository::new_with_client(Rc::new(use_api_client()));
    let toasts = use_toasts();
    let navigate = navigation::use_navigator();

    let form = create_rw_signal(SellerFormState::default());
    let error = create_rw_signal(None::<ApiError>);
    let stored_mode = store_value(mode.clone());

    let repo_for_load = repository.clone();
    let load_action = create_action(move |id: &String| {
        let repo = repo_for_load.clone();
        let id = id.clone();
        async move { repo.fetch_seller(&id).await }
    });

    let save_action = create_action(move |payload: &SellerPayload| {
        let repo = repository.clone();
        let payload = payload.clone();
        let mode = stored_mode.get_value();
        async move { save_seller(&repo, &mode, payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = load_action.value().get() {
            match result {
                Ok(seller) => form.set(SellerFormState::from_seller(&seller)),
                Err(err) => {
                    log::error!("failed to load seller: {}", err);
                    toasts.error(t!("common.error"), err.message);
                    navigate.call(navigation::ADMIN_SELLERS_LIST_PATH.to_string());
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    let key = if stored_mode.with_value(FormMode::is_edit) {
                        "sellers.updated"
                    } else {
                        "sellers.created"
                    };
                    toasts.success(t!(key), "");
                    navigate.call(navigation::ADMIN_SELLERS_LIST_PATH.to_string());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    if let FormMode::Edit(id) = mode {
        load_action.dispatch(id);
    }

    SellerFormViewModel {
        mode: stored_mode,
        form,
        error,
        load_action,
        save_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::{ApiClient, ApiErrorKind};
    use crate::components::toast::provide_toasts;
    use crate::state::session::Role;
    use crate::test_support::helpers::{provide_auth, seller, session_for, signed_in_store};
    use crate::test_support::ssr::with_quiet_runtime;
    use serde_json::json;

    fn repo_for(server: &MockServer) -> AdminSellersRepository {
        AdminSellersRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
            signed_in_store(Role::Admin),
        )))
    }

    #[tokio::test]
    async fn create_posts_new_seller() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/Seller");
            then.status(201).json_body(json!({ "id": "s9" }));
        });
        let repo = repo_for(&server);
        let mut state = SellerFormState {
            name: "Bia".into(),
            email: "bia@checkvisit.com".into(),
            password: "secret".into(),
            ..SellerFormState::default()
        };
        state.set_cpf("98765432100");
        let payload = state.to_request(&FormMode::Create).unwrap();

        save_seller(&repo, &FormMode::Create, payload).await.unwrap();

        let sent = server.received();
        assert_eq!(sent[0].method, POST);
        assert_eq!(
            sent[0].body,
            Some(json!({
                "name": "Bia",
                "cpf": "98765432100",
                "email": "bia@checkvisit.com",
                "password": "secret",
                "role": "SELLER"
            }))
        );
    }

    #[tokio::test]
    async fn edit_puts_to_seller_id_with_cpf_digits() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/Seller/s1");
            then.status(204).body("");
        });
        let repo = repo_for(&server);
        let mode = FormMode::Edit("s1".into());
        let payload = SellerFormState::from_seller(&seller("s1", "Ana", "12345678901"))
            .to_request(&mode)
            .unwrap();

        save_seller(&repo, &mode, payload).await.unwrap();

        let body = server.received()[0].body.clone().unwrap();
        assert_eq!(body["cpf"], json!("12345678901"));
        assert!(body.get("password").is_none());
        assert_eq!(body["active"], json!(true));
        assert_eq!(server.hits(PUT, "/api/Seller/s1"), 1);
    }

    #[tokio::test]
    async fn delete_returns_id_only_after_acknowledgement() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/Seller/s1");
            then.status(200).json_body(json!({}));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/api/Seller/s2");
            then.status(500).json_body(json!({ "message": "Vendedor possui visitas" }));
        });
        let repo = repo_for(&server);

        assert_eq!(delete_seller(&repo, "s1".into()).await.unwrap(), "s1");
        let err = delete_seller(&repo, "s2".into()).await.unwrap_err();
        assert_eq!(err.message, "Vendedor possui visitas");
    }

    #[tokio::test]
    async fn acknowledged_delete_leaves_local_list() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/Seller/s1");
            then.status(200).json_body(json!({}));
        });
        let result = delete_seller(&repo_for(&server), "s1".into()).await;

        with_quiet_runtime(|| {
            provide_auth(Some(session_for(Role::Admin)));
            provide_toasts();
            let vm = use_seller_list_view_model();
            vm.sellers.set(vec![
                seller("s1", "Ana", "11111111111"),
                seller("s2", "Bia", "22222222222"),
            ]);
            assert!(vm.settle_delete(result));
            let ids: Vec<String> = vm.sellers.get().into_iter().map(|s| s.id).collect();
            assert_eq!(ids, vec!["s2".to_string()]);
            assert!(vm.alert.get().is_none());
        });
    }

    #[tokio::test]
    async fn rejected_delete_keeps_row_and_alerts() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(DELETE).path("/api/Seller/s1");
            then.status(500).json_body(json!({ "message": "Vendedor possui visitas" }));
        });
        let result = delete_seller(&repo_for(&server), "s1".into()).await;

        with_quiet_runtime(|| {
            provide_auth(Some(session_for(Role::Admin)));
            provide_toasts();
            let vm = use_seller_list_view_model();
            vm.sellers.set(vec![seller("s1", "Ana", "11111111111")]);
            assert!(!vm.settle_delete(result));
            assert_eq!(vm.sellers.get().len(), 1);
            assert_eq!(vm.alert.get().as_deref(), Some("Vendedor possui visitas"));
        });
    }

    #[test]
    fn visible_list_follows_query() {
        with_quiet_runtime(|| {
            provide_auth(Some(session_for(Role::Admin)));
            provide_toasts();
            let vm = use_seller_list_view_model();
            vm.sellers.set(vec![
                seller("s1", "Ana", "123.456.789-01"),
                seller("s2", "Bia", "22222222222"),
            ]);
            vm.query.set("45678".into());
            assert_eq!(vm.visible.get().len(), 1);
            vm.query.set(String::new());
            assert_eq!(vm.visible.get().len(), 2);
        });
    }

    #[test]
    fn invalid_create_form_is_not_submitted() {
        with_quiet_runtime(|| {
            provide_auth(Some(session_for(Role::Admin)));
            provide_toasts();
            let vm = use_seller_form_view_model(FormMode::Create);
            assert!(!vm.is_edit());
            assert!(!vm.submit());
            assert_eq!(vm.error.get().map(|e| e.kind), Some(ApiErrorKind::Validation));
            assert_eq!(vm.save_action.version().get(), 0);
        });
    }
}

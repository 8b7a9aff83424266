#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Address, Customer, Seller};
    use crate::state::auth::AuthState;
    use crate::state::session::{Role, Session, SessionStore};
    use crate::utils::geolocation::{
        Coordinates, GeolocationError, PositionProvider, PositionRequest,
    };
    use async_trait::async_trait;
    use leptos::*;
    use std::cell::{Cell, RefCell};

    pub fn session_for(role: Role) -> Session {
        Session {
            token: "jwt-token".into(),
            seller_id: "s1".into(),
            seller_name: "Ana".into(),
            role,
        }
    }

    pub fn signed_in_store(role: Role) -> SessionStore {
        let store = SessionStore::in_memory();
        store.save(&session_for(role)).unwrap();
        store
    }

    /// Provides the auth signal plus a matching in-memory session store.
    pub fn provide_auth(
        session: Option<Session>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let store = SessionStore::in_memory();
        if let Some(session) = &session {
            store.save(session).unwrap();
        }
        provide_context(store);
        let (auth, set_auth) = create_signal(AuthState { session });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn customer(id: &str, company_name: &str) -> Customer {
        Customer {
            id: id.into(),
            company_name: company_name.into(),
            cnpj: "12345678000195".into(),
            address: Address {
                zip_code: "01001000".into(),
                street: "Praça da Sé".into(),
                number: "100".into(),
                complement: None,
                neighborhood: "Sé".into(),
                city: "São Paulo".into(),
                state: "SP".into(),
            },
            latitude: -23.5,
            longitude: -46.6,
            active: true,
        }
    }

    pub fn seller(id: &str, name: &str, cpf: &str) -> Seller {
        Seller {
            id: id.into(),
            name: name.into(),
            cpf: cpf.into(),
            email: format!("{}@checkvisit.com", name.to_lowercase()),
            phone: None,
            active: true,
            role: "SELLER".into(),
        }
    }

    /// Position provider answering with a fixed outcome and recording calls.
    pub struct FixedPosition {
        outcome: Result<Coordinates, GeolocationError>,
        calls: Cell<usize>,
        requests: RefCell<Vec<PositionRequest>>,
    }

    impl FixedPosition {
        pub fn at(latitude: f64, longitude: f64) -> Self {
            Self::with_outcome(Ok(Coordinates {
                latitude,
                longitude,
            }))
        }

        pub fn failing(error: GeolocationError) -> Self {
            Self::with_outcome(Err(error))
        }

        fn with_outcome(outcome: Result<Coordinates, GeolocationError>) -> Self {
            Self {
                outcome,
                calls: Cell::new(0),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.get()
        }

        pub fn last_request(&self) -> Option<PositionRequest> {
            self.requests.borrow().last().copied()
        }
    }

    #[async_trait(?Send)]
    impl PositionProvider for FixedPosition {
        async fn current_position(
            &self,
            request: PositionRequest,
        ) -> Result<Coordinates, GeolocationError> {
            self.calls.set(self.calls.get() + 1);
            self.requests.borrow_mut().push(request);
            self.outcome
        }
    }
}

use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository::LoginRepository,
    state::session::{use_session, Role, Session, SessionStore},
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn from_store(store: &SessionStore) -> Self {
        Self {
            session: store.current(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session
            .as_ref()
            .map(|session| session.role == Role::Admin)
            .unwrap_or(false)
    }

    pub fn display_name(&self) -> String {
        self.session
            .as_ref()
            .map(|session| session.seller_name.clone())
            .unwrap_or_default()
    }
}

/// Provides the session store, the shared `ApiClient` and the auth signal.
#[component]
pub fn AuthProvider(
    #[prop(optional)] store: Option<SessionStore>,
    children: Children,
) -> impl IntoView {
    let store = store.unwrap_or_else(SessionStore::browser);
    provide_context(store.clone());
    provide_context(ApiClient::new(store.clone()));
    provide_context::<AuthContext>(create_signal(AuthState::from_store(&store)));
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .unwrap_or_else(|| create_signal(AuthState::from_store(&use_session())))
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(use_session()))
}

pub fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => navigation::ADMIN_DASHBOARD_PATH,
        Role::Seller => navigation::SELLER_DASHBOARD_PATH,
    }
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<Session, ApiError> {
    let session = repo.login(request).await?;
    set_auth_state.update(|state| state.session = Some(session.clone()));
    Ok(session)
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.update(|state| state.session = None);
}

pub fn use_login_action() -> Action<LoginRequest, Result<Session, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::new_with_client(Rc::new(use_api_client()));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

/// Clears the session and leaves for the login page.
pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    let repo = LoginRepository::new_with_client(Rc::new(use_api_client()));
    Callback::new(move |_| {
        logout(&repo, set_auth);
        navigation::redirect(navigation::LOGIN_PATH);
    })
}

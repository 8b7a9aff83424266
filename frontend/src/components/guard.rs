use crate::{
    state::auth::{use_auth, AuthState},
    utils::navigation,
};
use leptos::*;

/// Where a visitor without the right session is sent, if anywhere.
fn redirect_target(state: &AuthState, admin_only: bool) -> Option<&'static str> {
    if !state.is_authenticated() {
        Some(navigation::LOGIN_PATH)
    } else if admin_only && !state.is_admin() {
        Some(navigation::SELLER_DASHBOARD_PATH)
    } else {
        None
    }
}

fn guarded(admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let allowed = create_memo(move |_| redirect_target(&auth.get(), admin_only).is_none());
    create_effect(move |_| {
        if let Some(target) = redirect_target(&auth.get(), admin_only) {
            navigation::redirect(target);
        }
    });
    view! {
        <Show when=move || allowed.get() fallback=|| ()>
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    guarded(false, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(true, children)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAdmin, RequireSession};
    use crate::state::{auth::AuthState, session::Role};
    use crate::test_support::helpers::{provide_auth, session_for};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn require_session_renders_children_when_signed_in() {
        let html = render_to_string(move || {
            provide_auth(Some(session_for(Role::Seller)));
            view! {
                <RequireSession>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_session_hides_children_when_anonymous() {
        let html = render_to_string(move || {
            provide_context(create_signal(AuthState::default()));
            view! {
                <RequireSession>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_admin_hides_children_for_sellers() {
        let html = render_to_string(move || {
            provide_auth(Some(session_for(Role::Seller)));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_renders_children_for_admins() {
        let html = render_to_string(move || {
            provide_auth(Some(session_for(Role::Admin)));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }
}

use leptos::*;

pub const LOGIN_PATH: &str = "/";
pub const SELLER_DASHBOARD_PATH: &str = "/seller/dashboard";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const ADMIN_SELLERS_LIST_PATH: &str = "/admin/sellers/list";
pub const ADMIN_SELLERS_NEW_PATH: &str = "/admin/sellers/new";
pub const ADMIN_CUSTOMERS_LIST_PATH: &str = "/admin/customers/list";
pub const ADMIN_CUSTOMERS_NEW_PATH: &str = "/admin/customers/new";

pub fn seller_edit_path(id: &str) -> String {
    format!("/admin/sellers/edit/{}", id)
}

pub fn customer_edit_path(id: &str) -> String {
    format!("/admin/customers/edit/{}", id)
}

/// Full page navigation. A no-op outside the browser.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("redirect to {} skipped outside the browser", path);
    }
}

/// In-app navigation through the router when one is mounted, a full page
/// load otherwise.
pub fn use_navigator() -> Callback<String> {
    if use_context::<leptos_router::RouterContext>().is_some() {
        let navigate = leptos_router::use_navigate();
        Callback::new(move |path: String| navigate(&path, Default::default()))
    } else {
        Callback::new(move |path: String| redirect(&path))
    }
}

pub fn redirect_to_login_if_needed() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == LOGIN_PATH {
                    return;
                }
            }
            let _ = location.set_href(LOGIN_PATH);
        }
    }
}

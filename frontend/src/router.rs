use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{
        guard::{RequireAdmin, RequireSession},
        toast::{provide_toasts, ToastHost},
    },
    pages::{
        admin_customers::{AdminCustomerEditPage, AdminCustomerNewPage, AdminCustomersListPage},
        admin_dashboard::AdminDashboardPage,
        admin_sellers::{AdminSellerEditPage, AdminSellerNewPage, AdminSellersListPage},
        login::LoginPage,
        seller_dashboard::SellerDashboardPage,
    },
    state::{
        auth::AuthProvider,
        locale::{provide_locale, Locale},
    },
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/seller/dashboard",
    "/admin/dashboard",
    "/admin/sellers/list",
    "/admin/sellers/new",
    "/admin/sellers/edit/:id",
    "/admin/customers/list",
    "/admin/customers/new",
    "/admin/customers/edit/:id",
];

pub const SESSION_ROUTE_PATHS: &[&str] = &["/seller/dashboard"];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin/dashboard",
    "/admin/sellers/list",
    "/admin/sellers/new",
    "/admin/sellers/edit/:id",
    "/admin/customers/list",
    "/admin/customers/new",
    "/admin/customers/edit/:id",
];

pub fn mount_app(locale: Locale) {
    mount_to_body(move || app_root(locale));
}

/// Providers, toast host and routes. A locale change rebuilds the router so
/// every page re-renders its translated text.
pub fn app_root(locale: Locale) -> impl IntoView {
    provide_meta_context();
    let locale_ctx = provide_locale(locale);
    provide_toasts();
    view! {
        <Title text="CheckVisit"/>
        <AuthProvider>
            {move || {
                let _ = locale_ctx.current.get();
                view! { <AppRoutes /> }
            }}
            <ToastHost />
        </AuthProvider>
    }
}

#[component]
fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=LoginPage/>
                <Route path="/seller/dashboard" view=ProtectedSellerDashboard/>
                <Route path="/admin/dashboard" view=ProtectedAdminDashboard/>
                <Route path="/admin/sellers/list" view=ProtectedSellersList/>
                <Route path="/admin/sellers/new" view=ProtectedSellerNew/>
                <Route path="/admin/sellers/edit/:id" view=ProtectedSellerEdit/>
                <Route path="/admin/customers/list" view=ProtectedCustomersList/>
                <Route path="/admin/customers/new" view=ProtectedCustomerNew/>
                <Route path="/admin/customers/edit/:id" view=ProtectedCustomerEdit/>
                <Route path="/*any" view=|| view! { <Redirect path="/"/> }/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedSellerDashboard() -> impl IntoView {
    view! { <RequireSession><SellerDashboardPage/></RequireSession> }
}

#[component]
fn ProtectedAdminDashboard() -> impl IntoView {
    view! { <RequireAdmin><AdminDashboardPage/></RequireAdmin> }
}

#[component]
fn ProtectedSellersList() -> impl IntoView {
    view! { <RequireAdmin><AdminSellersListPage/></RequireAdmin> }
}

#[component]
fn ProtectedSellerNew() -> impl IntoView {
    view! { <RequireAdmin><AdminSellerNewPage/></RequireAdmin> }
}

#[component]
fn ProtectedSellerEdit() -> impl IntoView {
    view! { <RequireAdmin><AdminSellerEditPage/></RequireAdmin> }
}

#[component]
fn ProtectedCustomersList() -> impl IntoView {
    view! { <RequireAdmin><AdminCustomersListPage/></RequireAdmin> }
}

#[component]
fn ProtectedCustomerNew() -> impl IntoView {
    view! { <RequireAdmin><AdminCustomerNewPage/></RequireAdmin> }
}

#[component]
fn ProtectedCustomerEdit() -> impl IntoView {
    view! { <RequireAdmin><AdminCustomerEditPage/></RequireAdmin> }
}

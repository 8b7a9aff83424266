use crate::utils::records::FormMode;
use leptos::*;
use leptos_router::use_params_map;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{CustomerFormPanel, CustomerListPanel};

#[component]
pub fn AdminCustomersListPage() -> impl IntoView {
    view! { <CustomerListPanel /> }
}

#[component]
pub fn AdminCustomerNewPage() -> impl IntoView {
    view! { <CustomerFormPanel mode=FormMode::Create /> }
}

#[component]
pub fn AdminCustomerEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|params| params.get("id").cloned());
    view! { <CustomerFormPanel mode=FormMode::from_param(id) /> }
}

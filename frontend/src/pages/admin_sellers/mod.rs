use crate::utils::records::FormMode;
use leptos::*;
use leptos_router::use_params_map;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::{SellerFormPanel, SellerListPanel};

#[component]
pub fn AdminSellersListPage() -> impl IntoView {
    view! { <SellerListPanel /> }
}

#[component]
pub fn AdminSellerNewPage() -> impl IntoView {
    view! { <SellerFormPanel mode=FormMode::Create /> }
}

#[component]
pub fn AdminSellerEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|params| params.get("id").cloned());
    view! { <SellerFormPanel mode=FormMode::from_param(id) /> }
}

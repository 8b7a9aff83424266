use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::SellerDashboardPanel;

#[component]
pub fn SellerDashboardPage() -> impl IntoView {
    view! { <SellerDashboardPanel /> }
}

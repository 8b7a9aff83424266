use leptos::*;

pub mod panel;

pub use panel::AdminDashboardPanel;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <AdminDashboardPanel /> }
}

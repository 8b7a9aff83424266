use crate::{
    api::Customer,
    components::{
        confirm_dialog::{AlertDialog, ConfirmDialog},
        empty_state::EmptyState,
        layout::{BusyOverlay, ErrorMessage, Layout, LoadingSpinner},
        map_modal::MapModal,
    },
    pages::seller_dashboard::{
        components::{checkout_dialog::CheckoutDialog, customer_card::CustomerCard},
        view_model::{use_seller_dashboard_view_model, SellerDashboardViewModel},
    },
};
use leptos::*;
use rust_i18n::t;

#[component]
pub fn SellerDashboardPanel() -> impl IntoView {
    let vm = use_seller_dashboard_view_model();
    view! { <SellerDashboardView vm=vm /> }
}

#[component]
fn SellerDashboardView(vm: SellerDashboardViewModel) -> impl IntoView {
    let busy = vm.busy();
    let on_check_in = Callback::new(move |customer: Customer| vm.ask_check_in(customer));
    let on_check_out = Callback::new(move |customer: Customer| vm.ask_check_out(customer));
    let on_open_map = Callback::new(move |customer: Customer| vm.map_customer.set(Some(customer)));

    let check_in_message = Signal::derive(move || {
        vm.check_in_target
            .get()
            .map(|customer| t!("visit.check_in_confirm", name = customer.company_name).to_string())
            .unwrap_or_default()
    });

    let list = move || match vm.customers_resource.get() {
        None => view! { <LoadingSpinner /> }.into_view(),
        Some(Err(err)) => view! { <ErrorMessage message=err.message /> }.into_view(),
        Some(Ok(customers)) if customers.is_empty() => view! {
            <EmptyState
                title=t!("visit.no_customers").to_string()
                description=t!("visit.no_customers_hint").to_string()
            />
        }
        .into_view(),
        Some(Ok(customers)) => view! {
            <ul class="grid gap-4 sm:grid-cols-2">
                {customers
                    .into_iter()
                    .map(|customer| view! {
                        <CustomerCard
                            customer=customer
                            busy=busy
                            on_check_in=on_check_in
                            on_check_out=on_check_out
                            on_open_map=on_open_map
                        />
                    })
                    .collect_view()}
            </ul>
        }
        .into_view(),
    };

    view! {
        <Layout>
            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-fg">{t!("visit.my_customers").to_string()}</h1>
                    <button
                        type="button"
                        class="text-sm text-check-blue hover:underline"
                        on:click=move |_| vm.customers_reload.update(|value| *value = value.wrapping_add(1))
                    >
                        {t!("common.refresh").to_string()}
                    </button>
                </div>
                {list}
            </div>

            <ConfirmDialog
                is_open=Signal::derive(move || vm.check_in_target.get().is_some())
                title=t!("visit.check_in_title").to_string()
                message=check_in_message
                on_confirm=Callback::new(move |_| {
                    vm.confirm_check_in();
                })
                on_cancel=Callback::new(move |_| vm.check_in_target.set(None))
            />
            <CheckoutDialog
                customer=vm.check_out_target
                summary=vm.summary
                on_summary_input=Callback::new(move |value: String| vm.summary.set(value))
                on_confirm=Callback::new(move |_| {
                    vm.confirm_check_out();
                })
                on_cancel=Callback::new(move |_| vm.cancel_check_out())
            />
            <AlertDialog message=vm.alert on_close=Callback::new(move |_| vm.alert.set(None)) />
            <MapModal customer=vm.map_customer on_close=Callback::new(move |_| vm.map_customer.set(None)) />
            <BusyOverlay visible=busy message=t!("visit.locating").to_string() />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::components::toast::provide_toasts;
    use crate::state::session::Role;
    use crate::test_support::helpers::{customer, provide_auth, session_for};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_header_and_loading_state() {
        let html = render_to_string(move || {
            provide_auth(Some(session_for(Role::Seller)));
            provide_toasts();
            view! { <SellerDashboardPanel /> }
        });
        assert!(html.contains(t!("visit.my_customers").as_ref()));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn pending_check_in_shows_confirmation_for_customer() {
        let html = render_to_string(move || {
            provide_auth(Some(session_for(Role::Seller)));
            provide_toasts();
            let vm = use_seller_dashboard_view_model();
            vm.ask_check_in(customer("c1", "Acme Ltda"));
            view! { <SellerDashboardView vm=vm /> }
        });
        assert!(html.contains(t!("visit.check_in_confirm", name = "Acme Ltda").as_ref()));
    }
}

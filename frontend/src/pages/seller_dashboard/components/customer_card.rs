use crate::{
    api::Customer,
    components::common::{Button, ButtonVariant},
    pages::seller_dashboard::utils::locality,
};
use leptos::*;
use rust_i18n::t;

/// One customer on the seller's route. Tapping the body opens the map.
#[component]
pub fn CustomerCard(
    customer: Customer,
    #[prop(into)] busy: Signal<bool>,
    on_check_in: Callback<Customer>,
    on_check_out: Callback<Customer>,
    on_open_map: Callback<Customer>,
) -> impl IntoView {
    let place = locality(&customer.address.city, &customer.address.state);
    let street = format!(
        "{}, {} - {}",
        customer.address.street, customer.address.number, customer.address.neighborhood
    );
    let for_map = customer.clone();
    let for_check_in = customer.clone();
    let for_check_out = customer.clone();

    view! {
        <li class="rounded-xl bg-check-card shadow-md overflow-hidden" data-customer-id=customer.id.clone()>
            <button
                type="button"
                class="w-full text-left p-4 space-y-1 hover:bg-surface-elevated"
                aria-label=t!("visit.open_map").to_string()
                on:click=move |_| on_open_map.call(for_map.clone())
            >
                <p class="text-lg font-semibold text-fg">{customer.company_name.clone()}</p>
                <p class="text-sm text-fg-muted">{place}</p>
                <p class="text-xs text-fg-muted">{street}</p>
            </button>
            <div class="grid grid-cols-2 gap-2 px-4 pb-4">
                <Button
                    variant=ButtonVariant::Success
                    disabled=busy
                    on:click=move |_| on_check_in.call(for_check_in.clone())
                >
                    {t!("visit.check_in").to_string()}
                </Button>
                <Button
                    variant=ButtonVariant::Danger
                    disabled=busy
                    on:click=move |_| on_check_out.call(for_check_out.clone())
                >
                    {t!("visit.check_out").to_string()}
                </Button>
            </div>
        </li>
    }
}

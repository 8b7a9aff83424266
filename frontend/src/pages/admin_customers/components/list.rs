use crate::{api::Customer, utils::{masks, navigation}};
use leptos::*;
use rust_i18n::t;

#[component]
pub fn CustomerList(
    #[prop(into)] customers: Signal<Vec<Customer>>,
    on_delete: Callback<Customer>,
    on_open_map: Callback<Customer>,
) -> impl IntoView {
    view! {
        <ul class="divide-y divide-border rounded-lg bg-check-card shadow">
            <For
                each=move || customers.get()
                key=|customer| customer.id.clone()
                children=move |customer: Customer| {
                    let for_delete = customer.clone();
                    let for_map = customer.clone();
                    view! {
                        <li class="flex items-center justify-between gap-3 p-4" data-customer-id=customer.id.clone()>
                            <div class="min-w-0">
                                <p class="font-semibold text-fg truncate">{customer.company_name.clone()}</p>
                                <p class="text-sm text-fg-muted">{masks::mask_cnpj(&customer.cnpj)}</p>
                                <p class="text-xs text-fg-muted truncate">{customer.address.display_line()}</p>
                            </div>
                            <div class="flex shrink-0 gap-2">
                                <button
                                    type="button"
                                    class="rounded-lg px-3 py-1 text-sm font-medium text-check-blue hover:bg-surface-elevated"
                                    on:click=move |_| on_open_map.call(for_map.clone())
                                >
                                    {t!("customers.map").to_string()}
                                </button>
                                <a
                                    href=navigation::customer_edit_path(&customer.id)
                                    class="rounded-lg px-3 py-1 text-sm font-medium text-check-blue hover:bg-surface-elevated"
                                >
                                    {t!("common.edit").to_string()}
                                </a>
                                <button
                                    type="button"
                                    class="rounded-lg px-3 py-1 text-sm font-medium text-action-danger-bg hover:bg-surface-elevated"
                                    on:click=move |_| on_delete.call(for_delete.clone())
                                >
                                    {t!("common.delete").to_string()}
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}

use crate::{api::Seller, utils::{masks, navigation}};
use leptos::*;
use rust_i18n::t;

#[component]
pub fn SellerList(#[prop(into)] sellers: Signal<Vec<Seller>>, on_delete: Callback<Seller>) -> impl IntoView {
    view! {
        <ul class="divide-y divide-border rounded-lg bg-check-card shadow">
            <For
                each=move || sellers.get()
                key=|seller| seller.id.clone()
                children=move |seller: Seller| {
                    let for_delete = seller.clone();
                    let status = if seller.active { t!("common.active") } else { t!("common.inactive") };
                    view! {
                        <li class="flex items-center justify-between gap-3 p-4" data-seller-id=seller.id.clone()>
                            <div class="min-w-0">
                                <p class="font-semibold text-fg truncate">{seller.name.clone()}</p>
                                <p class="text-sm text-fg-muted truncate">{seller.email.clone()}</p>
                                <p class="text-xs text-fg-muted">
                                    {masks::mask_cpf(&seller.cpf)}" · "{status.to_string()}
                                </p>
                            </div>
                            <div class="flex shrink-0 gap-2">
                                <a
                                    href=navigation::seller_edit_path(&seller.id)
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::seller;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn list_rows_show_masked_cpf_and_edit_link() {
        let html = render_to_string(move || {
            let sellers = Signal::derive(|| vec![seller("s1", "Ana", "12345678901")]);
            view! { <SellerList sellers=sellers on_delete=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Ana"));
        assert!(html.contains("123.456.789-01"));
        assert!(html.contains("/admin/sellers/edit/s1"));
    }
}

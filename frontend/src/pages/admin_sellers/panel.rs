use crate::{
    api::Seller,
    components::{
        confirm_dialog::{AlertDialog, ConfirmDialog},
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    pages::admin_sellers::{
        components::{form::SellerForm, list::SellerList},
        view_model::{use_seller_form_view_model, use_seller_list_view_model},
    },
    utils::{navigation, records::FormMode},
};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;
use web_sys::HtmlInputElement;

#[component]
pub fn SellerListPanel() -> impl IntoView {
    let vm = use_seller_list_view_model();
    let fetch_error = Signal::derive(move || {
        vm.sellers_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.message)
    });
    let loading = vm.sellers_resource.loading();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|seller| t!("sellers.delete_confirm", name = seller.name).to_string())
            .unwrap_or_default()
    });

    view! {
        <Layout admin=true>
            <div class="space-y-4">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <h1 class="text-2xl font-bold text-fg">{t!("sellers.title").to_string()}</h1>
                    <a
                        href=navigation::ADMIN_SELLERS_NEW_PATH
                        class="rounded-lg px-4 py-2 text-sm font-semibold text-white bg-check-green hover:bg-check-green-dark"
                    >
                        {t!("sellers.new").to_string()}
                    </a>
                </div>
                <input
                    type="search"
                    class="w-full rounded-lg border border-border px-3 py-2 text-fg"
                    placeholder=t!("sellers.search").to_string()
                    prop:value=move || vm.query.get()
                    on:input=move |ev| vm.query.set(event_target::<HtmlInputElement>(&ev).value())
                />
                <Show when=move || fetch_error.get().is_some()>
                    <ErrorMessage message=fetch_error.get().unwrap_or_default() />
                </Show>
                <Show when=move || loading.get()>
                    <LoadingSpinner />
                </Show>
                <Show
                    when=move || !vm.visible.get().is_empty()
                    fallback=move || view! {
                        <Show when=move || !loading.get() && fetch_error.get().is_none()>
                            <EmptyState title=t!("sellers.empty").to_string() />
                        </Show>
                    }
                >
                    <SellerList
                        sellers=vm.visible
                        on_delete=Callback::new(move |seller: Seller| vm.pending_delete.set(Some(seller)))
                    />
                </Show>
            </div>

            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title=t!("common.delete").to_string()
                message=delete_message
                destructive=true
                confirm_disabled=Signal::derive(move || vm.delete_action.pending().get())
                on_confirm=Callback::new(move |_| {
                    vm.confirm_delete();
                })
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
            <AlertDialog message=vm.alert on_close=Callback::new(move |_| vm.alert.set(None)) />
        </Layout>
    }
}

#[component]
pub fn SellerFormPanel(mode: FormMode) -> impl IntoView {
    let is_edit = mode.is_edit();
    let vm = use_seller_form_view_model(mode);
    let pending = vm.save_action.pending();
    let loading = vm.load_action.pending();
    let title = if is_edit { t!("sellers.edit") } else { t!("sellers.new") };
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <Layout admin=true>
            <div class="max-w-xl mx-auto space-y-4">
                <h1 class="text-2xl font-bold text-fg">{title.to_string()}</h1>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <SellerForm
                        form=vm.form
                        is_edit=is_edit
                        error=vm.error
                        pending=pending
                        on_submit=on_submit
                    />
                </Show>
            </div>
        </Layout>
    }
}

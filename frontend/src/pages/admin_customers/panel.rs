use crate::{
    api::Customer,
    components::{
        confirm_dialog::{AlertDialog, ConfirmDialog},
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
        map_modal::MapModal,
    },
    pages::admin_customers::{
        components::{form::CustomerForm, list::CustomerList},
        view_model::{use_customer_form_view_model, use_customer_list_view_model},
    },
    utils::{navigation, records::FormMode},
};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;
use web_sys::HtmlInputElement;

#[component]
pub fn CustomerListPanel() -> impl IntoView {
    let vm = use_customer_list_view_model();
    let fetch_error = Signal::derive(move || {
        vm.customers_resource
            .get()
            .and_then(|result| result.err())
            .map(|err| err.message)
    });
    let loading = vm.customers_resource.loading();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|customer| t!("customers.delete_confirm", name = customer.company_name).to_string())
            .unwrap_or_default()
    });

    view! {
        <Layout admin=true>
            <div class="space-y-4">
                <div class="flex flex-wrap items-center justify-between gap-3">
                    <h1 class="text-2xl font-bold text-fg">{t!("customers.title").to_string()}</h1>
                    <a
                        href=navigation::ADMIN_CUSTOMERS_NEW_PATH
                        class="rounded-lg px-4 py-2 text-sm font-semibold text-white bg-check-green hover:bg-check-green-dark"
                    >
                        {t!("customers.new").to_string()}
                    </a>
                </div>
                <input
                    type="search"
                    class="w-full rounded-lg border border-border px-3 py-2 text-fg"
                    placeholder=t!("customers.search").to_string()
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
                            <EmptyState title=t!("customers.empty").to_string() />
                        </Show>
                    }
                >
                    <CustomerList
                        customers=vm.visible
                        on_delete=Callback::new(move |customer: Customer| vm.pending_delete.set(Some(customer)))
                        on_open_map=Callback::new(move |customer: Customer| vm.map_customer.set(Some(customer)))
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
            <MapModal customer=vm.map_customer on_close=Callback::new(move |_| vm.map_customer.set(None)) />
        </Layout>
    }
}

#[component]
pub fn CustomerFormPanel(mode: FormMode) -> impl IntoView {
    let is_edit = mode.is_edit();
    let vm = use_customer_form_view_model(mode);
    let pending = vm.save_action.pending();
    let loading = vm.load_action.pending();
    let locating = vm.locate_action.pending();
    let title = if is_edit { t!("customers.edit") } else { t!("customers.new") };
    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <Layout admin=true>
            <div class="max-w-2xl mx-auto space-y-4">
                <h1 class="text-2xl font-bold text-fg">{title.to_string()}</h1>
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <CustomerForm
                        form=vm.form
                        is_edit=is_edit
                        error=vm.error
                        pending=pending
                        locating=locating
                        on_zip_code_blur=Callback::new(move |cep: String| {
                            vm.lookup_zip_code(cep);
                        })
                        on_use_position=Callback::new(move |_| vm.locate_action.dispatch(()))
                        on_submit=on_submit
                    />
                </Show>
            </div>
        </Layout>
    }
}

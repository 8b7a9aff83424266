use crate::{
    api::ApiError,
    components::{
        error::InlineErrorMessage,
        forms::{CheckboxField, TextField},
    },
    pages::admin_customers::utils::CustomerFormState,
    utils::navigation,
};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;

#[component]
pub fn CustomerForm(
    form: RwSignal<CustomerFormState>,
    is_edit: bool,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] locating: Signal<bool>,
    on_zip_code_blur: Callback<String>,
    on_use_position: Callback<()>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let field = move |read: fn(&CustomerFormState) -> String| Signal::derive(move || form.with(read));

    view! {
        <form class="space-y-4 rounded-lg bg-check-card p-6 shadow" on:submit=move |ev| on_submit.call(ev)>
            <TextField
                id="customer-company-name"
                label=t!("fields.company_name").to_string()
                value=field(|f| f.company_name.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.company_name = v))
            />
            <TextField
                id="customer-cnpj"
                label=t!("fields.cnpj").to_string()
                value=field(|f| f.cnpj.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.set_cnpj(&v)))
                inputmode="numeric"
                placeholder="00.000.000/0000-00"
                disabled=is_edit
            />
            <div class="grid gap-4 sm:grid-cols-3">
                <TextField
                    id="customer-zip-code"
                    label=t!("fields.zip_code").to_string()
                    value=field(|f| f.zip_code.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.set_zip_code(&v)))
                    on_blur=on_zip_code_blur
                    inputmode="numeric"
                    placeholder="00000-000"
                />
                <div class="sm:col-span-2">
                    <TextField
                        id="customer-street"
                        label=t!("fields.street").to_string()
                        value=field(|f| f.street.clone())
                        on_input=Callback::new(move |v: String| form.update(|f| f.street = v))
                    />
                </div>
            </div>
            <div class="grid gap-4 sm:grid-cols-2">
                <TextField
                    id="customer-number"
                    label=t!("fields.number").to_string()
                    value=field(|f| f.number.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.number = v))
                />
                <TextField
                    id="customer-complement"
                    label=t!("fields.complement").to_string()
                    value=field(|f| f.complement.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.complement = v))
                />
            </div>
            <div class="grid gap-4 sm:grid-cols-3">
                <TextField
                    id="customer-neighborhood"
                    label=t!("fields.neighborhood").to_string()
                    value=field(|f| f.neighborhood.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.neighborhood = v))
                />
                <TextField
                    id="customer-city"
                    label=t!("fields.city").to_string()
                    value=field(|f| f.city.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.city = v))
                />
                <TextField
                    id="customer-state"
                    label=t!("fields.state").to_string()
                    value=field(|f| f.state.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.state = v))
                />
            </div>
            <div class="grid gap-4 sm:grid-cols-2">
                <TextField
                    id="customer-latitude"
                    label=t!("fields.latitude").to_string()
                    value=field(|f| f.latitude.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.latitude = v))
                    inputmode="decimal"
                />
                <TextField
                    id="customer-longitude"
                    label=t!("fields.longitude").to_string()
                    value=field(|f| f.longitude.clone())
                    on_input=Callback::new(move |v: String| form.update(|f| f.longitude = v))
                    inputmode="decimal"
                />
            </div>
            <button
                type="button"
                class="text-sm font-medium text-check-blue hover:underline disabled:opacity-50"
                disabled=move || locating.get()
                on:click=move |_| on_use_position.call(())
            >
                {move || if locating.get() { t!("visit.locating").to_string() } else { t!("customers.use_position").to_string() }}
            </button>
            <Show when=move || is_edit>
                <CheckboxField
                    id="customer-active"
                    label=t!("common.active").to_string()
                    checked=Signal::derive(move || form.with(|f| f.active))
                    on_toggle=Callback::new(move |checked: bool| form.update(|f| f.active = checked))
                />
            </Show>

            <InlineErrorMessage error=error />

            <div class="flex justify-end gap-2">
                <a
                    href=navigation::ADMIN_CUSTOMERS_LIST_PATH
                    class="inline-flex items-center rounded-lg px-4 py-2 text-sm font-semibold text-fg-muted hover:bg-surface-elevated"
                >
                    {t!("common.cancel").to_string()}
                </a>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="inline-flex items-center rounded-lg px-4 py-2 text-sm font-semibold text-white bg-check-green hover:bg-check-green-dark disabled:opacity-50"
                >
                    {move || if pending.get() { t!("common.saving").to_string() } else { t!("common.save").to_string() }}
                </button>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::customer;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn edit_form_shows_address_fields_and_active_toggle() {
        let html = render_to_string(move || {
            let form = create_rw_signal(CustomerFormState::from_customer(&customer("c1", "Acme Ltda")));
            view! {
                <CustomerForm
                    form=form
                    is_edit=true
                    error=Signal::derive(|| None)
                    pending=Signal::derive(|| false)
                    locating=Signal::derive(|| false)
                    on_zip_code_blur=Callback::new(|_| {})
                    on_use_position=Callback::new(|_| {})
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("id=\"customer-zip-code\""));
        assert!(html.contains("00.000.000/0000-00"));
        assert!(html.contains("id=\"customer-active\""));
        assert!(html.contains(t!("customers.use_position").as_ref()));
    }
}

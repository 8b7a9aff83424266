use crate::{
    api::ApiError,
    components::{
        error::InlineErrorMessage,
        forms::{CheckboxField, TextField},
    },
    pages::admin_sellers::utils::SellerFormState,
    utils::navigation,
};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;

#[component]
pub fn SellerForm(
    form: RwSignal<SellerFormState>,
    is_edit: bool,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let field = move |read: fn(&SellerFormState) -> String| Signal::derive(move || form.with(read));

    view! {
        <form class="space-y-4 rounded-lg bg-check-card p-6 shadow" on:submit=move |ev| on_submit.call(ev)>
            <TextField
                id="seller-name"
                label=t!("fields.name").to_string()
                value=field(|f| f.name.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
            />
            <TextField
                id="seller-cpf"
                label=t!("fields.cpf").to_string()
                value=field(|f| f.cpf.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.set_cpf(&v)))
                inputmode="numeric"
                placeholder="000.000.000-00"
                disabled=is_edit
            />
            <TextField
                id="seller-email"
                label=t!("fields.email").to_string()
                input_type="email"
                value=field(|f| f.email.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
            />
            <TextField
                id="seller-phone"
                label=t!("fields.phone").to_string()
                input_type="tel"
                value=field(|f| f.phone.clone())
                on_input=Callback::new(move |v: String| form.update(|f| f.phone = v))
            />
            {if is_edit {
                view! {
                    <CheckboxField
                        id="seller-active"
                        label=t!("common.active").to_string()
                        checked=Signal::derive(move || form.with(|f| f.active))
                        on_toggle=Callback::new(move |checked: bool| form.update(|f| f.active = checked))
                    />
                }
                .into_view()
            } else {
                view! {
                    <TextField
                        id="seller-password"
                        label=t!("fields.password").to_string()
                        input_type="password"
                        value=field(|f| f.password.clone())
                        on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                    />
                }
                .into_view()
            }}

            <InlineErrorMessage error=error />

            <div class="flex justify-end gap-2">
                <a
                    href=navigation::ADMIN_SELLERS_LIST_PATH
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
    use crate::test_support::ssr::render_to_string;

    fn render(is_edit: bool) -> String {
        render_to_string(move || {
            let form = create_rw_signal(SellerFormState::default());
            view! {
                <SellerForm
                    form=form
                    is_edit=is_edit
                    error=Signal::derive(|| None)
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn create_form_asks_for_password() {
        let html = render(false);
        assert!(html.contains("id=\"seller-password\""));
        assert!(!html.contains("id=\"seller-active\""));
    }

    #[test]
    fn edit_form_toggles_active_instead_of_password() {
        let html = render(true);
        assert!(!html.contains("id=\"seller-password\""));
        assert!(html.contains("id=\"seller-active\""));
    }
}

use crate::{api::ApiError, components::error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};
use rust_i18n::t;
use web_sys::HtmlInputElement;

#[component]
pub fn LoginForm(
    #[prop(into)] cpf: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] error: Signal<Option<ApiError>>,
    #[prop(into)] pending: Signal<bool>,
    on_cpf_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-check-blue py-12 px-4">
            <div class="max-w-md w-full space-y-8 rounded-2xl bg-check-card p-8 shadow-xl">
                <div class="text-center">
                    <h1 class="text-3xl font-extrabold text-check-blue">"CheckVisit"</h1>
                    <p class="mt-2 text-sm text-fg-muted">{t!("login.subtitle").to_string()}</p>
                </div>
                <form class="space-y-5" on:submit=move |ev| on_submit.call(ev)>
                    <div class="space-y-1">
                        <label for="cpf" class="block text-sm font-medium text-fg">{t!("fields.cpf").to_string()}</label>
                        <input
                            id="cpf"
                            name="cpf"
                            type="text"
                            inputmode="numeric"
                            autocomplete="username"
                            maxlength="14"
                            class="w-full rounded-lg border border-border px-3 py-2 text-fg focus:outline-none focus:ring-2 focus:ring-check-blue"
                            placeholder="000.000.000-00"
                            prop:value=move || cpf.get()
                            on:input=move |ev| {
                                on_cpf_input.call(event_target::<HtmlInputElement>(&ev).value());
                            }
                        />
                    </div>
                    <div class="space-y-1">
                        <label for="password" class="block text-sm font-medium text-fg">{t!("fields.password").to_string()}</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            autocomplete="current-password"
                            class="w-full rounded-lg border border-border px-3 py-2 text-fg focus:outline-none focus:ring-2 focus:ring-check-blue"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                on_password_input.call(event_target::<HtmlInputElement>(&ev).value());
                            }
                        />
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center rounded-lg py-2 px-4 text-sm font-semibold text-white bg-check-green hover:bg-check-green-dark disabled:opacity-50"
                    >
                        {move || if pending.get() { t!("login.submitting").to_string() } else { t!("login.submit").to_string() }}
                    </button>
                </form>
            </div>
        </div>
    }
}

use crate::api::Customer;
use leptos::ev::KeyboardEvent;
use leptos::*;
use rust_i18n::t;
use web_sys::HtmlTextAreaElement;

#[component]
pub fn CheckoutDialog(
    #[prop(into)] customer: Signal<Option<Customer>>,
    #[prop(into)] summary: Signal<String>,
    on_summary_input: Callback<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let blank = move || summary.get().trim().is_empty();
    view! {
        <Show when=move || customer.get().is_some()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label=t!("common.close").to_string()
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-check-card shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{t!("visit.check_out_title").to_string()}</h2>
                    <p class="text-sm text-fg-muted">
                        {move || customer.get().map(|c| c.company_name).unwrap_or_default()}
                    </p>
                    <label for="check-out-summary" class="block text-sm font-medium text-fg">
                        {t!("visit.summary_label").to_string()}
                    </label>
                    <textarea
                        id="check-out-summary"
                        rows="4"
                        class="w-full rounded-lg border border-border px-3 py-2 text-fg focus:outline-none focus:ring-2 focus:ring-check-blue"
                        placeholder=t!("visit.summary_placeholder").to_string()
                        prop:value=move || summary.get()
                        on:input=move |ev| {
                            on_summary_input.call(event_target::<HtmlTextAreaElement>(&ev).value());
                        }
                    ></textarea>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_cancel.call(())
                        >
                            {t!("common.cancel").to_string()}
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                            disabled=blank
                            on:click=move |_| on_confirm.call(())
                        >
                            {t!("visit.finish").to_string()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

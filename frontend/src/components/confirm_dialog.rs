use leptos::ev::KeyboardEvent;
use leptos::*;
use rust_i18n::t;

fn label_or(text: String, key: &str) -> String {
    if text.trim().is_empty() {
        t!(key).to_string()
    } else {
        text
    }
}

#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_button_class = if destructive {
        "inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
    } else {
        "inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold bg-check-blue text-white hover:bg-check-blue-dark disabled:opacity-50"
    };

    let confirm_label_text = Signal::derive(move || label_or(confirm_label.get(), "common.yes"));
    let cancel_label_text = Signal::derive(move || label_or(cancel_label.get(), "common.no"));

    view! {
        <Show when=move || is_open.get()>
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
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{let title = title.clone(); move || title.get()}</h2>
                    <p class="text-sm text-fg-muted">{let message = message.clone(); move || message.get()}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_cancel.call(())
                        >
                            {move || cancel_label_text.get()}
                        </button>
                        <button
                            type="button"
                            class=confirm_button_class
                            disabled={let confirm_disabled = confirm_disabled.clone(); move || confirm_disabled.get()}
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_label_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Single-button dialog for failures the user must acknowledge.
#[component]
pub fn AlertDialog(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let title_text = Signal::derive(move || label_or(title.get(), "common.error"));
    view! {
        <Show when=move || message.get().is_some()>
            <div class="fixed inset-0 z-[75] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-overlay-backdrop"></div>
                <div
                    class="relative z-[76] w-full max-w-sm rounded-lg bg-check-card shadow-xl border border-status-error-border p-6 space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                >
                    <h2 class="text-lg font-semibold text-status-error-text">{move || title_text.get()}</h2>
                    <p class="text-sm text-fg">{move || message.get().unwrap_or_default()}</p>
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-lg px-4 py-2 text-sm font-semibold bg-check-blue text-white hover:bg-check-blue-dark"
                            on:click=move |_| on_close.call(())
                        >
                            {t!("common.ok").to_string()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_dialog_renders_with_default_labels() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <ConfirmDialog
                    is_open=is_open
                    title="Check-in"
                    message="Confirmar check-in em Acme?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("aria-modal=\"true\""));
        assert!(html.contains("Confirmar check-in em Acme?"));
        assert!(html.contains(t!("common.yes").as_ref()));
        assert!(html.contains(t!("common.no").as_ref()));
    }

    #[test]
    fn closed_confirm_dialog_renders_nothing() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| false)
                    title="t"
                    message="hidden-message"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("hidden-message"));
    }

    #[test]
    fn alert_dialog_shows_message() {
        let html = render_to_string(move || {
            let message = create_rw_signal(Some("GPS negado".to_string()));
            view! { <AlertDialog message=message on_close=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("role=\"alertdialog\""));
        assert!(html.contains("GPS negado"));
    }
}

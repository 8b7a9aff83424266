use leptos::*;
use web_sys::HtmlInputElement;

/// Labelled input. `on_input` receives the raw value; masking, if any, is the
/// caller's job.
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] inputmode: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_blur: Option<Callback<String>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());
    view! {
        <div class="space-y-1">
            <label for=id.clone() class="block text-sm font-medium text-fg">{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder.unwrap_or_default()
                inputmode=inputmode
                class="w-full rounded-lg border border-border bg-check-card px-3 py-2 text-fg focus:outline-none focus:ring-2 focus:ring-check-blue disabled:bg-surface-muted disabled:text-fg-muted"
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.call(event_target::<HtmlInputElement>(&ev).value())
                on:blur=move |ev| {
                    if let Some(cb) = on_blur {
                        cb.call(event_target::<HtmlInputElement>(&ev).value());
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label for=id.clone() class="inline-flex items-center gap-2 text-sm text-fg">
            <input
                id=id
                type="checkbox"
                class="h-4 w-4 rounded border-border text-check-blue"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.call(event_target::<HtmlInputElement>(&ev).checked())
            />
            {label}
        </label>
    }
}

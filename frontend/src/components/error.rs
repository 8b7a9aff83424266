use crate::api::{ApiError, ApiErrorKind};
use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2 text-sm"
                data-kind=move || error.get().map(|e| kind_attr(e.kind)).unwrap_or_default()
            >
                {move || error.get().map(|e| e.message).unwrap_or_default()}
            </div>
        </Show>
    }
}

fn kind_attr(kind: ApiErrorKind) -> &'static str {
    match kind {
        ApiErrorKind::Network => "network",
        ApiErrorKind::Validation => "validation",
        ApiErrorKind::Unauthorized => "unauthorized",
        ApiErrorKind::Geolocation => "geolocation",
    }
}

use crate::state::{
    auth::{use_auth, use_logout},
    locale::{use_locale, Locale},
};
use leptos::*;
use rust_i18n::t;
use web_sys::HtmlSelectElement;

#[component]
pub fn LanguageSelector() -> impl IntoView {
    let locale = use_locale();
    let on_change = move |ev: leptos::ev::Event| {
        let code = event_target::<HtmlSelectElement>(&ev).value();
        if let Some(selected) = Locale::from_code(&code) {
            locale.change(selected);
        }
    };
    view! {
        <select
            aria-label=t!("header.language").to_string()
            class="rounded-md border border-white/40 bg-transparent text-white text-sm px-2 py-1"
            on:change=on_change
        >
            {Locale::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <option
                            class="text-fg"
                            value=option.code()
                            selected=move || locale.current.get() == option
                        >
                            {option.native_name()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// Top bar for signed-in pages. Admin pages add the language selector.
#[component]
pub fn Header(#[prop(optional)] admin: bool) -> impl IntoView {
    let (auth, _) = use_auth();
    let on_logout = use_logout();
    let greeting = move || t!("header.greeting", name = auth.get().display_name()).to_string();
    let subtitle = if admin {
        t!("header.admin_area").to_string()
    } else {
        t!("header.seller_area").to_string()
    };
    view! {
        <header class="bg-check-blue text-white shadow-sm">
            <div class="max-w-5xl mx-auto px-4 h-16 flex items-center justify-between gap-3">
                <div class="min-w-0">
                    <p class="text-lg font-semibold truncate">{greeting}</p>
                    <p class="text-xs opacity-80">{subtitle}</p>
                </div>
                <div class="flex items-center gap-3">
                    <Show when=move || admin>
                        <LanguageSelector />
                    </Show>
                    <button
                        class="rounded-md px-3 py-1 text-sm font-medium border border-white/40 hover:bg-white/10"
                        on:click=move |_| on_logout.call(())
                    >
                        {t!("header.logout").to_string()}
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(#[prop(optional)] admin: bool, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header admin=admin />
            <main class="max-w-5xl mx-auto py-6 px-4">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-check-blue"></div>
        </div>
    }
}

/// Blocking overlay shown while a position fix is pending.
#[component]
pub fn BusyOverlay(#[prop(into)] visible: Signal<bool>, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="fixed inset-0 z-[72] flex items-center justify-center bg-overlay-backdrop" role="progressbar">
                <div class="rounded-lg bg-check-card px-6 py-4 shadow-xl flex items-center gap-3">
                    <div class="animate-spin rounded-full h-6 w-6 border-b-2 border-check-blue"></div>
                    <p class="text-sm text-fg">{message.clone()}</p>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

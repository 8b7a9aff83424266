use leptos::*;

pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn classes(&self) -> &'static str {
        match self {
            ToastKind::Success => "bg-status-success-bg border-status-success-border text-status-success-text",
            ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
            ToastKind::Warning => "bg-status-warning-bg border-status-warning-border text-status-warning-text",
            ToastKind::Info => "bg-surface-elevated border-border text-fg",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

/// One toast at a time; a newer toast replaces the visible one.
#[derive(Clone, Copy)]
pub struct ToastContext {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: store_value(1),
        }
    }

    pub fn show(&self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.current.set(Some(Toast {
            id,
            kind,
            title: title.into(),
            message: message.into(),
        }));
        self.schedule_dismiss(id);
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ToastKind::Success, title, message);
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ToastKind::Warning, title, message);
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(ToastKind::Error, title, message);
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.get()
    }

    pub fn current_untracked(&self) -> Option<Toast> {
        self.current.get_untracked()
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    /// Dismisses toast `id` unless it was already replaced.
    pub fn dismiss_if_current(&self, id: u64) {
        if self.current.get_untracked().map(|toast| toast.id) == Some(id) {
            self.current.set(None);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let ctx = *self;
        gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
            ctx.dismiss_if_current(id);
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> ToastContext {
    let ctx = ToastContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(provide_toasts)
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        {move || toasts.current().map(|toast| {
            let classes = format!(
                "fixed top-4 left-1/2 -translate-x-1/2 z-[80] w-[90%] max-w-md border rounded-lg shadow-lg px-4 py-3 {}",
                toast.kind.classes()
            );
            view! {
                <div class=classes role="status" on:click=move |_| toasts.dismiss()>
                    <p class="font-semibold">{toast.title}</p>
                    <Show when={
                        let empty = toast.message.is_empty();
                        move || !empty
                    }>
                        <p class="text-sm mt-1">{toast.message.clone()}</p>
                    </Show>
                </div>
            }
        })}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod runtime_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn newer_toast_survives_stale_dismissal() {
        with_runtime(|| {
            let ctx = ToastContext::new();
            ctx.success("Salvo", "");
            let first = ctx.current_untracked().unwrap().id;
            ctx.error("Erro", "falhou");
            ctx.dismiss_if_current(first);
            let visible = ctx.current_untracked().unwrap();
            assert_eq!(visible.kind, ToastKind::Error);
            ctx.dismiss_if_current(visible.id);
            assert!(ctx.current_untracked().is_none());
        });
    }
}

use leptos::*;

use crate::utils::storage::{BrowserStorage, KeyValueStore};

pub const LANGUAGE_KEY: &str = "@CheckVisit:language";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Pt,
    En,
    Es,
    Fr,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::Pt, Locale::En, Locale::Es, Locale::Fr, Locale::Zh];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::Zh => "zh",
        }
    }

    /// Name shown in the language selector, always in its own language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Pt => "Português",
            Locale::En => "English",
            Locale::Es => "Español",
            Locale::Fr => "Français",
            Locale::Zh => "中文",
        }
    }

    /// Accepts bare codes and region tags such as `pt-BR` or `zh_CN`.
    pub fn from_code(raw: &str) -> Option<Locale> {
        let primary = raw
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        Locale::ALL.into_iter().find(|locale| locale.code() == primary)
    }
}

pub fn stored_locale(store: &dyn KeyValueStore) -> Locale {
    store
        .get(LANGUAGE_KEY)
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or_default()
}

pub fn persist_locale(store: &dyn KeyValueStore, locale: Locale) {
    if let Err(err) = store.set(LANGUAGE_KEY, locale.code()) {
        log::warn!("could not persist language: {}", err);
    }
}

/// Makes `locale` the active translation table.
pub fn apply_locale(locale: Locale) {
    rust_i18n::set_locale(locale.code());
}

/// Restores the persisted language before the first render.
pub fn restore_locale() -> Locale {
    let locale = stored_locale(&BrowserStorage);
    apply_locale(locale);
    locale
}

#[derive(Clone, Copy)]
pub struct LocaleContext {
    pub current: RwSignal<Locale>,
}

impl LocaleContext {
    pub fn change(&self, locale: Locale) {
        if self.current.get_untracked() == locale {
            return;
        }
        apply_locale(locale);
        persist_locale(&BrowserStorage, locale);
        log::info!("language switched to {}", locale.code());
        self.current.set(locale);
    }
}

pub fn provide_locale(initial: Locale) -> LocaleContext {
    let ctx = LocaleContext {
        current: create_rw_signal(initial),
    };
    provide_context(ctx);
    ctx
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().unwrap_or_else(|| LocaleContext {
        current: create_rw_signal(Locale::default()),
    })
}

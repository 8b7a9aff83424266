use leptos::*;

rust_i18n::i18n!("locales", fallback = "pt");

mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: panic hook, console logging, runtime config, locale,
/// then the application.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {}", err).into());
    }
    log::info!("starting CheckVisit frontend");

    spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
    });

    let locale = state::locale::restore_locale();
    router::mount_app(locale);
}

use crate::{
    api::Customer,
    config,
    utils::map_tiles::{self, TILE_SIZE},
};
use leptos::*;
use rust_i18n::t;

const VIEWPORT: f64 = 2.0 * TILE_SIZE;

/// Static tile map centred on `latitude`/`longitude` with a pin.
#[component]
pub fn TileMap(latitude: f64, longitude: f64, #[prop(optional)] zoom: Option<u8>) -> impl IntoView {
    let anchor = map_tiles::anchor_for(latitude, longitude, zoom.unwrap_or(map_tiles::DEFAULT_ZOOM));
    let tiles = map_tiles::surrounding_tiles(&anchor, &config::current().map_tile_url);
    let (pin_x, pin_y) = map_tiles::pin_position(&anchor);
    // Shift the 768px grid so the pin lands in the middle of the viewport.
    let shift_x = VIEWPORT / 2.0 - pin_x;
    let shift_y = VIEWPORT / 2.0 - pin_y;

    view! {
        <div
            class="relative overflow-hidden rounded-lg bg-surface-muted mx-auto"
            style=format!("width:{}px;height:{}px;max-width:100%", VIEWPORT, VIEWPORT)
        >
            <div
                class="absolute"
                style=format!("left:{:.1}px;top:{:.1}px;width:{}px;height:{}px", shift_x, shift_y, 3.0 * TILE_SIZE, 3.0 * TILE_SIZE)
            >
                {tiles
                    .into_iter()
                    .map(|tile| view! {
                        <img
                            src=tile.url
                            alt=""
                            draggable="false"
                            class="absolute select-none"
                            style=format!("left:{}px;top:{}px;width:{}px;height:{}px", tile.left, tile.top, TILE_SIZE, TILE_SIZE)
                        />
                    })
                    .collect_view()}
            </div>
            <div
                class="absolute -translate-x-1/2 -translate-y-full text-3xl text-status-error-text"
                style=format!("left:{}px;top:{}px", VIEWPORT / 2.0, VIEWPORT / 2.0)
                aria-hidden="true"
            >
                "📍"
            </div>
            <p class="absolute bottom-0 right-0 bg-white/80 px-1 text-[10px] text-fg-muted">
                "© OpenStreetMap"
            </p>
        </div>
    }
}

#[component]
pub fn MapModal(#[prop(into)] customer: Signal<Option<Customer>>, on_close: Callback<()>) -> impl IntoView {
    view! {
        {move || customer.get().map(|customer| {
            let address = customer.address.display_line();
            view! {
                <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                    <button
                        type="button"
                        aria-label=t!("common.close").to_string()
                        class="absolute inset-0 bg-overlay-backdrop"
                        on:click=move |_| on_close.call(())
                    ></button>
                    <div class="relative z-[71] w-full max-w-xl rounded-lg bg-check-card shadow-xl p-4 space-y-3" role="dialog" aria-modal="true">
                        <div class="flex items-start justify-between gap-3">
                            <div>
                                <h2 class="text-lg font-semibold text-fg">{customer.company_name.clone()}</h2>
                                <p class="text-sm text-fg-muted">{address}</p>
                            </div>
                            <button
                                type="button"
                                class="text-fg-muted hover:text-fg"
                                aria-label=t!("common.close").to_string()
                                on:click=move |_| on_close.call(())
                            >
                                "✕"
                            </button>
                        </div>
                        <TileMap latitude=customer.latitude longitude=customer.longitude />
                        <p class="text-xs text-fg-muted text-center">
                            {format!("{:.6}, {:.6}", customer.latitude, customer.longitude)}
                        </p>
                    </div>
                </div>
            }
        })}
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::customer;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn map_modal_renders_customer_and_tiles() {
        let html = render_to_string(move || {
            let selected = create_rw_signal(Some(customer("c1", "Acme Ltda")));
            view! { <MapModal customer=selected on_close=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Acme Ltda"));
        assert!(html.contains("tile.openstreetmap.org/16/24284/37171.png"));
        assert_eq!(html.matches("<img").count(), 9);
    }

    #[test]
    fn map_modal_hidden_without_customer() {
        let html = render_to_string(move || {
            let selected = create_rw_signal(None::<Customer>);
            view! { <MapModal customer=selected on_close=Callback::new(|_| {}) /> }
        });
        assert!(!html.contains("role=\"dialog\""));
    }
}

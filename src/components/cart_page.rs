use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, CheckoutClient};
use crate::models::{format_price, parse_quantity, CartLine, CartState};

/// Cart contents with quantity editing, removal, and the checkout hand-off.
#[component]
pub fn CartPage() -> impl IntoView {
    let state = use_context::<CartState>().expect("CartState context missing");
    let checkout_error = RwSignal::new(None::<ApiError>);
    let checkout_pending = RwSignal::new(false);

    view! {
        <section class="page">
            <h2 class="page-title">"Warenkorb"</h2>
            <Show
                when=move || state.has_lines()
                fallback=|| view! { <p class="muted">"Dein Warenkorb ist leer."</p> }
            >
                <div class="cart-layout">
                    <div class="cart-lines">
                        {move || {
                            state
                                .get()
                                .lines()
                                .iter()
                                .enumerate()
                                .map(|(index, line)| {
                                    view! { <CartRow index=index line=line.clone() /> }
                                })
                                .collect_view()
                        }}
                    </div>
                    <div class="cart-summary">
                        <div class="summary-row">
                            <span>"Zwischensumme"</span>
                            <span>{move || format_price(state.subtotal_cents())}</span>
                        </div>
                        {move || {
                            checkout_error
                                .get()
                                .map(|_| {
                                    view! {
                                        <p class="error-notice">
                                            "Checkout konnte nicht gestartet werden. Versuch es gleich nochmal."
                                        </p>
                                    }
                                })
                        }}
                        <button
                            class="button primary wide"
                            prop:disabled=move || checkout_pending.get()
                            on:click=move |_| start_checkout(state, checkout_error, checkout_pending)
                        >
                            "Zur Kasse"
                        </button>
                    </div>
                </div>
            </Show>
        </section>
    }
}

/// One editable cart line. Edits rebuild the cart and go through
/// `CartState::replace`, which persists as a side effect.
#[component]
fn CartRow(index: usize, line: CartLine) -> impl IntoView {
    let state = use_context::<CartState>().expect("CartState context missing");

    let on_quantity = move |ev: leptos::ev::Event| {
        let mut cart = state.get();
        cart.set_quantity(index, parse_quantity(&event_target_value(&ev)));
        state.replace(cart);
    };
    let on_remove = move |_| {
        let mut cart = state.get();
        cart.remove(index);
        state.replace(cart);
    };

    view! {
        <div class="cart-line">
            <img
                class="cart-line-image"
                src=line.product.image.clone()
                alt=line.product.title.clone()
            />
            <div class="cart-line-info">
                <div class="cart-line-title">{line.product.title.clone()}</div>
                <div class="cart-line-variant">{format!("{} • {}", line.size, line.color)}</div>
            </div>
            <input
                type="number"
                min="1"
                class="quantity-input small"
                prop:value=line.quantity.to_string()
                on:change=on_quantity
            />
            <button class="link-button" on:click=on_remove>"Entfernen"</button>
        </div>
    }
}

/// Create a checkout session for the current cart and send the browser to the
/// hosted payment page. The cart itself is never touched here; it only goes
/// away if the shopper clears it, not because a payment was attempted.
fn start_checkout(
    state: CartState,
    error: RwSignal<Option<ApiError>>,
    pending: RwSignal<bool>,
) {
    let items = state.get().checkout_items();
    // Nothing to check out
    if items.is_empty() {
        return;
    }
    // One session at a time
    if pending.get() {
        return;
    }
    pending.set(true);
    error.set(None);
    spawn_local(async move {
        match CheckoutClient::from_env().create_session(&items).await {
            Ok(url) => redirect_to(&url),
            Err(err) => {
                log::error!("failed to create checkout session: {err}");
                error.set(Some(err));
                pending.set(false);
            }
        }
    });
}

/// Browser-level navigation to the payment page.
fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(url) {
            log::error!("redirect to checkout failed: {err:?}");
        }
    }
}

//! Cart persistence in browser `localStorage`.
//!
//! A cart that fails to decode is treated as absent: the shop must keep
//! working after a schema change or a hand-edited value, so decode errors
//! reset to an empty cart and are only logged.

use crate::models::Cart;

/// localStorage key holding the serialized cart.
pub const CART_KEY: &str = "ducktees_cart";

/// Decode a persisted cart payload, falling back to an empty cart.
pub fn parse_cart(raw: &str) -> Cart {
    match serde_json::from_str(raw) {
        Ok(cart) => cart,
        Err(err) => {
            log::warn!("discarding unreadable cart payload: {err}");
            Cart::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the persisted cart, or an empty cart if there is none.
#[cfg(target_arch = "wasm32")]
pub fn load_cart() -> Cart {
    let Some(storage) = local_storage() else {
        return Cart::default();
    };
    match storage.get_item(CART_KEY) {
        Ok(Some(raw)) => parse_cart(&raw),
        Ok(None) => Cart::default(),
        Err(err) => {
            log::warn!("failed to read cart from localStorage: {err:?}");
            Cart::default()
        }
    }
}

/// Persist the cart. Storage failures (quota, private mode) are logged
/// and otherwise ignored; the in-memory cart stays authoritative.
#[cfg(target_arch = "wasm32")]
pub fn save_cart(cart: &Cart) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(cart) {
        Ok(json) => {
            if let Err(err) = storage.set_item(CART_KEY, &json) {
                log::warn!("failed to persist cart: {err:?}");
            }
        }
        Err(err) => log::warn!("failed to serialize cart: {err}"),
    }
}

/// Non-browser builds have no localStorage; the cart is session-only.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_cart() -> Cart {
    Cart::default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_cart(_cart: &Cart) {}

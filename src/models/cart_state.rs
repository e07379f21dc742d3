use leptos::prelude::*;

use crate::models::{Cart, CartLine};
use crate::storage;

/// Reactive cart shared with every page via `use_context()`.
/// Mutations persist the new cart before returning.
#[derive(Clone, Copy)]
pub struct CartState {
    cart: RwSignal<Cart>,
}

impl CartState {
    /// Build the cart state from whatever the browser has persisted.
    pub fn restore() -> Self {
        Self {
            cart: RwSignal::new(storage::load_cart()),
        }
    }

    /// Append a line. Identical variants stay separate lines.
    pub fn add(&self, line: CartLine) {
        self.cart.update(|cart| cart.add(line));
        self.cart.with_untracked(storage::save_cart);
    }

    /// Swap in a whole new cart (quantity edits and removals build one).
    pub fn replace(&self, cart: Cart) {
        storage::save_cart(&cart);
        self.cart.set(cart);
    }

    /// Current cart contents (tracked).
    pub fn get(&self) -> Cart {
        self.cart.get()
    }

    /// Number of lines, not summed quantities. Drives the navbar badge.
    pub fn count(&self) -> usize {
        self.cart.with(Cart::len)
    }

    /// True once the cart holds at least one line.
    pub fn has_lines(&self) -> bool {
        self.cart.with(|cart| !cart.is_empty())
    }

    /// Sum of `price_cents * quantity` over all lines.
    pub fn subtotal_cents(&self) -> u64 {
        self.cart.with(Cart::subtotal_cents)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::restore()
    }
}

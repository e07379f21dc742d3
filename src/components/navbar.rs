use leptos::prelude::*;

use crate::models::CartState;

/// Sticky top navigation with the cart badge.
/// The badge counts cart lines, not summed quantities.
#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_context::<CartState>().expect("CartState context missing");

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <a href="/" class="brand">
                    <span class="brand-mark" aria-hidden="true">"🦆"</span>
                    "Duck Tees"
                </a>
                <nav class="nav-links">
                    <a href="/products">"Produkte"</a>
                    <a href="/faq">"FAQ"</a>
                    <a href="/contact">"Kontakt"</a>
                </nav>
                <a href="/cart" class="cart-link" aria-label="Warenkorb">
                    <span aria-hidden="true">"🛒"</span>
                    <Show when=move || state.has_lines()>
                        <span class="cart-badge">{move || state.count()}</span>
                    </Show>
                </a>
            </div>
        </header>
    }
}

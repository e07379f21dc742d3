use leptos::prelude::*;

/// Site footer with secondary navigation.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span aria-hidden="true">"🦆"</span>
                    " Duck Tees — Gute Laune seit 2025"
                </div>
                <nav class="footer-links">
                    <a href="/faq">"FAQ"</a>
                    <a href="/contact">"Kontakt"</a>
                </nav>
            </div>
        </footer>
    }
}

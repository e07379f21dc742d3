use leptos::prelude::*;

/// Landing banner above the home page product grid.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-inner">
                <div class="hero-copy">
                    <h1>"Enten, die Laune machen."</h1>
                    <p>
                        "Minimalistische Bio-T-Shirts mit fröhlichen, natur-inspirierten Duck-Designs."
                    </p>
                    <div class="hero-actions">
                        <a href="/products" class="button primary">"Shop starten"</a>
                        <a href="/faq" class="button secondary">"Mehr erfahren"</a>
                    </div>
                    <ul class="hero-points">
                        <li>"Bio-Baumwolle"</li>
                        <li>"Klimaneutral gedruckt"</li>
                        <li>"Von Enten inspiriert 🦆"</li>
                    </ul>
                </div>
                <div class="hero-art" aria-hidden="true">"🦆"</div>
            </div>
        </section>
    }
}

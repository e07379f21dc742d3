use leptos::prelude::*;

/// Static contact page.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class="page narrow">
            <h2 class="page-title">"Kontakt"</h2>
            <p>
                "Schreib uns eine Nachricht an hello@ducktees.shop oder nutze unsere Socials. Wir antworten schnell und freundlich."
            </p>
        </section>
    }
}

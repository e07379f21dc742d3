use leptos::prelude::*;

const FAQ_ITEMS: [(&str, &str); 3] = [
    ("Welche Größen gibt es?", "S bis XL. Fällt normal aus."),
    ("Wie ist das Material?", "100% Bio-Baumwolle, fair produziert."),
    ("Wie lange dauert der Versand?", "2-4 Werktage innerhalb Deutschlands."),
];

/// Frequently asked questions as native disclosure widgets.
#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section class="page narrow">
            <h2 class="page-title">"FAQ"</h2>
            <div class="faq-list">
                {FAQ_ITEMS
                    .iter()
                    .map(|(question, answer)| {
                        view! {
                            <details class="faq-item">
                                <summary>{*question}</summary>
                                <p>{*answer}</p>
                            </details>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

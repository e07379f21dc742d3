use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use crate::api::{ApiError, CheckoutClient, SessionStatus};
use crate::models::format_price;

/// Post-payment landing page. Reads `session_id` from the query string and
/// shows the payment outcome when one is present; without a session id the
/// status lookup is skipped entirely.
#[component]
pub fn CheckoutSuccess() -> impl IntoView {
    let query = use_query_map();
    let status = RwSignal::new(None::<SessionStatus>);
    let status_error = RwSignal::new(None::<ApiError>);

    let fetch_started = std::cell::Cell::new(false);
    Effect::new(move |_| {
        if fetch_started.get() {
            return;
        }
        fetch_started.set(true);
        let Some(session_id) = query.get_untracked().get("session_id") else {
            return;
        };
        spawn_local(async move {
            match CheckoutClient::from_env().session_status(&session_id).await {
                Ok(loaded) => status.set(Some(loaded)),
                Err(err) => {
                    log::error!("failed to load session status: {err}");
                    status_error.set(Some(err));
                }
            }
        });
    });

    view! {
        <section class="page narrow centered">
            <h2 class="page-title">"Danke für deinen Einkauf!"</h2>
            <p class="muted">"Deine Enten-T-Shirts sind bald auf dem Weg."</p>
            {move || {
                status
                    .get()
                    .map(|loaded| {
                        view! {
                            <div class="status-card">
                                <div>{format!("Status: {}", loaded.payment_status)}</div>
                                <div>{format!("Betrag: {}", format_price(loaded.amount_total))}</div>
                            </div>
                        }
                    })
            }}
            {move || {
                status_error
                    .get()
                    .map(|_| {
                        view! {
                            <p class="error-notice">"Zahlungsstatus konnte nicht geladen werden."</p>
                        }
                    })
            }}
            <a href="/products" class="button primary">"Weiter shoppen"</a>
        </section>
    }
}

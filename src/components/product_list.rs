use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiError, CatalogClient};
use crate::models::{format_price, Product};

/// Product grid, fetched from the catalog on mount.
#[component]
pub fn ProductList() -> impl IntoView {
    let products = RwSignal::new(None::<Result<Vec<Product>, ApiError>>);

    // Fetch once per component instance
    let fetch_started = std::cell::Cell::new(false);
    Effect::new(move |_| {
        if !fetch_started.get() {
            fetch_started.set(true);
            spawn_local(async move {
                let result = CatalogClient::from_env().list_products().await;
                if let Err(err) = &result {
                    log::error!("failed to load catalog: {err}");
                }
                products.set(Some(result));
            });
        }
    });

    view! {
        <section class="page">
            <h2 class="page-title">"Unsere T-Shirts"</h2>
            {move || match products.get() {
                None => view! { <p class="muted">"Laden..."</p> }.into_any(),
                Some(Err(_)) => {
                    view! {
                        <p class="error-notice">
                            "Produkte konnten nicht geladen werden. Versuch es später nochmal."
                        </p>
                    }
                        .into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <div class="product-grid">
                            {list
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product /> })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// One card in the grid, linking to the product page.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/products/{}", product.slug);
    let image = product.first_image().map(str::to_string);
    let price = format_price(u64::from(product.price_cents));

    view! {
        <a href=href class="product-card">
            <div class="product-card-image">
                <img src=image alt=product.title.clone() />
            </div>
            <div class="product-card-body">
                <h3>{product.title}</h3>
                <p class="price">{price}</p>
            </div>
        </a>
    }
}

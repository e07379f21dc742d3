use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::api::{ApiError, CatalogClient};
use crate::models::{format_price, parse_quantity, CartLine, CartState, Product};

/// Product page with size, color, and quantity selection.
///
/// The fetch tracks the `:slug` route param, so navigating between products
/// refetches and resets the selection. In-flight fetches are not aborted.
#[component]
pub fn ProductDetail() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.get().get("slug").unwrap_or_default());

    let product = RwSignal::new(None::<Product>);
    let load_error = RwSignal::new(None::<ApiError>);
    let size = RwSignal::new(String::from("M"));
    let color = RwSignal::new(String::from("Forest Green"));
    let quantity = RwSignal::new(1u32);

    Effect::new(move |_| {
        let slug = slug.get();
        spawn_local(async move {
            match CatalogClient::from_env().product(&slug).await {
                Ok(loaded) => {
                    size.set(loaded.default_size());
                    color.set(loaded.default_color());
                    quantity.set(1);
                    load_error.set(None);
                    product.set(Some(loaded));
                }
                Err(err) => {
                    log::error!("failed to load product `{slug}`: {err}");
                    load_error.set(Some(err));
                }
            }
        });
    });

    view! {
        <section class="page">
            {move || match (load_error.get(), product.get()) {
                (Some(err), _) => {
                    view! { <p class="error-notice">{detail_error_message(&err)}</p> }.into_any()
                }
                (None, None) => view! { <p class="muted">"Laden..."</p> }.into_any(),
                (None, Some(loaded)) => {
                    view! {
                        <ProductView product=loaded size=size color=color quantity=quantity />
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// Loaded product with variant pickers and the add-to-cart form.
#[component]
fn ProductView(
    product: Product,
    size: RwSignal<String>,
    color: RwSignal<String>,
    quantity: RwSignal<u32>,
) -> impl IntoView {
    let state = use_context::<CartState>().expect("CartState context missing");

    let image = product.first_image().map(str::to_string);
    let price = format_price(u64::from(product.price_cents));

    let add_product = product.clone();
    let add_to_cart = move |_| {
        state.add(CartLine::new(
            &add_product,
            size.get(),
            color.get(),
            quantity.get(),
        ));
    };

    view! {
        <div class="product-detail">
            <div class="product-detail-image">
                <img src=image alt=product.title.clone() />
            </div>
            <div class="product-detail-info">
                <h1>{product.title.clone()}</h1>
                <p class="description">{product.description.clone()}</p>
                <p class="price large">{price}</p>

                <label class="field-label">"Größe"</label>
                <VariantPicker options=product.sizes.clone() selected=size />

                <label class="field-label">"Farbe"</label>
                <VariantPicker options=product.colors.clone() selected=color />

                <div class="add-row">
                    <input
                        type="number"
                        min="1"
                        class="quantity-input"
                        prop:value=move || quantity.get().to_string()
                        on:input=move |ev| quantity.set(parse_quantity(&event_target_value(&ev)))
                    />
                    <button class="button primary" on:click=add_to_cart>
                        "In den Warenkorb"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Row of pill buttons for one variant dimension.
#[component]
fn VariantPicker(options: Vec<String>, selected: RwSignal<String>) -> impl IntoView {
    view! {
        <div class="variant-row">
            {options
                .into_iter()
                .map(|option| {
                    let class_option = option.clone();
                    let click_option = option.clone();
                    view! {
                        <button
                            class=move || {
                                if selected.get() == class_option {
                                    "variant-pill selected"
                                } else {
                                    "variant-pill"
                                }
                            }
                            on:click=move |_| selected.set(click_option.clone())
                        >
                            {option}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// User-facing message for a failed product load.
fn detail_error_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::NotFound(_) => "Dieses Produkt gibt es nicht (mehr).",
        _ => "Produkt konnte nicht geladen werden. Versuch es später nochmal.",
    }
}

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{
    CartPage, CheckoutSuccess, Contact, Faq, Footer, Hero, Navbar, ProductDetail, ProductList,
};
use crate::models::CartState;

/// Root component: restores the persisted cart, provides it as context, and
/// wires the routes into the shared page shell.
#[component]
pub fn App() -> impl IntoView {
    let state = CartState::restore();
    provide_context(state);

    view! {
        <Router>
            <div class="shell">
                <Navbar />
                <main class="content">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/products") view=ProductList />
                        <Route path=path!("/products/:slug") view=ProductDetail />
                        <Route path=path!("/cart") view=CartPage />
                        <Route path=path!("/checkout/success") view=CheckoutSuccess />
                        <Route path=path!("/faq") view=Faq />
                        <Route path=path!("/contact") view=Contact />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// Landing page: hero banner plus the product grid.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <ProductList />
    }
}

/// Fallback for unknown paths.
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="page narrow centered">
            <h2 class="page-title">"Hier gibt es nichts zu sehen."</h2>
            <a href="/" class="button primary">"Zur Startseite"</a>
        </section>
    }
}

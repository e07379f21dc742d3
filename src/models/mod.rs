pub mod cart;
pub mod cart_state;
pub mod product;

pub use cart::{parse_quantity, Cart, CartLine, CheckoutItem, LineSnapshot};
pub use cart_state::CartState;
pub use product::{format_price, Product};

pub mod cart_page;
pub mod checkout_success;
pub mod contact;
pub mod faq;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod product_detail;
pub mod product_list;

pub use cart_page::CartPage;
pub use checkout_success::CheckoutSuccess;
pub use contact::Contact;
pub use faq::Faq;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use product_detail::ProductDetail;
pub use product_list::ProductList;

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod models;
pub mod storage;

pub use app::App;

//! Global Shapers Community – Quetta Hub site (Rust + Yew + WASM).

pub mod anim;
pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod error;

pub use app::{App, AppProps};
pub use config::SiteConfig;
pub use content::HUB_CONTENT;

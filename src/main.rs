// src/main.rs
use gloo::console::log;
use quetta_hub_site::{App, AppProps, SiteConfig};

fn main() {
    let config = SiteConfig::load_embedded();
    if config.debug {
        log!(format!("site config: {config:?}"));
    }
    let year = js_sys::Date::new_0().get_full_year() as i32;
    yew::Renderer::<App>::with_props(AppProps { year, config }).render();
}

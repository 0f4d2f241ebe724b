use leptos::prelude::*;
use tubone_site::App;
use tubone_site::config::{APP_ROOT_ID, SiteConfig};
use tubone_site::utils::log;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let config = match SiteConfig::bundled() {
        Ok(config) => config,
        Err(err) => {
            log::error(&err.to_string());
            return;
        }
    };

    let root = document()
        .get_element_by_id(APP_ROOT_ID)
        .expect("Failed to find #app element");

    // Client view replaces the prerendered markup
    root.set_inner_html("");

    let root = root.unchecked_into::<web_sys::HtmlElement>();
    mount_to(root, move || view! { <App config=config /> }).forget();
}

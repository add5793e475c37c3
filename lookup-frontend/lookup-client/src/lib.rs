use leptos::prelude::*;
use lookup_app::{
    HomeSearch, NavSearch, SearchConfig, CONFIG_ATTRIBUTE, HOME_HOST_ID, NAV_HOST_ID,
};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast};
use web_sys::HtmlElement;

fn host(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn host_config(id: &str, host: &HtmlElement) -> anyhow::Result<SearchConfig> {
    let Some(json) = host.get_attribute(CONFIG_ATTRIBUTE) else {
        return Ok(SearchConfig::default());
    };
    SearchConfig::from_json(&json).map_err(|e| anyhow::anyhow!("{CONFIG_ATTRIBUTE} on #{id}: {e}"))
}

fn config_or_default(id: &str, host: &HtmlElement) -> SearchConfig {
    host_config(id, host).unwrap_or_else(|e| {
        log::warn!("{e}, using default search settings");
        SearchConfig::default()
    })
}

#[wasm_bindgen]
pub fn mount() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Some(host) = host(HOME_HOST_ID) {
        let config = config_or_default(HOME_HOST_ID, &host);
        log::info!("mounting home search into #{HOME_HOST_ID}");
        leptos::mount::mount_to(host, move || view! { <HomeSearch config /> }).forget();
    }

    if let Some(host) = host(NAV_HOST_ID) {
        let config = config_or_default(NAV_HOST_ID, &host);
        log::info!("mounting navigation search into #{NAV_HOST_ID}");
        leptos::mount::mount_to(host, move || view! { <NavSearch config /> }).forget();
    }
}

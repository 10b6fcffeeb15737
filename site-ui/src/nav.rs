use leptos::window;
use wasm_bindgen::JsValue;

pub fn pathname() -> String {
    window().location().pathname().unwrap_or_default()
}

/// Raw query string of the current page including the leading `?`, empty
/// when there is none.
pub fn current_search() -> String {
    window().location().search().unwrap_or_default()
}

/// One decoded query parameter, `None` when absent.
pub fn query_param(name: &str) -> Option<String> {
    let search = current_search();
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// Rewrite the address bar to `search` (possibly empty) without reloading
/// the page and without growing the session history.
pub fn replace_query(search: &str) {
    let location = window().location();
    let Ok(href) = location.href() else { return };
    let Ok(url) = web_sys::Url::new(&href) else { return };
    url.set_search(search);
    if let Ok(history) = window().history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url.href()));
    }
}

/// Viewport check for the agent call action; matches the site's mobile
/// breakpoint of 768 logical pixels.
pub fn is_mobile_viewport() -> bool {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w <= 768.0)
        .unwrap_or(false)
}

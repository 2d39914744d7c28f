use wasm_bindgen::JsValue;
use web_sys::UrlSearchParams;

use aviv_site_core::route::split_href;
use aviv_site_core::{resolve, ContactDetails, MotionSettings, Resolved, Route};

pub(crate) fn contact_details() -> ContactDetails {
    ContactDetails::from_overrides(
        option_env!("AVIV_WHATSAPP_NUMBER").or(option_env!("TRUNK_PUBLIC_AVIV_WHATSAPP_NUMBER")),
        option_env!("AVIV_PHONE_NUMBER").or(option_env!("TRUNK_PUBLIC_AVIV_PHONE_NUMBER")),
        option_env!("AVIV_PHONE_DISPLAY").or(option_env!("TRUNK_PUBLIC_AVIV_PHONE_DISPLAY")),
        option_env!("AVIV_EMAIL").or(option_env!("TRUNK_PUBLIC_AVIV_EMAIL")),
    )
}

pub(crate) fn load_motion_settings() -> MotionSettings {
    MotionSettings::default().with_motion_preference(query_param("motion").as_deref())
}

/// Resolves the page for the current location. Legal aliases rewrite the
/// history entry in place so the back button skips them.
pub(crate) fn load_current_route() -> Route {
    let resolved = resolve(&current_path());
    if let Resolved::Redirect { href, .. } = &resolved {
        replace_url(href);
    }
    resolved.route()
}

/// Pushes `href` (or its redirect target) and returns the page to show.
pub(crate) fn navigate(href: &str) -> Route {
    let (path, _) = split_href(href);
    match resolve(path) {
        Resolved::Page(route) => {
            push_url(href);
            route
        }
        Resolved::Redirect { route, href } => {
            push_url(&href);
            route
        }
    }
}

pub(crate) fn current_hash() -> Option<String> {
    let window = web_sys::window()?;
    let hash = window.location().hash().ok()?;
    let anchor = hash.trim().trim_start_matches('#');
    if anchor.is_empty() {
        return None;
    }
    Some(decode_hash_value(anchor))
}

fn current_path() -> String {
    let Some(window) = web_sys::window() else {
        return Route::Home.path().to_string();
    };
    window
        .location()
        .pathname()
        .unwrap_or_else(|_| Route::Home.path().to_string())
}

fn query_param(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let search = search.trim();
    if search.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(search).ok()?;
    params.get(key)
}

fn push_url(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        if history
            .push_state_with_url(&JsValue::NULL, "", Some(href))
            .is_ok()
        {
            return;
        }
    }
    let _ = window.location().set_href(href);
}

fn replace_url(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(href));
    }
}

fn decode_hash_value(value: &str) -> String {
    js_sys::decode_uri_component(value)
        .ok()
        .and_then(|decoded| decoded.as_string())
        .unwrap_or_else(|| value.to_string())
}

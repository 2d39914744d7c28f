use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use aviv_site_core::consent;
use aviv_site_core::{ConsentBootstrap, ConsentCapability, ConsentConfig, ConsentInit};

const CONSENT_GLOBAL: &str = "CookieConsent";

/// `window.CookieConsent`, when the library script has loaded.
pub(crate) struct JsConsentApi {
    api: Object,
}

impl JsConsentApi {
    pub(crate) fn lookup() -> Option<Self> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str(CONSENT_GLOBAL)).ok()?;
        if value.is_null() || value.is_undefined() {
            return None;
        }
        let api = value.dyn_into::<Object>().ok()?;
        Some(Self { api })
    }

    fn call(&self, method: &str, args: &[JsValue]) -> bool {
        let Ok(value) = Reflect::get(&self.api, &JsValue::from_str(method)) else {
            return false;
        };
        let Ok(func) = value.dyn_into::<Function>() else {
            return false;
        };
        let array = Array::new();
        for arg in args {
            array.push(arg);
        }
        func.apply(&self.api, &array).is_ok()
    }
}

impl ConsentCapability for JsConsentApi {
    fn run(&self, config: &ConsentConfig) {
        let json = match serde_json::to_string(config) {
            Ok(json) => json,
            Err(err) => {
                gloo::console::warn!("consent config serialization failed", err.to_string());
                return;
            }
        };
        let Ok(value) = js_sys::JSON::parse(&json) else {
            gloo::console::warn!("consent config rejected by JSON.parse");
            return;
        };
        if !self.call("run", &[value]) {
            gloo::console::warn!("CookieConsent.run failed");
        }
    }

    fn show_preferences(&self) -> bool {
        self.call("showPreferences", &[])
    }
}

pub(crate) fn start(bootstrap: &mut ConsentBootstrap) -> ConsentInit {
    let api = JsConsentApi::lookup();
    let config = ConsentConfig::default();
    let outcome = bootstrap.init(
        api.as_ref().map(|api| api as &dyn ConsentCapability),
        &config,
    );
    match outcome {
        ConsentInit::Ran => gloo::console::log!("consent manager started"),
        ConsentInit::Unavailable => gloo::console::warn!("consent manager not loaded, skipping"),
        ConsentInit::AlreadyInitialized => {}
    }
    outcome
}

pub(crate) fn open_preferences() -> bool {
    let api = JsConsentApi::lookup();
    let opened = consent::open_preferences(api.as_ref().map(|api| api as &dyn ConsentCapability));
    if !opened {
        gloo::console::warn!("cookie preferences unavailable");
    }
    opened
}

/// Starts the consent manager on first mount. The banner markup itself is
/// injected by the library.
#[function_component(ConsentBanner)]
pub(crate) fn consent_banner() -> Html {
    let bootstrap = use_mut_ref(ConsentBootstrap::new);
    use_effect_with((), move |_| {
        start(&mut bootstrap.borrow_mut());
        || ()
    });
    html! {}
}

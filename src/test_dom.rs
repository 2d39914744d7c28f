use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::html::BaseComponent;
use yew::AppHandle;

/// Renders `C` into a fresh element appended to the body.
pub(crate) fn mount<C>() -> (Element, AppHandle<C>)
where
    C: BaseComponent,
    C::Properties: Default,
{
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("document available");
    let root = document.create_element("div").expect("create test root");
    document
        .body()
        .expect("body available")
        .append_child(&root)
        .expect("append test root");
    let handle = yew::Renderer::<C>::with_root(root.clone()).render();
    (root, handle)
}

/// Lets the scheduler flush pending renders and effects.
pub(crate) async fn settle() {
    TimeoutFuture::new(20).await;
}

pub(crate) fn click(root: &Element, selector: &str) {
    let element = root
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"));
    element.dyn_into::<HtmlElement>().unwrap().click();
}

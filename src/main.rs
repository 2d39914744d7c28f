mod app_router;
mod browser;
mod consent_bridge;
mod contact_page;
mod gallery;
mod home;
mod layout;
mod legal;
mod maintenance;
mod services;
#[cfg(test)]
mod test_dom;

use std::rc::Rc;

use gloo::events::EventListener;
use yew::prelude::*;

use aviv_site_core::{ContactDetails, MotionSettings, Route};

use crate::consent_bridge::ConsentBanner;
use crate::contact_page::ContactPage;
use crate::home::HomePage;
use crate::layout::{FloatingContactButtons, SiteFooter, SiteHeader, SkipLink};
use crate::legal::LegalPage;
use crate::maintenance::MaintenancePage;
use crate::services::{ProductsPage, ServicesPage};

/// Shared by every component under [`App`].
#[derive(Clone, PartialEq)]
pub(crate) struct SiteContext {
    pub(crate) route: Route,
    pub(crate) navigate: Callback<String>,
    pub(crate) contact: Rc<ContactDetails>,
    pub(crate) motion: MotionSettings,
}

/// `visit` counts arrivals so a click on the current page still scrolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Location {
    route: Route,
    visit: u32,
}

impl Reducible for Location {
    type Action = Route;

    fn reduce(self: Rc<Self>, route: Route) -> Rc<Self> {
        Rc::new(Self {
            route,
            visit: self.visit.wrapping_add(1),
        })
    }
}

fn page_for(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Services => html! { <ServicesPage /> },
        Route::Maintenance => html! { <MaintenancePage /> },
        Route::Products => html! { <ProductsPage /> },
        Route::Contact => html! { <ContactPage /> },
        Route::Legal => html! { <LegalPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let location = use_reducer(|| Location {
        route: app_router::load_current_route(),
        visit: 0,
    });
    let contact = use_memo((), |_| app_router::contact_details());
    let motion = *use_memo((), |_| app_router::load_motion_settings());

    {
        let location = location.clone();
        use_effect_with((), move |_| {
            gloo::console::log!("site mounted", location.route.path());
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| {
                    location.dispatch(app_router::load_current_route());
                })
            });
            move || drop(listener)
        });
    }

    use_effect_with(*location, |location| {
        browser::set_document_title(location.route.title());
        let anchored = app_router::current_hash()
            .map(|anchor| browser::scroll_to_anchor(&anchor))
            .unwrap_or(false);
        if !anchored && location.visit > 0 {
            browser::scroll_to_top(false);
        }
        || ()
    });

    let navigate = {
        let location = location.clone();
        Callback::from(move |href: String| {
            let route = app_router::navigate(&href);
            gloo::console::log!("navigate", href, route.path());
            location.dispatch(route);
        })
    };

    let context = SiteContext {
        route: location.route,
        navigate,
        contact,
        motion,
    };

    html! {
        <ContextProvider<SiteContext> {context}>
            <SkipLink />
            <SiteHeader />
            <main id="main" class={classes!("site-main", format!("page-{}", page_slug(location.route)))} tabindex="-1">
                { page_for(location.route) }
            </main>
            <SiteFooter />
            <FloatingContactButtons />
            <ConsentBanner />
        </ContextProvider<SiteContext>>
    }
}

fn page_slug(route: Route) -> &'static str {
    match route.path().trim_start_matches('/') {
        "" => "home",
        slug => slug,
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn every_route_has_a_slug() {
        let slugs: Vec<&str> = Route::ALL.into_iter().map(page_slug).collect();
        assert_eq!(slugs, vec!["home", "services", "maintenance", "products", "contact", "legal"]);
    }

    #[wasm_bindgen_test]
    fn arrivals_are_counted_even_for_the_same_page() {
        let start = Rc::new(Location {
            route: Route::Legal,
            visit: 0,
        });
        let next = start.reduce(Route::Legal);
        assert_eq!(next.route, Route::Legal);
        assert_eq!(next.visit, 1);
    }
}

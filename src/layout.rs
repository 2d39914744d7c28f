use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use aviv_site_core::contact::DEFAULT_WHATSAPP_MESSAGE;
use aviv_site_core::settings::BUSINESS_NAME;
use aviv_site_core::{tel_link, whatsapp_link, LegalSection, Route, ScrollMetrics, ScrollObserver, NAV_ITEMS};

use crate::browser::{self, WindowViewport};
use crate::consent_bridge;
use crate::SiteContext;

#[derive(Properties, PartialEq)]
pub(crate) struct LinkProps {
    pub(crate) href: AttrValue,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) current: bool,
    #[prop_or_default]
    pub(crate) on_follow: Option<Callback<()>>,
    #[prop_or_default]
    pub(crate) children: Children,
}

/// Internal link handled by the history router. Modified clicks fall through
/// to the browser so "open in new tab" keeps working.
#[function_component(Link)]
pub(crate) fn link(props: &LinkProps) -> Html {
    let site = use_context::<SiteContext>();
    let onclick = {
        let href = props.href.clone();
        let on_follow = props.on_follow.clone();
        Callback::from(move |event: MouseEvent| {
            if event.button() != 0 || event.ctrl_key() || event.meta_key() || event.shift_key() || event.alt_key() {
                return;
            }
            let Some(site) = site.as_ref() else {
                return;
            };
            event.prevent_default();
            site.navigate.emit(href.to_string());
            if let Some(on_follow) = on_follow.as_ref() {
                on_follow.emit(());
            }
        })
    };
    let aria_current = props.current.then_some("page");
    html! {
        <a href={props.href.clone()} class={props.class.clone()} aria-current={aria_current} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[function_component(SkipLink)]
pub(crate) fn skip_link() -> Html {
    html! {
        <a class="skip-link" href="#main">{ "דלג לתוכן הראשי" }</a>
    }
}

#[function_component(SiteHeader)]
pub(crate) fn site_header() -> Html {
    let site = use_context::<SiteContext>();
    let route = site.as_ref().map(|site| site.route).unwrap_or_default();
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with((), move |_| {
            let on_change: Rc<dyn Fn(ScrollMetrics)> =
                Rc::new(move |metrics: ScrollMetrics| scrolled.set(metrics.header_scrolled()));
            let observer = WindowViewport::new().map(|viewport| {
                let mut observer = ScrollObserver::new(Rc::new(viewport), on_change);
                observer.activate();
                observer
            });
            move || drop(observer)
        });
    }

    {
        let menu_open = menu_open.clone();
        use_effect_with(route, move |_| {
            menu_open.set(false);
            || ()
        });
    }

    {
        let menu_open_handle = menu_open.clone();
        use_effect_with(*menu_open, move |open| {
            let open = *open;
            let previous_overflow = if open { browser::lock_root_scroll() } else { None };
            let listener = if open {
                web_sys::window().map(|window| {
                    EventListener::new(&window, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if event.key() == "Escape" {
                            menu_open_handle.set(false);
                        }
                    })
                })
            } else {
                None
            };
            move || {
                drop(listener);
                if let Some(previous) = previous_overflow {
                    browser::restore_root_overflow(&previous);
                }
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let nav_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let active = item.route.is_active_for(route);
            html! {
                <li key={item.route.path()}>
                    <Link
                        href={item.route.path()}
                        class={classes!("nav-link", active.then_some("is-active"))}
                        current={active}
                        on_follow={close_menu.clone()}
                    >
                        { item.label }
                    </Link>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <header class={classes!("site-header", (*scrolled).then_some("is-scrolled"), (*menu_open).then_some("menu-open"))}>
            <div class="header-inner">
                <Link href={Route::Home.path()} class={classes!("brand")} on_follow={close_menu.clone()}>
                    <img class="brand-logo" src="images/logo.png" alt={BUSINESS_NAME} />
                    <span class="brand-name">{ BUSINESS_NAME }</span>
                </Link>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-expanded={(*menu_open).to_string()}
                    aria-controls="site-nav"
                    aria-label={if *menu_open { "סגירת תפריט" } else { "פתיחת תפריט" }}
                    onclick={toggle_menu}
                >
                    <span class="menu-toggle-bar" />
                    <span class="menu-toggle-bar" />
                    <span class="menu-toggle-bar" />
                </button>
                <nav id="site-nav" class="site-nav" aria-label="ניווט ראשי">
                    <ul>{ nav_links }</ul>
                </nav>
            </div>
        </header>
    }
}

#[function_component(SiteFooter)]
pub(crate) fn site_footer() -> Html {
    let on_preferences = Callback::from(|_: MouseEvent| {
        consent_bridge::open_preferences();
    });
    let legal_links = [
        (LegalSection::Privacy, "מדיניות פרטיות"),
        (LegalSection::Cookies, "מדיניות קוקיז"),
        (LegalSection::Terms, "תנאי שימוש"),
    ]
    .into_iter()
    .map(|(section, label)| {
        html! {
            <li key={section.anchor()}>
                <Link href={section.href()} class={classes!("footer-link")}>{ label }</Link>
            </li>
        }
    })
    .collect::<Html>();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <p class="footer-copy">
                    { format!("© {} {}. כל הזכויות שמורות.", browser::current_year(), BUSINESS_NAME) }
                </p>
                <ul class="footer-links">
                    { legal_links }
                    <li>
                        <button type="button" class="footer-link footer-button" onclick={on_preferences}>
                            { "ניהול העדפות קוקיז" }
                        </button>
                    </li>
                </ul>
            </div>
        </footer>
    }
}

#[function_component(FloatingContactButtons)]
pub(crate) fn floating_contact_buttons() -> Html {
    let Some(site) = use_context::<SiteContext>() else {
        return html! {};
    };
    let whatsapp = whatsapp_link(&site.contact.whatsapp_number, DEFAULT_WHATSAPP_MESSAGE);
    let phone = tel_link(&site.contact.phone_number);
    html! {
        <div class="floating-contact" aria-label="יצירת קשר מהירה">
            <a
                class="floating-button floating-whatsapp"
                href={whatsapp}
                target="_blank"
                rel="noopener noreferrer"
                aria-label="שליחת הודעת וואטסאפ"
            >
                <img src="icons/whatsapp.svg" alt="" />
            </a>
            <a class="floating-button floating-phone" href={phone} aria-label="חיוג">
                <img src="icons/phone.svg" alt="" />
            </a>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct FloatingCtaProps {
    pub(crate) title: AttrValue,
    pub(crate) text: AttrValue,
    pub(crate) link_label: AttrValue,
    pub(crate) whatsapp_href: AttrValue,
    pub(crate) on_dismiss: Callback<()>,
}

/// Floating WhatsApp panel. Callers mount it only while it should show.
#[function_component(FloatingCta)]
pub(crate) fn floating_cta(props: &FloatingCtaProps) -> Html {
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    html! {
        <aside class="floating-cta" aria-label={props.title.clone()}>
            <button type="button" class="floating-cta-close" aria-label="סגירת הודעה" onclick={on_close}>{ "×" }</button>
            <p class="floating-cta-title">{ props.title.clone() }</p>
            <p class="floating-cta-text">{ props.text.clone() }</p>
            <a class="button button-primary" href={props.whatsapp_href.clone()} target="_blank" rel="noopener noreferrer">
                { props.link_label.clone() }
            </a>
        </aside>
    }
}

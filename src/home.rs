use yew::prelude::*;

use aviv_site_core::catalog::{
    GALLERY_SHOTS, HERO_KICKER, HERO_LINES, HERO_NOTE, HERO_POINTS, HERO_TITLE, MAINTENANCE_REASONS,
    SERVICE_COLUMNS, SYSTEM_KINDS, SYSTEM_KIND_NOTE,
};
use aviv_site_core::contact::DEFAULT_WHATSAPP_MESSAGE;
use aviv_site_core::{whatsapp_link, Route};

use crate::gallery::Gallery;
use crate::layout::Link;
use crate::SiteContext;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    html! {
        <>
            <Hero />
            <ReasonsSection />
            <ServiceColumnsSection />
            <SystemKindsSection />
            <section class="section gallery-section" aria-labelledby="gallery-title">
                <h2 id="gallery-title" class="section-title">{ "מהשטח" }</h2>
                <Gallery shots={GALLERY_SHOTS} />
            </section>
        </>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let whatsapp = use_context::<SiteContext>()
        .map(|site| whatsapp_link(&site.contact.whatsapp_number, DEFAULT_WHATSAPP_MESSAGE))
        .unwrap_or_default();
    html! {
        <section class="hero">
            <p class="hero-kicker">{ HERO_KICKER }</p>
            <h1 class="hero-title">{ HERO_TITLE }</h1>
            { for HERO_LINES.iter().map(|line| html! { <p class="hero-line">{ *line }</p> }) }
            <ul class="hero-points">
                { for HERO_POINTS.iter().map(|point| html! { <li>{ *point }</li> }) }
            </ul>
            <div class="hero-actions">
                <a class="button button-primary" href={whatsapp} target="_blank" rel="noopener noreferrer">
                    { "לשיחה בוואטסאפ" }
                </a>
                <Link href={Route::Contact.path()} class={classes!("button", "button-secondary")}>
                    { "השארת פרטים" }
                </Link>
            </div>
            <p class="hero-note">{ HERO_NOTE }</p>
        </section>
    }
}

#[function_component(ReasonsSection)]
fn reasons_section() -> Html {
    let expanded = use_state_eq(|| None::<usize>);
    let cards = MAINTENANCE_REASONS
        .iter()
        .enumerate()
        .map(|(position, reason)| {
            let open = *expanded == Some(position);
            let onclick = {
                let expanded = expanded.clone();
                Callback::from(move |_: MouseEvent| {
                    expanded.set(if open { None } else { Some(position) });
                })
            };
            let first = reason.lines.first().copied();
            let rest = reason.lines.get(1..).unwrap_or_default();
            html! {
                <article key={reason.title} class={classes!("reason-card", open.then_some("is-open"))}>
                    <img class="reason-icon" src={reason.icon_src} alt="" />
                    <h3>{ reason.title }</h3>
                    { for first.map(|line| html! { <p>{ line }</p> }) }
                    if open {
                        { for rest.iter().map(|line| html! { <p>{ *line }</p> }) }
                    }
                    if !rest.is_empty() {
                        <button type="button" class="link-button" aria-expanded={open.to_string()} {onclick}>
                            { if open { "פחות" } else { "קראו עוד" } }
                        </button>
                    }
                </article>
            }
        })
        .collect::<Html>();
    html! {
        <section class="section reasons" aria-labelledby="reasons-title">
            <h2 id="reasons-title" class="section-title">{ "למה תחזוקה שוטפת?" }</h2>
            <div class="reason-grid">{ cards }</div>
        </section>
    }
}

#[function_component(ServiceColumnsSection)]
fn service_columns_section() -> Html {
    html! {
        <section class="section service-columns" aria-labelledby="service-columns-title">
            <h2 id="service-columns-title" class="section-title">{ "מה אנחנו עושים" }</h2>
            <div class="column-grid">
                { for SERVICE_COLUMNS.iter().map(|column| html! {
                    <article key={column.id} id={column.id} class="service-column">
                        <h3>{ column.label }</h3>
                        <p class="column-subtitle">{ column.subtitle }</p>
                        <ul>
                            { for column.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                        </ul>
                    </article>
                }) }
            </div>
            <Link href={Route::Services.path()} class={classes!("button", "button-secondary")}>
                { "לכל השירותים" }
            </Link>
        </section>
    }
}

#[function_component(SystemKindsSection)]
fn system_kinds_section() -> Html {
    html! {
        <section class="section system-kinds" aria-labelledby="system-kinds-title">
            <h2 id="system-kinds-title" class="section-title">{ "סוגי מתקנים שאנחנו מתחזקים" }</h2>
            <div class="system-grid">
                { for SYSTEM_KINDS.iter().map(|kind| html! {
                    <article key={kind.id} class="system-card">
                        <img src={kind.image_src} alt={kind.label} loading="lazy" />
                        <span class="system-label">{ kind.label }</span>
                        <h3>{ kind.title }</h3>
                        <p>{ kind.description }</p>
                    </article>
                }) }
            </div>
            <p class="system-note">{ SYSTEM_KIND_NOTE }</p>
        </section>
    }
}

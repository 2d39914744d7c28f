use yew::prelude::*;

use aviv_site_core::catalog::{InfoBox, LegalDoc, Tone, LEGAL_DOCS};
use aviv_site_core::contact::mailto_link;
use aviv_site_core::settings::{BUSINESS_NAME, LEGAL_LAST_UPDATED};
use aviv_site_core::tel_link;

use crate::browser;
use crate::SiteContext;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Dark => "info-box-dark",
        Tone::Soft => "info-box-soft",
    }
}

fn info_box(info: &InfoBox) -> Html {
    html! {
        <div key={info.title} class={classes!("info-box", tone_class(info.tone))}>
            <h3>{ info.title }</h3>
            { for info.lines.iter().map(|line| html! { <p>{ *line }</p> }) }
        </div>
    }
}

fn legal_section(doc: &LegalDoc) -> Html {
    html! {
        <section key={doc.section.anchor()} id={doc.section.anchor()} class="section legal-section">
            <h2 class="section-title">{ doc.title }</h2>
            <p class="legal-intro">{ doc.intro }</p>
            <div class="info-grid">
                { for doc.boxes.iter().map(info_box) }
            </div>
        </section>
    }
}

#[function_component(LegalPage)]
pub(crate) fn legal_page() -> Html {
    let contact = use_context::<SiteContext>()
        .map(|site| site.contact)
        .unwrap_or_default();
    let back_to_top = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        browser::scroll_to_top(true);
    });
    html! {
        <>
            <section class="page-intro" id="top">
                <h1>{ "מידע משפטי" }</h1>
                <p class="legal-updated">{ format!("עודכן לאחרונה: {LEGAL_LAST_UPDATED}") }</p>
                <nav class="legal-toc" aria-label="תוכן העניינים">
                    { for LEGAL_DOCS.iter().map(|doc| html! {
                        <a key={doc.section.anchor()} href={format!("#{}", doc.section.anchor())}>{ doc.title }</a>
                    }) }
                </nav>
            </section>
            { for LEGAL_DOCS.iter().map(legal_section) }
            <section class="section legal-contact">
                <h2 class="section-title">{ "פרטי העסק" }</h2>
                <p>{ BUSINESS_NAME }</p>
                <p>
                    { "טלפון: " }
                    <a href={tel_link(&contact.phone_number)}>{ contact.phone_display.clone() }</a>
                </p>
                <p>
                    { "אימייל: " }
                    <a href={mailto_link(&contact.email)}>{ contact.email.clone() }</a>
                </p>
            </section>
            <a class="back-to-top" href="#top" onclick={back_to_top}>{ "חזרה למעלה" }</a>
        </>
    }
}

use yew::prelude::*;

use aviv_site_core::catalog::{ServiceBlock, PRODUCT_CATEGORIES, SERVICE_BLOCKS};
use aviv_site_core::contact::SYSTEM_IDENTIFY_MESSAGE;
use aviv_site_core::{whatsapp_link, CtaVisibility, Route};

use crate::layout::{FloatingCta, Link};
use crate::SiteContext;

#[function_component(ServicesPage)]
pub(crate) fn services_page() -> Html {
    html! {
        <>
            <section class="page-intro">
                <h1>{ "כלל השירותים" }</h1>
                <p>{ "תחזוקה, תיקונים, שדרוגים וליווי מקצועי לכל סוגי מתקני החניה." }</p>
            </section>
            <div class="service-blocks">
                { for SERVICE_BLOCKS.iter().map(|block| html! { <ServiceBlockCard key={block.id} {block} /> }) }
            </div>
            <section class="section page-cta">
                <Link href={Route::Contact.path()} class={classes!("button", "button-primary")}>
                    { "לתיאום שירות" }
                </Link>
            </section>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceBlockProps {
    block: &'static ServiceBlock,
}

#[function_component(ServiceBlockCard)]
fn service_block_card(props: &ServiceBlockProps) -> Html {
    let open = use_state_eq(|| false);
    let block = props.block;
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let body_id = format!("{}-body", block.id);
    html! {
        <article id={block.id} class={classes!("service-block", (*open).then_some("is-open"))}>
            <header class="service-block-head">
                <h2>{ block.title }</h2>
                <p class="service-block-kicker">{ block.kicker }</p>
                <ul class="tags">
                    { for block.tags.iter().map(|tag| html! { <li class="tag">{ *tag }</li> }) }
                </ul>
            </header>
            <button type="button" class="link-button" aria-expanded={(*open).to_string()} aria-controls={body_id.clone()} onclick={toggle}>
                { if *open { "סגירה" } else { "פרטים נוספים" } }
            </button>
            <div id={body_id} class="service-block-body" hidden={!*open}>
                { for block.paragraphs.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
            </div>
        </article>
    }
}

/// Opens on arrival; only the dismiss and re-open buttons change it.
fn identify_panel() -> CtaVisibility {
    let mut panel = CtaVisibility::default();
    panel.request_open();
    panel
}

#[function_component(ProductsPage)]
pub(crate) fn products_page() -> Html {
    let whatsapp = use_context::<SiteContext>()
        .map(|site| whatsapp_link(&site.contact.whatsapp_number, SYSTEM_IDENTIFY_MESSAGE))
        .unwrap_or_default();
    let panel = use_state_eq(identify_panel);
    let on_dismiss = {
        let panel = panel.clone();
        Callback::from(move |_: ()| {
            let mut next = *panel;
            next.dismiss();
            panel.set(next);
        })
    };
    let on_reopen = {
        let panel = panel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *panel;
            next.request_open();
            panel.set(next);
        })
    };
    let visible = panel.is_visible(0.0);

    html! {
        <>
            <section class="page-intro">
                <h1>{ "מוצרי פתרונות חניה" }</h1>
                <p>{ "סקירה של סוגי המתקנים שאנחנו מוכרים, מתקינים ומתחזקים." }</p>
            </section>
            { for PRODUCT_CATEGORIES.iter().map(|category| html! {
                <section key={category.title} class="section product-category">
                    <h2 class="section-title">{ category.title }</h2>
                    <p class="section-subtitle">{ category.subtitle }</p>
                    <div class="product-grid">
                        { for category.items.iter().map(|product| html! {
                            <article key={product.label} class="product-card">
                                <h3>{ product.label }</h3>
                                <p>{ product.description }</p>
                            </article>
                        }) }
                    </div>
                </section>
            }) }
            <section class="section page-cta">
                <Link href={Route::Contact.path()} class={classes!("button", "button-primary")}>
                    { "לקבלת הצעה" }
                </Link>
                <button type="button" class="button button-secondary cta-reopen" onclick={on_reopen}>
                    { "פתחו שוב את הודעת זיהוי המתקן" }
                </button>
            </section>
            if visible {
                <FloatingCta
                    title="לא בטוחים איזה מתקן יש אצלכם?"
                    text="שלחו לנו תמונות מהחניון או תכנית חניה, ונזהה יחד את סוג המערכת ונבנה עבורה תוכנית תחזוקה מתאימה."
                    link_label="שלחו לנו תמונות או תכנית חניה"
                    whatsapp_href={whatsapp}
                    {on_dismiss}
                />
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_dom::{click, mount, settle};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn identify_panel_starts_open_at_any_scroll() {
        let panel = identify_panel();
        assert!(panel.is_visible(0.0));
        assert!(panel.is_visible(1.0));
    }

    #[wasm_bindgen_test(async)]
    async fn identify_panel_closes_and_reopens() {
        let (root, handle) = mount::<ProductsPage>();
        settle().await;
        assert!(root.query_selector(".floating-cta").unwrap().is_some());

        click(&root, ".floating-cta-close");
        settle().await;
        assert!(root.query_selector(".floating-cta").unwrap().is_none());

        click(&root, ".cta-reopen");
        settle().await;
        assert!(root.query_selector(".floating-cta").unwrap().is_some());

        handle.destroy();
        root.remove();
    }
}

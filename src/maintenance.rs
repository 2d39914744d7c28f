use std::rc::Rc;

use yew::prelude::*;

use aviv_site_core::catalog::{MAINTENANCE_BENEFITS, MAINTENANCE_CHECKLIST, PROCESS_STEPS};
use aviv_site_core::contact::MAINTENANCE_PLAN_MESSAGE;
use aviv_site_core::{whatsapp_link, CtaVisibility, ScrollMetrics, ScrollObserver};

use crate::browser::WindowViewport;
use crate::layout::FloatingCta;
use crate::SiteContext;

#[function_component(MaintenancePage)]
pub(crate) fn maintenance_page() -> Html {
    let site = use_context::<SiteContext>();
    let threshold = site
        .as_ref()
        .map(|site| site.motion.cta_scroll_threshold)
        .unwrap_or(aviv_site_core::visibility::DEFAULT_VISIBILITY_THRESHOLD);
    let whatsapp = site
        .as_ref()
        .map(|site| whatsapp_link(&site.contact.whatsapp_number, MAINTENANCE_PLAN_MESSAGE))
        .unwrap_or_default();
    let cta = use_state_eq(move || CtaVisibility::new(threshold));
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            let on_change: Rc<dyn Fn(ScrollMetrics)> =
                Rc::new(move |metrics: ScrollMetrics| progress.set(metrics.progress()));
            let observer = WindowViewport::new().map(|viewport| {
                let mut observer = ScrollObserver::new(Rc::new(viewport), on_change);
                observer.activate();
                observer
            });
            move || drop(observer)
        });
    }

    let on_dismiss = {
        let cta = cta.clone();
        Callback::from(move |_: ()| {
            let mut next = *cta;
            next.dismiss();
            cta.set(next);
        })
    };
    let on_reopen = {
        let cta = cta.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *cta;
            next.request_open();
            cta.set(next);
        })
    };
    let visible = cta.is_visible(*progress);

    html! {
        <>
            <section class="page-intro">
                <h1>{ "תחזוקה שוטפת למתקני חניה" }</h1>
                <p>{ "תוכנית קבועה שמונעת תקלות, שומרת על בטיחות ומשאירה תיעוד מסודר." }</p>
                <button type="button" class="button button-primary cta-reopen" onclick={on_reopen}>
                    { "לקבלת הצעה לתוכנית תחזוקה" }
                </button>
            </section>
            <section class="section process" aria-labelledby="process-title">
                <h2 id="process-title" class="section-title">{ "איך זה עובד" }</h2>
                <ol class="process-steps">
                    { for PROCESS_STEPS.iter().enumerate().map(|(position, step)| html! {
                        <li key={step.title} class="process-step">
                            <span class="step-number">{ (position + 1).to_string() }</span>
                            <h3>{ step.title }</h3>
                            <p>{ step.text }</p>
                        </li>
                    }) }
                </ol>
            </section>
            <section class="section checklist" aria-labelledby="checklist-title">
                <h2 id="checklist-title" class="section-title">{ "מה נבדק בכל ביקור" }</h2>
                <ul class="checklist-items">
                    { for MAINTENANCE_CHECKLIST.iter().map(|item| html! { <li>{ *item }</li> }) }
                </ul>
            </section>
            <section class="section benefits" aria-labelledby="benefits-title">
                <h2 id="benefits-title" class="section-title">{ "מה מרוויחים" }</h2>
                <div class="benefit-grid">
                    { for MAINTENANCE_BENEFITS.iter().map(|benefit| html! {
                        <article key={benefit.title} class="benefit-card">
                            <h3>{ benefit.title }</h3>
                            <p>{ benefit.text }</p>
                        </article>
                    }) }
                </div>
            </section>
            if visible {
                <FloatingCta
                    title="צריכים תוכנית תחזוקה מסודרת?"
                    text="שלחו הודעה בוואטסאפ ונחזור אליכם עם הצעה שמותאמת למתקנים, לבניין ולשימוש אצלכם."
                    link_label="דברו איתנו בוואטסאפ"
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

    #[wasm_bindgen_test(async)]
    async fn panel_follows_dismiss_and_reopen() {
        let (root, handle) = mount::<MaintenancePage>();
        settle().await;
        assert!(root.query_selector(".floating-cta").unwrap().is_none());

        click(&root, ".cta-reopen");
        settle().await;
        assert!(root.query_selector(".floating-cta").unwrap().is_some());

        click(&root, ".floating-cta-close");
        settle().await;
        assert!(root.query_selector(".floating-cta").unwrap().is_none());

        handle.destroy();
        root.remove();
    }
}

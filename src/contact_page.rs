use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use aviv_site_core::contact::{mailto_link, ContactField, SystemType, DEFAULT_WHATSAPP_MESSAGE};
use aviv_site_core::{tel_link, whatsapp_link, ContactForm, ContactStatus};

use crate::browser;
use crate::SiteContext;

/// Field, input type, required.
const INPUT_FIELDS: [(ContactField, &str, bool); 4] = [
    (ContactField::FullName, "text", true),
    (ContactField::Phone, "tel", true),
    (ContactField::Email, "email", false),
    (ContactField::Address, "text", false),
];

#[function_component(ContactPage)]
pub(crate) fn contact_page() -> Html {
    let contact = use_context::<SiteContext>()
        .map(|site| site.contact)
        .unwrap_or_default();
    let form = use_state_eq(ContactForm::default);

    let set_field = {
        let form = form.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            let mut next = (*form).clone();
            next.set_field(field, value);
            form.set(next);
        })
    };
    let on_system_type = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let select = event.target_unchecked_into::<HtmlSelectElement>();
            let mut next = (*form).clone();
            next.system_type = SystemType::from_value(&select.value());
            form.set(next);
        })
    };
    let on_message = {
        let set_field = set_field.clone();
        Callback::from(move |event: InputEvent| {
            let area = event.target_unchecked_into::<HtmlTextAreaElement>();
            set_field.emit((ContactField::Message, area.value()));
        })
    };
    let on_submit = {
        let form = form.clone();
        let number = contact.whatsapp_number.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let link = form.whatsapp_link(&number);
            gloo::console::log!("contact form submitted");
            browser::open_in_new_tab(&link);
        })
    };

    let inputs = INPUT_FIELDS
        .iter()
        .map(|(field, kind, required)| {
            let field = *field;
            let required = *required;
            let oninput = {
                let set_field = set_field.clone();
                Callback::from(move |event: InputEvent| {
                    let input = event.target_unchecked_into::<HtmlInputElement>();
                    set_field.emit((field, input.value()));
                })
            };
            html! {
                <label key={field.id()} class="form-field" for={field.id()}>
                    <span class="form-label">{ field.label() }</span>
                    <input
                        id={field.id()}
                        name={field.id()}
                        type={*kind}
                        required={required}
                        placeholder={field.placeholder()}
                        value={form.field(field).to_string()}
                        {oninput}
                    />
                </label>
            }
        })
        .collect::<Html>();

    let chips = ContactStatus::ALL
        .into_iter()
        .map(|status| {
            let selected = form.status == Some(status);
            let onclick = {
                let form = form.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*form).clone();
                    next.toggle_status(status);
                    form.set(next);
                })
            };
            html! {
                <button
                    key={status.label()}
                    type="button"
                    class={classes!("status-chip", selected.then_some("is-selected"))}
                    aria-pressed={selected.to_string()}
                    {onclick}
                >
                    { status.label() }
                </button>
            }
        })
        .collect::<Html>();

    let selected_type = form.system_type.map(SystemType::value).unwrap_or("");
    let options = SystemType::ALL
        .into_iter()
        .map(|kind| {
            html! {
                <option key={kind.value()} value={kind.value()} selected={selected_type == kind.value()}>
                    { kind.label() }
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <section class="page-intro">
                <h1>{ "יצירת קשר" }</h1>
                <p>{ "ספרו לנו על המתקן ונחזור אליכם עם הצעה מסודרת." }</p>
            </section>
            <div class="contact-layout">
                <form class="contact-form" onsubmit={on_submit}>
                    <fieldset class="status-chips">
                        <legend>{ "מה המצב כרגע?" }</legend>
                        { chips }
                    </fieldset>
                    { inputs }
                    <label class="form-field" for="systemType">
                        <span class="form-label">{ "סוג מתקן" }</span>
                        <select id="systemType" name="systemType" onchange={on_system_type}>
                            <option value="" selected={selected_type.is_empty()}>{ "בחרו סוג מתקן" }</option>
                            { options }
                        </select>
                    </label>
                    <label class="form-field" for={ContactField::Message.id()}>
                        <span class="form-label">{ ContactField::Message.label() }</span>
                        <textarea
                            id={ContactField::Message.id()}
                            name={ContactField::Message.id()}
                            rows="5"
                            placeholder={ContactField::Message.placeholder()}
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                    </label>
                    <button type="submit" class="button button-primary">{ "שליחה בוואטסאפ" }</button>
                </form>
                <aside class="contact-details">
                    <h2>{ "דרכים נוספות" }</h2>
                    <p>
                        { "טלפון: " }
                        <a href={tel_link(&contact.phone_number)}>{ contact.phone_display.clone() }</a>
                    </p>
                    <p>
                        { "וואטסאפ: " }
                        <a
                            href={whatsapp_link(&contact.whatsapp_number, DEFAULT_WHATSAPP_MESSAGE)}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            { contact.whatsapp_display() }
                        </a>
                    </p>
                    <p>
                        { "אימייל: " }
                        <a href={mailto_link(&contact.email)}>{ contact.email.clone() }</a>
                    </p>
                </aside>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_dom::{mount, settle};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test(async)]
    async fn name_and_phone_are_required() {
        let (root, handle) = mount::<ContactPage>();
        settle().await;
        let required = |id: &str| {
            root.query_selector(&format!("#{id}"))
                .unwrap()
                .unwrap_or_else(|| panic!("missing #{id}"))
                .has_attribute("required")
        };
        assert!(required(ContactField::FullName.id()));
        assert!(required(ContactField::Phone.id()));
        assert!(!required(ContactField::Email.id()));
        assert!(!required(ContactField::Address.id()));

        let form = root.query_selector("form").unwrap().unwrap();
        let form = form.dyn_into::<web_sys::HtmlFormElement>().unwrap();
        assert!(!form.check_validity());

        handle.destroy();
        root.remove();
    }
}

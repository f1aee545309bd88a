use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::use_toaster;
use crate::config;
use crate::driver::use_controller;
use crate::widgets::contact::{ContactForm, ContactMsg, Field};

const SUBMIT_LABEL: &str = "Send Message";

const SUBJECTS: [(&str, &str); 4] = [
    ("general", "General question"),
    ("membership", "Membership"),
    ("workshops", "Workshops"),
    ("sponsorship", "Sponsorship"),
];

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let site = config::site();
    let placeholder = site.subject_placeholder_value;
    let driver = use_controller(move || ContactForm::new(site.submit_delay_ms, placeholder));
    let toaster = use_toaster();

    // Surface every notice the form raises, including the one raised when
    // the simulated send completes.
    let (raised, notice) = {
        let form = driver.state();
        let (raised, notice) = form.notice();
        (raised, notice.cloned())
    };
    use_effect_with_deps(
        move |raised| {
            if *raised > 0 {
                if let Some(notice) = notice {
                    toaster.notify(notice);
                }
            }
            || ()
        },
        raised,
    );

    let (fields, errors, sending) = {
        let form = driver.state();
        (form.fields().clone(), form.errors(), form.is_sending())
    };

    // Option `selected` attributes do not reselect a choice the user already
    // moved away from, so the select's value follows the form state directly.
    let subject_ref = use_node_ref();
    {
        let subject_ref = subject_ref.clone();
        use_effect_with_deps(
            move |subject| {
                if let Some(select) = subject_ref.cast::<HtmlSelectElement>() {
                    select.set_value(subject);
                }
                || ()
            },
            fields.subject.clone(),
        );
    }
    let submit_label = driver.state().submit_label(SUBMIT_LABEL).to_string();

    let onsubmit = driver.callback(|e: SubmitEvent| {
        e.prevent_default();
        ContactMsg::Submit
    });
    let on_input = |field: Field| {
        driver.callback(move |e: InputEvent| {
            ContactMsg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let on_message = driver.callback(|e: InputEvent| {
        ContactMsg::Edit(Field::Message, e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });
    let on_subject = driver.callback(|e: Event| {
        ContactMsg::Edit(Field::Subject, e.target_unchecked_into::<HtmlSelectElement>().value())
    });
    let group = |field: Field| classes!("form-group", errors.has(field).then(|| "error"));

    html! {
        <form id="contactForm" class="contact-form" novalidate={true} {onsubmit}>
            <div class={group(Field::Name)}>
                <label for={Field::Name.name()}>{"Name"}</label>
                <input id={Field::Name.name()} name={Field::Name.name()} type="text" value={fields.name.clone()} oninput={on_input(Field::Name)} />
                <span class="error-message">{"Please enter your name."}</span>
            </div>
            <div class={group(Field::Email)}>
                <label for={Field::Email.name()}>{"Email"}</label>
                <input id={Field::Email.name()} name={Field::Email.name()} type="email" value={fields.email.clone()} oninput={on_input(Field::Email)} />
                <span class="error-message">{"Please enter a valid email address."}</span>
            </div>
            <div class={group(Field::Subject)}>
                <label for={Field::Subject.name()}>{"Subject"}</label>
                <select ref={subject_ref} id={Field::Subject.name()} name={Field::Subject.name()} onchange={on_subject}>
                    <option value={placeholder} selected={fields.subject == placeholder}>
                        {"Select a subject"}
                    </option>
                    { for SUBJECTS.iter().map(|(value, text)| html! {
                        <option value={*value} selected={fields.subject == *value}>{*text}</option>
                    }) }
                </select>
                <span class="error-message">{"Please choose a subject."}</span>
            </div>
            <div class={group(Field::Message)}>
                <label for={Field::Message.name()}>{"Message"}</label>
                <textarea id={Field::Message.name()} name={Field::Message.name()} rows="5" value={fields.message.clone()} oninput={on_message} />
                <span class="error-message">{"Please write a message."}</span>
            </div>
            <button type="submit" class="btn btn-primary" disabled={sending}>
                {submit_label}
            </button>

            <style>
                {r#"
                .contact-form {
                    display: grid;
                    gap: 18px;
                    max-width: 640px;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 6px;
                }
                .form-group input,
                .form-group select,
                .form-group textarea {
                    padding: 10px 12px;
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    background: var(--surface);
                    color: var(--text);
                    font: inherit;
                }
                .form-group .error-message {
                    display: none;
                    color: #b91c1c;
                    font-size: 14px;
                }
                .form-group.error input,
                .form-group.error select,
                .form-group.error textarea {
                    border-color: #b91c1c;
                }
                .form-group.error .error-message {
                    display: block;
                }
                "#}
            </style>
        </form>
    }
}

use yew::prelude::*;

use crate::components::contact_form::ContactFormView;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page section">
            <h1>{"Get in touch"}</h1>
            <p>{"Questions about membership, workshops or sponsoring? Drop us a line."}</p>
            <ContactFormView />
        </div>
    }
}

use std::rc::Rc;

use yew::prelude::*;

use crate::components::faq::FaqList;
use crate::content::SiteContent;

#[function_component(Faq)]
pub fn faq() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();

    html! {
        <div class="faq-page section">
            <h1>{"Frequently Asked Questions"}</h1>
            <FaqList entries={content.faq.clone()} />
        </div>
    }
}

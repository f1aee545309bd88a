use yew::prelude::*;

use crate::components::notification::use_toaster;
use crate::config;
use crate::content::Membership;
use crate::widgets::placeholder::membership_notice;

#[derive(Properties, PartialEq)]
pub struct MembershipCardsProps {
    pub plans: Vec<Membership>,
}

#[function_component(MembershipCards)]
pub fn membership_cards(props: &MembershipCardsProps) -> Html {
    let toaster = use_toaster();
    let fallback_title = config::site().membership_fallback_title;

    html! {
        <div class="membership-grid">
            { for props.plans.iter().map(|plan| {
                let onclick = {
                    let toaster = toaster.clone();
                    let title = plan.title.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        toaster.notify(membership_notice(title.as_deref(), fallback_title));
                    })
                };
                html! {
                    <div class="membership-card">
                        { for plan.title.iter().map(|title| html! { <h3>{title}</h3> }) }
                        <p class="price">{&plan.price}</p>
                        <ul>
                            { for plan.perks.iter().map(|perk| html! { <li>{perk}</li> }) }
                        </ul>
                        <a href="#" class="btn" {onclick}>{"Sign up"}</a>
                    </div>
                }
            }) }
        </div>
    }
}

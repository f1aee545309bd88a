use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero_slider::HeroSlider;
use crate::components::membership::MembershipCards;
use crate::components::video::VideoPlaceholders;
use crate::content::SiteContent;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();

    html! {
        <div class="home-page">
            <HeroSlider slides={content.slides.clone()} />

            <section class="section">
                <h2>{"Membership"}</h2>
                <p>{"Pick the plan that fits. Every plan includes the weekly hack night."}</p>
                <MembershipCards plans={content.memberships.clone()} />
            </section>

            <section class="section">
                <h2>{"Watch"}</h2>
                <VideoPlaceholders videos={content.videos.clone()} />
            </section>

            <section class="section cta">
                <h2>{"Questions?"}</h2>
                <Link<Route> to={Route::Faq} classes="btn btn-primary">{"Read the FAQ"}</Link<Route>>
                <Link<Route> to={Route::Contact} classes="btn">{"Contact us"}</Link<Route>>
            </section>
        </div>
    }
}

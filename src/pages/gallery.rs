use std::rc::Rc;

use yew::prelude::*;

use crate::components::gallery::Gallery;
use crate::content::SiteContent;

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let filter_tags: Vec<String> = content.filter_tags().into_iter().map(String::from).collect();

    html! {
        <div class="gallery-page">
            <section class="section">
                <h1>{"Gallery"}</h1>
                <p>{"Events, projects and workshops from the club."}</p>
            </section>
            <Gallery items={content.gallery.clone()} {filter_tags} />
        </div>
    }
}

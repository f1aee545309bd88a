use yew::prelude::*;

use crate::components::notification::use_toaster;
use crate::content::Video;
use crate::widgets::placeholder::video_notice;

#[derive(Properties, PartialEq)]
pub struct VideoPlaceholdersProps {
    pub videos: Vec<Video>,
}

#[function_component(VideoPlaceholders)]
pub fn video_placeholders(props: &VideoPlaceholdersProps) -> Html {
    let toaster = use_toaster();
    let onclick = Callback::from(move |_: MouseEvent| toaster.notify(video_notice()));

    html! {
        <div class="video-grid">
            { for props.videos.iter().map(|video| html! {
                <div class="video-placeholder" role="button" onclick={onclick.clone()}>
                    <span class="play-icon">{"▶"}</span>
                    <p>{&video.title}</p>
                </div>
            }) }
        </div>
    }
}

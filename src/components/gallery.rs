use yew::prelude::*;

use crate::components::lightbox::use_lightbox;
use crate::config;
use crate::content::GalleryItem;
use crate::driver::use_controller;
use crate::widgets::gallery::{Filter, FilterBar, FilterMsg};
use crate::widgets::lightbox::LightboxMsg;

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub items: Vec<GalleryItem>,
    pub filter_tags: Vec<String>,
}

fn label(filter: &Filter) -> String {
    match filter {
        Filter::All => "All".to_string(),
        Filter::Category(tag) => {
            let mut chars = tag.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let tags = props.filter_tags.clone();
    let filters = use_controller(move || FilterBar::new(tags.iter().map(String::as_str)));
    let lightbox = use_lightbox(props.items.len());
    let fallback_emoji = config::site().lightbox_fallback_emoji;

    if props.items.is_empty() {
        return html! {};
    }

    let (controls, visible) = {
        let bar = filters.state();
        let controls: Vec<(Filter, bool)> = bar
            .filters()
            .iter()
            .enumerate()
            .map(|(i, f)| (f.clone(), bar.is_active(i)))
            .collect();
        let visible = bar.visibility(props.items.iter().map(|item| item.category.as_str()));
        (controls, visible)
    };

    html! {
        <section class="gallery">
            <div class="gallery-filters">
                { for controls.iter().enumerate().map(|(i, (filter, active))| {
                    let tag = match filter {
                        Filter::All => crate::widgets::gallery::ALL.to_string(),
                        Filter::Category(tag) => tag.clone(),
                    };
                    html! {
                        <button
                            class={classes!("filter-btn", active.then(|| "active"))}
                            data-filter={tag}
                            onclick={filters.callback(move |_: MouseEvent| FilterMsg::Select(i))}
                        >
                            {label(filter)}
                        </button>
                    }
                }) }
            </div>

            <div class="gallery-grid">
                { for props.items.iter().zip(visible).enumerate().map(|(i, (item, show))| html! {
                    <div
                        class="gallery-item"
                        data-category={item.category.clone()}
                        style={if show { "" } else { "display: none;" }}
                        onclick={lightbox.driver.callback(move |_: MouseEvent| LightboxMsg::Open(i as isize))}
                    >
                        <div class="placeholder-gallery">
                            <span>{&item.emoji}</span>
                        </div>
                        <div class="gallery-overlay">
                            <h3>{&item.title}</h3>
                            <p>{&item.subtitle}</p>
                        </div>
                    </div>
                }) }
            </div>

            { lightbox.view(&props.items, fallback_emoji) }

            <style>
                {r#"
                .gallery {
                    max-width: 1100px;
                    margin: 32px auto;
                    padding: 0 20px;
                }
                .gallery-filters {
                    display: flex;
                    gap: 10px;
                    margin-bottom: 24px;
                }
                .filter-btn {
                    padding: 8px 16px;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    color: var(--text);
                    cursor: pointer;
                }
                .filter-btn.active {
                    background: var(--accent);
                    border-color: var(--accent);
                    color: #fff;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 20px;
                }
                .gallery-item {
                    border-radius: 12px;
                    overflow: hidden;
                    background: var(--surface);
                    cursor: pointer;
                }
                .placeholder-gallery {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    height: 160px;
                    font-size: 56px;
                    background: var(--muted);
                }
                .gallery-overlay {
                    padding: 12px 16px;
                }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    display: none;
                    align-items: center;
                    justify-content: center;
                    gap: 24px;
                    background: rgba(0, 0, 0, 0.85);
                    z-index: 500;
                }
                .lightbox.active {
                    display: flex;
                }
                .lightbox-content {
                    text-align: center;
                    color: #fff;
                }
                .lightbox-emoji {
                    font-size: 120px;
                }
                .lightbox-close {
                    position: absolute;
                    top: 20px;
                    right: 24px;
                }
                .lightbox button {
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 40px;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}

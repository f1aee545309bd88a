use yew::prelude::*;

use crate::config;
use crate::content::Slide;
use crate::driver::use_controller;
use crate::widgets::slider::{Slider, SliderMsg};

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<Slide>,
}

#[function_component(HeroSlider)]
pub fn hero_slider(props: &HeroSliderProps) -> Html {
    let len = props.slides.len();
    let interval_ms = config::site().slide_interval_ms;
    let driver = use_controller(move || Slider::new(len, interval_ms));

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |_| {
                driver.dispatch(SliderMsg::Start);
                || ()
            },
            (),
        );
    }

    if props.slides.is_empty() {
        return html! {};
    }

    let (transform, dots) = {
        let slider = driver.state();
        let dots: Vec<bool> = (0..len).map(|i| slider.is_dot_active(i)).collect();
        (slider.transform(), dots)
    };

    html! {
        <section
            class="hero-slider"
            onmouseenter={driver.callback(|_: MouseEvent| SliderMsg::Hover(true))}
            onmouseleave={driver.callback(|_: MouseEvent| SliderMsg::Hover(false))}
        >
            <div class="slider-container" style={format!("transform: {};", transform)}>
                { for props.slides.iter().map(|slide| html! {
                    <div class="slide">
                        <h1>{&slide.title}</h1>
                        <p>{&slide.text}</p>
                        { for slide.cta.iter().map(|cta| html! {
                            <span class="btn btn-primary">{cta}</span>
                        }) }
                    </div>
                }) }
            </div>

            <button
                class="slider-arrow prev"
                aria-label="Previous slide"
                onclick={driver.callback(|_: MouseEvent| SliderMsg::Step(-1))}
            >
                {"‹"}
            </button>
            <button
                class="slider-arrow next"
                aria-label="Next slide"
                onclick={driver.callback(|_: MouseEvent| SliderMsg::Step(1))}
            >
                {"›"}
            </button>

            <div class="slider-dots">
                { for dots.into_iter().enumerate().map(|(i, active)| html! {
                    <button
                        class={classes!("slider-dot", active.then(|| "active"))}
                        aria-label={format!("Go to slide {}", i + 1)}
                        onclick={driver.callback(move |_: MouseEvent| SliderMsg::Show(i as isize))}
                    />
                }) }
            </div>

            <style>
                {r#"
                .hero-slider {
                    position: relative;
                    overflow: hidden;
                    border-radius: 16px;
                    margin: 32px auto;
                    max-width: 1100px;
                }
                .slider-container {
                    display: flex;
                    transition: transform 0.6s ease;
                }
                .slide {
                    flex: 0 0 100%;
                    padding: 96px 64px;
                    background: linear-gradient(135deg, var(--accent), #0ea5e9);
                    color: #fff;
                }
                .slide h1 {
                    font-size: 44px;
                    margin: 0 0 16px;
                }
                .slider-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    border: none;
                    font-size: 32px;
                    width: 44px;
                    height: 44px;
                    border-radius: 50%;
                    cursor: pointer;
                }
                .slider-arrow.prev { left: 16px; }
                .slider-arrow.next { right: 16px; }
                .slider-dots {
                    position: absolute;
                    bottom: 16px;
                    width: 100%;
                    display: flex;
                    justify-content: center;
                    gap: 8px;
                }
                .slider-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.5);
                    cursor: pointer;
                }
                .slider-dot.active {
                    background: #fff;
                }
                "#}
            </style>
        </section>
    }
}

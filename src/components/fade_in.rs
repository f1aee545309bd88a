use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

use crate::components::dom;

/// Fades the page in once, on first mount.
#[hook]
pub fn use_fade_in() {
    use_effect_with_deps(
        move |_| {
            dom::set_body_style("opacity", "0");
            dom::set_body_style("transition", "opacity 0.4s ease");
            let reveal = Closure::once_into_js(move || dom::set_body_style("opacity", "1"));
            match window() {
                Some(window) => {
                    if let Err(e) = window.request_animation_frame(reveal.unchecked_ref()) {
                        gloo_console::error!("Failed to schedule fade-in", e);
                        dom::set_body_style("opacity", "1");
                    }
                }
                None => dom::set_body_style("opacity", "1"),
            }
            || ()
        },
        (),
    );
}

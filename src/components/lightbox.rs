use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent};
use yew::prelude::*;

use crate::components::dom;
use crate::content::GalleryItem;
use crate::driver::{use_controller, Driver};
use crate::widgets::lightbox::{Caption, Lightbox, LightboxMsg};

pub struct LightboxHandle {
    pub driver: Rc<Driver<Lightbox>>,
    overlay: NodeRef,
}

/// Lightbox over `len` items, with its document-level keyboard handling and
/// page scroll lock.
#[hook]
pub fn use_lightbox(len: usize) -> LightboxHandle {
    let driver = use_controller(move || Lightbox::new(len));
    let overlay = use_node_ref();

    {
        let driver = driver.clone();
        use_effect_with_deps(
            move |_| {
                let document = window().and_then(|w| w.document());
                let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    driver.dispatch(LightboxMsg::Key(e.key()));
                }) as Box<dyn FnMut(KeyboardEvent)>);

                if let Some(document) = &document {
                    if let Err(e) = document
                        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    {
                        gloo_console::error!("Failed to watch lightbox keys", e);
                    }
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let open = driver.state().is_open();
    use_effect_with_deps(
        move |open| {
            let open = *open;
            if open {
                dom::set_body_style("overflow", "hidden");
            }
            move || {
                if open {
                    dom::set_body_style("overflow", "");
                }
            }
        },
        open,
    );

    LightboxHandle { driver, overlay }
}

impl LightboxHandle {
    pub fn view(&self, items: &[GalleryItem], fallback_emoji: &str) -> Html {
        let (open, current) = {
            let lightbox = self.driver.state();
            (lightbox.is_open(), lightbox.current())
        };
        let caption = items
            .get(current)
            .map(|item| Caption::for_item(&item.emoji, &item.title, &item.subtitle, fallback_emoji))
            .unwrap_or_else(|| Caption::for_item("", "", "", fallback_emoji));

        let overlay = self.overlay.clone();
        let backdrop = self.driver.callback(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            LightboxMsg::Backdrop {
                on_backdrop: target.is_some() && target == overlay.cast::<Element>(),
            }
        });

        html! {
            <div
                id="lightbox"
                class={classes!("lightbox", open.then(|| "active"))}
                aria-hidden={(!open).to_string()}
                ref={self.overlay.clone()}
                onclick={backdrop}
            >
                <button
                    id="lightboxClose"
                    class="lightbox-close"
                    aria-label="Close"
                    onclick={self.driver.callback(|_: MouseEvent| LightboxMsg::Close)}
                >
                    {"×"}
                </button>
                <button
                    id="lightboxPrev"
                    class="lightbox-nav prev"
                    aria-label="Previous"
                    onclick={self.driver.callback(|_: MouseEvent| LightboxMsg::Step(-1))}
                >
                    {"‹"}
                </button>
                <div class="lightbox-content">
                    <span id="lightboxEmoji" class="lightbox-emoji">{caption.emoji}</span>
                    <p id="lightboxCaption" class="lightbox-caption">{caption.text}</p>
                </div>
                <button
                    id="lightboxNext"
                    class="lightbox-nav next"
                    aria-label="Next"
                    onclick={self.driver.callback(|_: MouseEvent| LightboxMsg::Step(1))}
                >
                    {"›"}
                </button>
            </div>
        }
    }
}

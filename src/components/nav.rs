use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Node};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::driver::use_controller;
use crate::widgets::nav::{NavMenu, NavMsg};
use crate::Route;

fn contains(container: &NodeRef, target: Option<&Node>) -> bool {
    container.get().map_or(false, |node| node.contains(target))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let driver = use_controller(NavMenu::default);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Any click that lands outside both the menu and its toggle closes it.
    {
        let driver = driver.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |_| {
                let document = window().and_then(|w| w.document());
                let outside_click = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    if !contains(&menu_ref, target.as_ref()) && !contains(&toggle_ref, target.as_ref()) {
                        driver.dispatch(NavMsg::Close);
                    }
                }) as Box<dyn FnMut(web_sys::MouseEvent)>);

                if let Some(document) = &document {
                    if let Err(e) = document.add_event_listener_with_callback(
                        "click",
                        outside_click.as_ref().unchecked_ref(),
                    ) {
                        gloo_console::error!("Failed to watch outside clicks", e);
                    }
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "click",
                            outside_click.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = driver.callback(|e: MouseEvent| {
        e.prevent_default();
        NavMsg::Toggle
    });
    let close_menu = driver.callback(|_: MouseEvent| NavMsg::Close);
    let open = driver.state().is_open();

    let links = [
        (Route::Home, "Home"),
        (Route::Gallery, "Gallery"),
        (Route::Faq, "FAQ"),
        (Route::Contact, "Contact"),
    ];

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Tech Club"}
                </Link<Route>>

                <button
                    id="mobileMenuToggle"
                    class="burger-menu"
                    aria-label="Toggle navigation"
                    aria-expanded={open.to_string()}
                    ref={toggle_ref}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav id="nav" class={classes!("nav", open.then(|| "open"))} ref={menu_ref}>
                    { for links.into_iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route} classes="nav-link">{label}</Link<Route>>
                        </div>
                    }) }
                </nav>

                <ThemeToggle />
            </div>
            <style>
                {r#"
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 100;
                    background: var(--surface);
                    border-bottom: 1px solid var(--border);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 24px;
                    padding: 14px 20px;
                }
                .nav-logo {
                    font-weight: 700;
                    font-size: 20px;
                    color: var(--accent);
                    text-decoration: none;
                    margin-right: auto;
                }
                .nav {
                    display: flex;
                    gap: 20px;
                }
                .nav-link {
                    color: var(--text);
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: var(--text);
                }
                .theme-toggle {
                    background: none;
                    border: 1px solid var(--border);
                    border-radius: 999px;
                    padding: 6px 10px;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 16px 20px;
                        background: var(--surface);
                    }
                    .nav.open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod content;
mod driver;
mod error;
mod timer;
mod widgets;
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod gallery;
    pub mod home;
}

use components::fade_in::use_fade_in;
use components::nav::Nav;
use components::notification::NotificationProvider;
use content::SiteContent;
use pages::{contact::Contact, faq::Faq, gallery::GalleryPage, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/gallery")]
    Gallery,
    #[at("/faq")]
    Faq,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <GalleryPage /> }
        }
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| SiteContent::load(), ());
    use_fade_in();

    html! {
        <ContextProvider<Rc<SiteContent>> context={content}>
            <BrowserRouter>
                <NotificationProvider>
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                </NotificationProvider>
            </BrowserRouter>
            <style>
                {r#"
                :root {
                    --bg: #f8fafc;
                    --surface: #ffffff;
                    --muted: #e2e8f0;
                    --border: #e2e8f0;
                    --text: #0f172a;
                    --text-muted: #475569;
                    --accent: #6366f1;
                }
                [data-theme="dark"] {
                    --bg: #0b1120;
                    --surface: #111827;
                    --muted: #1f2937;
                    --border: #1f2937;
                    --text: #e2e8f0;
                    --text-muted: #94a3b8;
                    --accent: #818cf8;
                }
                body {
                    margin: 0;
                    background: var(--bg);
                    color: var(--text);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .section {
                    max-width: 1100px;
                    margin: 48px auto;
                    padding: 0 20px;
                }
                .btn {
                    display: inline-block;
                    padding: 10px 20px;
                    border-radius: 8px;
                    border: 1px solid var(--accent);
                    color: var(--accent);
                    background: transparent;
                    text-decoration: none;
                    cursor: pointer;
                    margin-right: 12px;
                }
                .btn-primary {
                    background: var(--accent);
                    color: #fff;
                }
                .btn:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                .membership-grid,
                .video-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 20px;
                }
                .membership-card,
                .video-placeholder {
                    padding: 24px;
                    border-radius: 12px;
                    background: var(--surface);
                    border: 1px solid var(--border);
                }
                .video-placeholder {
                    text-align: center;
                    cursor: pointer;
                }
                .play-icon {
                    font-size: 40px;
                    color: var(--accent);
                }
                "#}
            </style>
        </ContextProvider<Rc<SiteContent>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    config::log_active();
    yew::Renderer::<App>::new().render();
}

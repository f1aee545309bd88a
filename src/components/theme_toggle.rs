use yew::prelude::*;

use crate::components::dom;
use crate::config;
use crate::driver::use_controller;
use crate::widgets::theme::{LocalThemeStore, Theme, ThemeMsg, ThemeSwitcher};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let driver = use_controller(|| {
        ThemeSwitcher::init(LocalThemeStore::new(config::site().theme_storage_key))
    });
    let theme = driver.state().current();

    use_effect_with_deps(
        move |theme| {
            dom::set_root_attribute("data-theme", theme.as_str());
            || ()
        },
        theme,
    );

    let (icon, label) = match theme {
        Theme::Light => ("🌙", "Switch to dark theme"),
        Theme::Dark => ("☀️", "Switch to light theme"),
    };

    html! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            aria-label={label}
            onclick={driver.callback(|_: MouseEvent| ThemeMsg::Toggle)}
        >
            {icon}
        </button>
    }
}

use yew::prelude::*;

use crate::config;
use crate::driver::use_controller;
use crate::widgets::notify::{Notice, Notifier, NotifyMsg};

/// Handle to the page's single toast slot, provided through context.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    show: Callback<Notice>,
}

impl Toaster {
    pub fn notify(&self, notice: Notice) {
        self.show.emit(notice);
    }
}

/// The toaster from the nearest `NotificationProvider`. Outside of one,
/// notices are only logged.
#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| Toaster {
        show: Callback::from(|notice: Notice| {
            log::warn!("No notification provider for: {}", notice.message);
        }),
    })
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let timeout_ms = config::site().toast_timeout_ms;
    let driver = use_controller(move || Notifier::new(timeout_ms));
    let toaster = {
        let driver = driver.clone();
        use_memo(move |_| Toaster { show: driver.callback(NotifyMsg::Show) }, ())
    };

    let toast = driver.state().current().cloned();
    let toast_html = match toast {
        Some(toast) => {
            let id = toast.id;
            let close = driver.callback(move |_: MouseEvent| NotifyMsg::Dismiss(id));
            html! {
                <div
                    key={id.to_string()}
                    class="notification"
                    role="status"
                    style={format!("background: {};", toast.notice.severity.color())}
                >
                    <span>{toast.notice.message}</span>
                    <button type="button" aria-label="Close notification" onclick={close}>
                        {"×"}
                    </button>
                </div>
            }
        }
        None => html! {},
    };

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            { toast_html }
            <style>
                {r#"
                .notification {
                    position: fixed;
                    right: 24px;
                    bottom: 24px;
                    display: flex;
                    align-items: center;
                    gap: 16px;
                    padding: 14px 18px;
                    border-radius: 10px;
                    color: #fff;
                    box-shadow: 0 12px 24px rgba(0, 0, 0, 0.2);
                    z-index: 1000;
                    animation: toast-in 0.25s ease-out;
                }
                .notification button {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 20px;
                    cursor: pointer;
                }
                @keyframes toast-in {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

use yew::prelude::*;

use crate::content::FaqEntry;
use crate::driver::use_controller;
use crate::widgets::accordion::{Accordion, AccordionMsg};

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let driver = use_controller(Accordion::new);
    let open: Vec<bool> = {
        let accordion = driver.state();
        let open = (0..props.entries.len()).map(|i| accordion.is_open(i)).collect();
        open
    };

    html! {
        <div class="faq-list">
            { for props.entries.iter().zip(open).enumerate().map(|(i, (entry, is_open))| {
                html! {
                    <div class={classes!("faq-item", is_open.then(|| "open"))}>
                        <button
                            class="faq-question"
                            aria-expanded={is_open.to_string()}
                            onclick={driver.callback(move |e: MouseEvent| {
                                e.prevent_default();
                                AccordionMsg::Toggle(i)
                            })}
                        >
                            <span class="question-text">{&entry.question}</span>
                            <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{&entry.answer}</p>
                        </div>
                    </div>
                }
            }) }
            <style>
                {r#"
                .faq-item {
                    border-bottom: 1px solid var(--border);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    padding: 18px 0;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 18px;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    display: none;
                    padding-bottom: 18px;
                    color: var(--text-muted);
                }
                .faq-item.open .faq-answer {
                    display: block;
                }
                "#}
            </style>
        </div>
    }
}

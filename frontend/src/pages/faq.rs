use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::{FaqEntry, FAQ_ENTRIES};
use crate::pages::layout::Layout;

/// Clicking the open entry closes it, clicking any other entry opens that one instead.
fn toggle_entry(open: Option<u32>, clicked: u32) -> Option<u32> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    on_toggle: Callback<u32>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.entry.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    html! {
        <div class={classes!("faq-item", props.is_open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{props.entry.answer}</p>
                </div>
            }
        </div>
    }
}

#[function_component(FaqAccordion)]
pub fn faq_accordion() -> Html {
    let open_entry = use_state(|| None::<u32>);

    let on_toggle = {
        let open_entry = open_entry.clone();
        Callback::from(move |id: u32| open_entry.set(toggle_entry(*open_entry, id)))
    };

    html! {
        <section id="faq" class="faq-section">
            <style>
                {r#"
                .faq-section {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }
                .faq-section h2 {
                    text-align: center;
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin-bottom: 2rem;
                }
                .faq-item {
                    margin-bottom: 1rem;
                    border-radius: 0.75rem;
                    background: white;
                    border: 1px solid #f3e8d8;
                    overflow: hidden;
                }
                .faq-item.open { border-color: #d97706; }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    border: none;
                    background: none;
                    font-size: 1.1rem;
                    text-align: left;
                    color: #1f2937;
                    cursor: pointer;
                }
                .toggle-icon {
                    font-size: 1.5rem;
                    color: #d97706;
                }
                .faq-answer {
                    padding: 0 1.5rem 1.25rem;
                    color: #4b5563;
                    line-height: 1.7;
                    animation: fadeIn 0.3s ease;
                }
                "#}
            </style>
            <h2>{"Frequently Asked Questions"}</h2>
            { for FAQ_ENTRIES.iter().map(|entry| html! {
                <FaqItem
                    key={entry.id}
                    entry={entry.clone()}
                    is_open={*open_entry == Some(entry.id)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </section>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <Layout
            title="FAQ | Café Gamma"
            description="Answers about opening hours, bookings, events, dietary options and parking at Café Gamma"
        >
            <div class="faq-page">
                <FaqAccordion />
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_entry_closes_the_previous_one() {
        let open = toggle_entry(None, 3);
        assert_eq!(open, Some(3));
        assert_eq!(toggle_entry(open, 5), Some(5));
    }

    #[test]
    fn clicking_the_open_entry_closes_it() {
        assert_eq!(toggle_entry(Some(2), 2), None);
    }
}

use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::forms::validation::is_valid_newsletter_email;
use crate::forms::{simulate_submit, SubmitState};

#[derive(serde::Serialize)]
struct Subscription {
    email: String,
}

#[function_component(NewsletterSignup)]
pub fn newsletter_signup() -> Html {
    let email = use_state(String::new);
    // None until the visitor submits; reset on every keystroke.
    let is_valid = use_state(|| None::<bool>);
    let submit_state = use_state(SubmitState::default);

    let on_input = {
        let email = email.clone();
        let is_valid = is_valid.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            is_valid.set(None);
        })
    };

    let on_submit = {
        let email = email.clone();
        let is_valid = is_valid.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submit_state.is_pending() {
                return;
            }
            let valid = is_valid_newsletter_email(&email);
            is_valid.set(Some(valid));
            if !valid {
                return;
            }
            let subscription = Subscription { email: (*email).clone() };
            submit_state.set(SubmitState::Pending);

            let email = email.clone();
            let is_valid = is_valid.clone();
            let submit_state = submit_state.clone();
            spawn_local(async move {
                match simulate_submit("newsletter", &subscription, config::NEWSLETTER_SUBMIT_DELAY_MS).await {
                    Ok(()) => {
                        email.set(String::new());
                        is_valid.set(None);
                        submit_state.set(SubmitState::Succeeded);
                    }
                    Err(err) => {
                        error!("Newsletter signup failed: {}", err);
                        submit_state.set(SubmitState::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <section class="newsletter-section">
            <style>
                {r#"
                .newsletter-section {
                    padding: 4rem 1rem;
                    background: linear-gradient(135deg, #92400e, #d97706);
                    color: white;
                    text-align: center;
                }
                .newsletter-section h2 {
                    font-size: 2rem;
                    margin-bottom: 0.75rem;
                }
                .newsletter-section p { margin-bottom: 1.5rem; opacity: 0.9; }
                .newsletter-form {
                    max-width: 32rem;
                    margin: 0 auto;
                    display: flex;
                    gap: 0.5rem;
                }
                .newsletter-form input {
                    flex: 1;
                    padding: 0.8rem 1rem;
                    border: 2px solid transparent;
                    border-radius: 9999px;
                    font-size: 1rem;
                }
                .newsletter-form input.invalid { border-color: #fecaca; }
                .newsletter-form button {
                    padding: 0.8rem 1.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: #1f2937;
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                }
                .newsletter-error { margin-top: 0.75rem; color: #fecaca; }
                .newsletter-success {
                    margin-top: 1rem;
                    font-weight: 600;
                    animation: fadeIn 0.3s ease;
                }
                "#}
            </style>
            <h2>{"Join Our Newsletter"}</h2>
            <p>{"New dishes, events and offers straight to your inbox."}</p>
            <form class="newsletter-form" onsubmit={on_submit} novalidate={true}>
                <input
                    type="email"
                    placeholder="Your email address"
                    aria-label="Email address"
                    class={classes!((*is_valid == Some(false)).then(|| "invalid"))}
                    value={(*email).clone()}
                    oninput={on_input}
                />
                <button type="submit" disabled={submit_state.is_pending()}>
                    {if submit_state.is_pending() { "Subscribing..." } else { "Subscribe" }}
                </button>
            </form>
            if *is_valid == Some(false) {
                <p class="newsletter-error">{"Please enter a valid email address"}</p>
            }
            if let Some(message) = submit_state.error() {
                <p class="newsletter-error">{message.to_string()}</p>
            }
            if *submit_state == SubmitState::Succeeded {
                <p class="newsletter-success">
                    {"Thanks for subscribing! A 10% coupon for your next visit is on its way."}
                </p>
            }
        </section>
    }
}

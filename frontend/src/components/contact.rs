use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::validation::{ContactErrors, ContactForm};
use crate::forms::{simulate_submit, SubmitState};

#[function_component(ContactInfo)]
fn contact_info() -> Html {
    html! {
        <div class="contact-info">
            <h3>{"Visit us"}</h3>
            <p>{"📍 "}{config::CAFE_ADDRESS}</p>
            <p>{"📞 "}<a href={format!("tel:{}", config::CAFE_PHONE)}>{config::CAFE_PHONE}</a></p>
            <p>{"✉ "}<a href={format!("mailto:{}", config::CAFE_EMAIL)}>{config::CAFE_EMAIL}</a></p>
            <h3>{"Opening hours"}</h3>
            <ul class="hours-list">
                { for config::OPENING_HOURS.iter().map(|(days, hours)| html! {
                    <li key={*days}><span>{*days}</span><span>{*hours}</span></li>
                }) }
            </ul>
            <div class="social-links">
                { for config::SOCIAL_LINKS.iter().map(|link| html! {
                    <a
                        key={link.label}
                        href={link.href}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={link.label}
                    >
                        {link.icon}
                    </a>
                }) }
            </div>
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(ContactErrors::default);
    let submit_state = use_state(SubmitState::default);

    let update_input = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
            if submit_state.cleared_by_edit() {
                submit_state.set(SubmitState::Idle);
            }
        })
    };
    let on_name = update_input(|f, v| f.name = v);
    let on_phone = update_input(|f, v| f.phone = v);
    let on_email = update_input(|f, v| f.email = v);

    let on_message = {
        let form = form.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = area.value();
            form.set(next);
            if submit_state.cleared_by_edit() {
                submit_state.set(SubmitState::Idle);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let submit_state = submit_state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submit_state.is_pending() {
                return;
            }
            let found = form.validate();
            let valid = found.is_empty();
            errors.set(found);
            if !valid {
                return;
            }
            let payload = (*form).clone();
            submit_state.set(SubmitState::Pending);

            let form = form.clone();
            let submit_state = submit_state.clone();
            spawn_local(async move {
                match simulate_submit("contact", &payload, config::CONTACT_SUBMIT_DELAY_MS).await {
                    Ok(()) => {
                        form.set(ContactForm::default());
                        submit_state.set(SubmitState::Succeeded);
                    }
                    Err(err) => {
                        error!("Contact submit failed: {}", err);
                        submit_state.set(SubmitState::Failed(
                            "Something went wrong, please try again later.".to_string(),
                        ));
                    }
                }
            });
        })
    };

    let invalid = |message: Option<&'static str>| classes!(message.is_some().then(|| "invalid"));
    let error_line = |message: Option<&'static str>| match message {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                .contact-section {
                    padding: 4rem 1rem;
                    background: #fffbf5;
                }
                .contact-section h2 {
                    text-align: center;
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin-bottom: 2.5rem;
                }
                .contact-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 3fr 2fr;
                    gap: 2rem;
                }
                .contact-form,
                .contact-info {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: white;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
                }
                .contact-form label {
                    display: block;
                    margin: 0.75rem 0 0.35rem;
                    font-size: 0.9rem;
                    color: #4b5563;
                }
                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    padding: 0.7rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    font-size: 1rem;
                }
                .contact-form .invalid { border-color: #dc2626; }
                .contact-form button {
                    margin-top: 1.25rem;
                    padding: 0.8rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: #d97706;
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                }
                .contact-form button:disabled { background: #d1d5db; }
                .form-success {
                    margin-top: 1rem;
                    color: #15803d;
                }
                .contact-info h3 {
                    margin: 1rem 0 0.5rem;
                    color: #1f2937;
                }
                .contact-info p { margin-bottom: 0.4rem; color: #4b5563; }
                .contact-info a { color: #b45309; }
                .hours-list { list-style: none; padding: 0; }
                .hours-list li {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.25rem 0;
                    color: #4b5563;
                }
                .social-links {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .social-links a {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #fef3c7;
                    text-decoration: none;
                }
                .contact-map {
                    max-width: 72rem;
                    margin: 2rem auto 0;
                    border-radius: 1rem;
                    overflow: hidden;
                }
                .contact-map iframe {
                    width: 100%;
                    height: 350px;
                    border: 0;
                }
                @media (max-width: 768px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <h2>{"Get in Touch"}</h2>
            <div class="contact-grid">
                <form class="contact-form" onsubmit={on_submit} novalidate={true}>
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        class={invalid(errors.name)}
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                    { error_line(errors.name) }
                    <label for="contact-phone">{"Phone"}</label>
                    <input
                        id="contact-phone"
                        type="tel"
                        class={invalid(errors.phone)}
                        value={form.phone.clone()}
                        oninput={on_phone}
                    />
                    { error_line(errors.phone) }
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        class={invalid(errors.email)}
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                    { error_line(errors.email) }
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        rows="5"
                        class={invalid(errors.message)}
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                    { error_line(errors.message) }
                    <button type="submit" disabled={submit_state.is_pending()}>
                        {if submit_state.is_pending() { "Sending..." } else { "Send message" }}
                    </button>
                    {
                        match &*submit_state {
                            SubmitState::Succeeded => html! {
                                <p class="form-success">{"Thanks! We'll get back to you soon."}</p>
                            },
                            SubmitState::Failed(message) => html! {
                                <p class="field-error">{message.clone()}</p>
                            },
                            _ => html! {},
                        }
                    }
                </form>
                <ContactInfo />
            </div>
            <div class="contact-map">
                <iframe
                    title="Café Gamma on the map"
                    src={config::map_embed_url(config::MAP_POSITION)}
                    loading="lazy"
                />
                <a href={config::map_link_url(config::MAP_POSITION)} target="_blank" rel="noopener noreferrer">
                    {"Open a larger map"}
                </a>
            </div>
        </section>
    }
}

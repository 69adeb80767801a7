use chrono::Datelike;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::content::{FOOTER_LINKS, POLICY_LINKS};
use crate::forms::notice_timer;

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let subscribed = use_state(|| false);

    {
        let shown_now = *subscribed;
        let subscribed = subscribed.clone();
        use_effect_with_deps(
            move |shown| {
                let timer = notice_timer(*shown, || {
                    Timeout::new(config::FOOTER_SUBSCRIBED_MS, move || subscribed.set(false))
                });
                move || drop(timer)
            },
            shown_now,
        );
    }

    let on_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_subscribe = {
        let email = email.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.trim().is_empty() {
                return;
            }
            log::info!("Footer subscription received");
            email.set(String::new());
            subscribed.set(true);
        })
    };

    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    padding: 4rem 1rem 1.5rem;
                    background: #1f2937;
                    color: #d1d5db;
                }
                .footer-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .site-footer h3 {
                    margin-bottom: 1rem;
                    color: white;
                    font-size: 1.15rem;
                }
                .site-footer ul { list-style: none; padding: 0; }
                .site-footer li { margin-bottom: 0.5rem; }
                .site-footer a {
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .site-footer a:hover { color: #fbbf24; }
                .footer-social {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .footer-social a {
                    width: 2.25rem;
                    height: 2.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #374151;
                }
                .footer-subscribe {
                    display: flex;
                    margin-top: 1rem;
                }
                .footer-subscribe input {
                    flex: 1;
                    min-width: 0;
                    padding: 0.5rem 0.75rem;
                    border: none;
                    border-radius: 0.5rem 0 0 0.5rem;
                }
                .footer-subscribe button {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0 0.5rem 0.5rem 0;
                    background: #d97706;
                    color: white;
                    cursor: pointer;
                }
                .footer-thanks { margin-top: 0.5rem; color: #86efac; }
                .footer-bottom {
                    max-width: 72rem;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    border-top: 1px solid #374151;
                    font-size: 0.875rem;
                }
                .footer-bottom nav { display: flex; gap: 1rem; }
                @media (max-width: 1024px) {
                    .footer-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .footer-grid { grid-template-columns: 1fr; }
                    .footer-bottom { flex-direction: column; gap: 1rem; }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h3>{config::CAFE_NAME}</h3>
                    <p>{"Specialty coffee, fresh pastries and a warm corner in the middle of the city."}</p>
                    <div class="footer-social">
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
                <div>
                    <h3>{"Quick links"}</h3>
                    <ul>
                        { for FOOTER_LINKS.iter().map(|link| html! {
                            <li key={link.name}><a href={link.href}>{link.name}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Contact"}</h3>
                    <ul>
                        <li>{config::CAFE_ADDRESS}</li>
                        <li><a href={format!("tel:{}", config::CAFE_PHONE)}>{config::CAFE_PHONE}</a></li>
                        <li><a href={format!("mailto:{}", config::CAFE_EMAIL)}>{config::CAFE_EMAIL}</a></li>
                    </ul>
                </div>
                <div>
                    <h3>{"Opening hours"}</h3>
                    <ul>
                        { for config::OPENING_HOURS.iter().map(|(days, hours)| html! {
                            <li key={*days}>{format!("{}: {}", days, hours)}</li>
                        }) }
                    </ul>
                    <form class="footer-subscribe" onsubmit={on_subscribe}>
                        <input
                            type="email"
                            placeholder="Email for updates"
                            aria-label="Email for updates"
                            value={(*email).clone()}
                            oninput={on_input}
                        />
                        <button type="submit">{"Join"}</button>
                    </form>
                    if *subscribed {
                        <p class="footer-thanks">{"Thanks for joining!"}</p>
                    }
                </div>
            </div>
            <div class="footer-bottom">
                <span>{format!("© {} {}. All rights reserved.", year, config::CAFE_NAME)}</span>
                <nav>
                    { for POLICY_LINKS.iter().map(|link| html! {
                        <a key={link.name} href={link.href}>{link.name}</a>
                    }) }
                </nav>
            </div>
        </footer>
    }
}

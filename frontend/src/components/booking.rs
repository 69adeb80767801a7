use chrono::NaiveDate;
use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::forms::schedule::{calendar_days, time_slots, today};
use crate::forms::validation::{BookingErrors, BookingForm};
use crate::forms::{notice_timer, simulate_submit, SubmitState};

fn field_error(message: Option<&'static str>) -> Html {
    match message {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

#[function_component(BookingSystem)]
pub fn booking_system() -> Html {
    let days = use_memo(|_| calendar_days(today(), config::BOOKING_DAYS_AHEAD), ());
    let slots = use_memo(|_| time_slots(), ());

    let selected_date = use_state(|| None::<NaiveDate>);
    let selected_time = use_state(|| None::<String>);
    let form = use_state(BookingForm::default);
    let errors = use_state(BookingErrors::default);
    let submit_state = use_state(SubmitState::default);
    let show_confirmation = use_state(|| false);

    // Auto-hide the confirmation; closing it early or unmounting drops the timer.
    {
        let visible_now = *show_confirmation;
        let show_confirmation = show_confirmation.clone();
        use_effect_with_deps(
            move |visible| {
                let timer = notice_timer(*visible, || {
                    Timeout::new(config::BOOKING_CONFIRMATION_MS, move || {
                        show_confirmation.set(false)
                    })
                });
                move || drop(timer)
            },
            visible_now,
        );
    }

    let update_text = |apply: fn(&mut BookingForm, String), clear: fn(&mut BookingErrors)| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
            let mut cleared = (*errors).clone();
            clear(&mut cleared);
            errors.set(cleared);
        })
    };
    let on_name = update_text(|f, v| f.name = v, |e| e.name = None);
    let on_phone = update_text(|f, v| f.phone = v, |e| e.phone = None);
    let on_email = update_text(|f, v| f.email = v, |e| e.email = None);

    let on_guests = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(guests) = select.value().parse::<u8>() {
                let mut next = (*form).clone();
                next.guests = guests.clamp(1, config::MAX_GUESTS);
                form.set(next);
            }
        })
    };

    let on_requests = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.special_requests = area.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let selected_date = selected_date.clone();
        let selected_time = selected_time.clone();
        let submit_state = submit_state.clone();
        let show_confirmation = show_confirmation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submit_state.is_pending() {
                return;
            }
            let found = form.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            let (Some(date), Some(time)) = ((*selected_date).clone(), (*selected_time).clone()) else {
                return;
            };
            let submission = (*form).clone().into_submission(date, time);
            submit_state.set(SubmitState::Pending);

            let form = form.clone();
            let selected_date = selected_date.clone();
            let selected_time = selected_time.clone();
            let submit_state = submit_state.clone();
            let show_confirmation = show_confirmation.clone();
            spawn_local(async move {
                match simulate_submit("booking", &submission, config::BOOKING_SUBMIT_DELAY_MS).await {
                    Ok(()) => {
                        info!("Booking confirmed for {} at {}", submission.date, submission.time);
                        form.set(BookingForm::default());
                        selected_date.set(None);
                        selected_time.set(None);
                        submit_state.set(SubmitState::Succeeded);
                        show_confirmation.set(true);
                    }
                    Err(err) => {
                        error!("Booking submit failed: {}", err);
                        submit_state.set(SubmitState::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let close_confirmation = {
        let show_confirmation = show_confirmation.clone();
        Callback::from(move |_: MouseEvent| show_confirmation.set(false))
    };

    let can_submit =
        !submit_state.is_pending() && selected_date.is_some() && selected_time.is_some();

    html! {
        <section id="booking" class="booking-section">
            <style>
                {r#"
                .booking-section {
                    padding: 4rem 1rem;
                    background: #f5efe6;
                }
                .booking-card {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 2.5rem;
                    border-radius: 1.25rem;
                    background: white;
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.06);
                }
                .booking-card h2 {
                    text-align: center;
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin-bottom: 2rem;
                }
                .booking-card h3 {
                    margin: 1.5rem 0 0.75rem;
                    color: #374151;
                }
                .date-grid {
                    display: grid;
                    grid-template-columns: repeat(7, 1fr);
                    gap: 0.5rem;
                }
                .time-grid {
                    display: grid;
                    grid-template-columns: repeat(6, 1fr);
                    gap: 0.5rem;
                }
                .slot-button {
                    padding: 0.6rem 0.25rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    background: white;
                    color: #374151;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .slot-button:hover { border-color: #d97706; }
                .slot-button.selected {
                    background: #d97706;
                    border-color: #d97706;
                    color: white;
                }
                .booking-fields {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .booking-fields .full { grid-column: span 2; }
                .booking-fields label {
                    display: block;
                    margin-bottom: 0.35rem;
                    font-size: 0.9rem;
                    color: #4b5563;
                }
                .booking-fields input,
                .booking-fields select,
                .booking-fields textarea {
                    width: 100%;
                    padding: 0.7rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    font-size: 1rem;
                }
                .booking-fields .invalid { border-color: #dc2626; }
                .field-error {
                    margin-top: 0.25rem;
                    font-size: 0.85rem;
                    color: #dc2626;
                }
                .booking-submit {
                    width: 100%;
                    margin-top: 1.5rem;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 9999px;
                    background: #d97706;
                    color: white;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .booking-submit:disabled {
                    background: #d1d5db;
                    cursor: not-allowed;
                }
                .confirmation-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.5);
                    animation: fadeIn 0.3s ease;
                }
                .confirmation-content {
                    max-width: 24rem;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: white;
                    text-align: center;
                }
                .confirmation-content button {
                    margin-top: 1.25rem;
                    padding: 0.6rem 1.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: #d97706;
                    color: white;
                    cursor: pointer;
                }
                @media (max-width: 768px) {
                    .date-grid { grid-template-columns: repeat(4, 1fr); }
                    .time-grid { grid-template-columns: repeat(4, 1fr); }
                    .booking-fields { grid-template-columns: 1fr; }
                    .booking-fields .full { grid-column: span 1; }
                }
                "#}
            </style>
            <form class="booking-card" onsubmit={on_submit} novalidate={true}>
                <h2>{"Reserve a Table"}</h2>

                <h3>{"Pick a date"}</h3>
                <div class="date-grid">
                    { for days.iter().map(|day| {
                        let day = *day;
                        let onclick = {
                            let selected_date = selected_date.clone();
                            Callback::from(move |_: MouseEvent| selected_date.set(Some(day)))
                        };
                        html! {
                            <button
                                type="button"
                                key={day.to_string()}
                                class={classes!("slot-button", (*selected_date == Some(day)).then(|| "selected"))}
                                {onclick}
                            >
                                {day.format("%a %d/%m").to_string()}
                            </button>
                        }
                    }) }
                </div>

                <h3>{"Pick a time"}</h3>
                <div class="time-grid">
                    { for slots.iter().map(|slot| {
                        let is_selected = selected_time.as_deref() == Some(slot.as_str());
                        let onclick = {
                            let selected_time = selected_time.clone();
                            let slot = slot.clone();
                            Callback::from(move |_: MouseEvent| selected_time.set(Some(slot.clone())))
                        };
                        html! {
                            <button
                                type="button"
                                key={slot.clone()}
                                class={classes!("slot-button", is_selected.then(|| "selected"))}
                                {onclick}
                            >
                                {slot.clone()}
                            </button>
                        }
                    }) }
                </div>

                <h3>{"Your details"}</h3>
                <div class="booking-fields">
                    <div>
                        <label for="booking-name">{"Full name"}</label>
                        <input
                            id="booking-name"
                            type="text"
                            class={classes!(errors.name.is_some().then(|| "invalid"))}
                            value={form.name.clone()}
                            oninput={on_name}
                        />
                        { field_error(errors.name) }
                    </div>
                    <div>
                        <label for="booking-phone">{"Phone"}</label>
                        <input
                            id="booking-phone"
                            type="tel"
                            placeholder="050-1234567"
                            class={classes!(errors.phone.is_some().then(|| "invalid"))}
                            value={form.phone.clone()}
                            oninput={on_phone}
                        />
                        { field_error(errors.phone) }
                    </div>
                    <div>
                        <label for="booking-email">{"Email"}</label>
                        <input
                            id="booking-email"
                            type="email"
                            class={classes!(errors.email.is_some().then(|| "invalid"))}
                            value={form.email.clone()}
                            oninput={on_email}
                        />
                        { field_error(errors.email) }
                    </div>
                    <div>
                        <label for="booking-guests">{"Guests"}</label>
                        <select id="booking-guests" onchange={on_guests}>
                            { for (1..=config::MAX_GUESTS).map(|n| html! {
                                <option value={n.to_string()} selected={form.guests == n}>
                                    {if n == 1 { "1 guest".to_string() } else { format!("{} guests", n) }}
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="full">
                        <label for="booking-requests">{"Special requests (optional)"}</label>
                        <textarea
                            id="booking-requests"
                            rows="3"
                            value={form.special_requests.clone()}
                            oninput={on_requests}
                        />
                    </div>
                </div>

                if let Some(message) = submit_state.error() {
                    <p class="field-error">{message.to_string()}</p>
                }

                <button type="submit" class="booking-submit" disabled={!can_submit}>
                    {if submit_state.is_pending() { "Processing..." } else { "Book now" }}
                </button>
            </form>

            if *show_confirmation {
                <div class="confirmation-modal" onclick={close_confirmation.clone()}>
                    <div
                        class="confirmation-content"
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    >
                        <h3>{"Your table is booked!"}</h3>
                        <p>{"A confirmation will be sent to your email. See you soon at Café Gamma."}</p>
                        <button onclick={close_confirmation}>{"Close"}</button>
                    </div>
                </div>
            }
        </section>
    }
}

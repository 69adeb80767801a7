use std::rc::Rc;

use yew::prelude::*;

use crate::carousel::{live_region, use_breakpoint, use_carousel, CarouselIndicators, CAROUSEL_STYLE};
use crate::config;
use crate::content::{Testimonial, TESTIMONIALS};

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <div class="testimonial-card">
            <span class="quote-mark">{"❞"}</span>
            <div class="testimonial-header">
                {
                    match t.image {
                        Some(src) => html! {
                            <img class="testimonial-avatar" src={src} alt={t.name} />
                        },
                        None => html! {
                            <div class="testimonial-avatar placeholder">{t.initial()}</div>
                        },
                    }
                }
                <div>
                    <h3>{t.name}</h3>
                    <div class="stars" aria-label={format!("{} out of 5 stars", t.rating)}>
                        { for (0..5u8).map(|i| html! {
                            <span class={classes!("star", (i < t.rating).then(|| "filled"))}>{"★"}</span>
                        }) }
                    </div>
                </div>
            </div>
            <p class="testimonial-quote">{format!("\"{}\"", t.quote)}</p>
        </div>
    }
}

#[function_component(TestimonialsSlider)]
pub fn testimonials_slider() -> Html {
    let testimonials = use_memo(|_| Rc::<[Testimonial]>::from(TESTIMONIALS), ());
    let breakpoint = use_breakpoint();
    let carousel = use_carousel(
        (*testimonials).clone(),
        breakpoint.visible_count(),
        config::AUTOPLAY_INTERVAL_MS,
    );

    let pause = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set_autoplay(false))
    };
    let resume = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.set_autoplay(true))
    };
    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.retreat())
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.advance())
    };
    let on_select = {
        let carousel = carousel.clone();
        Callback::from(move |index: usize| carousel.jump_to(index))
    };

    html! {
        <section id="testimonials" class="testimonials-section">
            <style>{CAROUSEL_STYLE}</style>
            <style>
                {r#"
                .testimonials-section {
                    position: relative;
                    width: 100%;
                    padding: 3rem 1rem;
                    background: #f5efe6;
                    overflow: hidden;
                }
                .testimonials-section .section-title {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .testimonials-section h2 {
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin-bottom: 1rem;
                }
                .title-underline {
                    width: 6rem;
                    height: 4px;
                    margin: 0 auto;
                    border-radius: 9999px;
                    background: #d97706;
                }
                .testimonials-frame {
                    position: relative;
                    max-width: 72rem;
                    margin: 0 auto 2.5rem;
                    padding: 2rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.25);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    backdrop-filter: blur(10px);
                }
                .testimonials-track {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                }
                .testimonial-card {
                    position: relative;
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    background: #f5efe6;
                    box-shadow: 8px 8px 16px #d9d3ca, -8px -8px 16px #ffffff;
                    transition: transform 0.3s ease;
                }
                .testimonial-card:hover { transform: scale(1.05); }
                .quote-mark {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    font-size: 1.5rem;
                    color: #d97706;
                    opacity: 0.3;
                }
                .testimonial-header {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .testimonial-avatar {
                    width: 4rem;
                    height: 4rem;
                    margin-right: 1rem;
                    border-radius: 50%;
                    border: 2px solid #d97706;
                    object-fit: cover;
                }
                .testimonial-avatar.placeholder {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                    font-weight: bold;
                    color: #374151;
                    background: rgba(217, 119, 6, 0.2);
                }
                .testimonial-header h3 {
                    font-size: 1.25rem;
                    color: #1f2937;
                }
                .star { color: #d1d5db; }
                .star.filled { color: #eab308; }
                .testimonial-quote {
                    flex-grow: 1;
                    color: #374151;
                    line-height: 1.6;
                }
                "#}
            </style>
            <div class="section-title">
                <h2>{"What Our Customers Say"}</h2>
                <div class="title-underline"></div>
            </div>
            <div
                class="testimonials-frame"
                onmouseenter={pause}
                onmouseleave={resume}
            >
                <div
                    key={carousel.current_index().to_string()}
                    class={classes!("testimonials-track", carousel.direction().enter_class())}
                    aria-live={live_region(carousel.autoplay_enabled())}
                >
                    { for carousel.visible_window().into_iter().enumerate().map(|(slot, testimonial)| html! {
                        <TestimonialCard
                            key={format!("{}-{}", testimonial.id, slot)}
                            testimonial={testimonial.clone()}
                        />
                    }) }
                </div>
                <CarouselIndicators
                    item_count={carousel.item_count()}
                    current_index={carousel.current_index()}
                    visible_count={carousel.visible_count()}
                    on_select={on_select}
                />
                <button
                    class="carousel-arrow prev"
                    aria-label="Previous testimonial"
                    onclick={on_prev}
                >
                    {"‹"}
                </button>
                <button
                    class="carousel-arrow next"
                    aria-label="Next testimonial"
                    onclick={on_next}
                >
                    {"›"}
                </button>
            </div>
        </section>
    }
}

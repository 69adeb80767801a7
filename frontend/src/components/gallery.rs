use std::rc::Rc;

use yew::prelude::*;

use crate::carousel::{live_region, use_breakpoint, use_carousel, CarouselIndicators, CAROUSEL_STYLE};
use crate::config;
use crate::content::{GalleryImage, GALLERY_IMAGES};

#[function_component(AtmosphereGallery)]
pub fn atmosphere_gallery() -> Html {
    let images = use_memo(|_| Rc::<[GalleryImage]>::from(GALLERY_IMAGES), ());
    let breakpoint = use_breakpoint();
    let carousel = use_carousel(
        (*images).clone(),
        breakpoint.visible_count(),
        config::AUTOPLAY_INTERVAL_MS,
    );
    let zoomed = use_state(|| None::<GalleryImage>);

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
    let close_zoom = {
        let zoomed = zoomed.clone();
        Callback::from(move |_: MouseEvent| zoomed.set(None))
    };

    html! {
        <section id="gallery" class="gallery-section">
            <style>{CAROUSEL_STYLE}</style>
            <style>
                {r#"
                .gallery-section {
                    width: 100%;
                    padding: 3rem 1rem;
                    overflow: hidden;
                }
                .gallery-section h2 {
                    font-size: 2.25rem;
                    font-weight: bold;
                    margin-bottom: 2rem;
                    text-align: center;
                    background: linear-gradient(to right, #d97706, #92400e);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .gallery-frame {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.3);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(4px);
                }
                .gallery-viewport {
                    position: relative;
                    height: 500px;
                    overflow: hidden;
                }
                .gallery-grid {
                    display: grid;
                    gap: 1rem;
                    height: 100%;
                }
                .gallery-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 0.75rem;
                }
                .gallery-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .gallery-card:hover img { transform: scale(1.05); }
                .gallery-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.6), transparent);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .gallery-card:hover .gallery-overlay { opacity: 1; }
                .gallery-overlay p {
                    position: absolute;
                    bottom: 0;
                    padding: 1rem;
                    color: white;
                    font-weight: 500;
                }
                .zoom-button {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    padding: 0.5rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.2);
                    color: white;
                    cursor: pointer;
                }
                .zoom-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.8);
                    animation: fadeIn 0.3s ease;
                }
                .zoom-content {
                    position: relative;
                    max-width: 64rem;
                    max-height: 90vh;
                    border-radius: 1rem;
                    overflow: hidden;
                }
                .zoom-content img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .zoom-caption {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    right: 0;
                    padding: 1rem;
                    color: white;
                    font-size: 1.125rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
                }
                @media (max-width: 768px) {
                    .gallery-viewport { height: 400px; }
                }
                "#}
            </style>
            <h2>{"Our Atmosphere"}</h2>
            <div class="gallery-frame" onmouseenter={pause} onmouseleave={resume}>
                <button
                    class="carousel-arrow prev"
                    aria-label="Previous image"
                    onclick={on_prev}
                >
                    {"‹"}
                </button>
                <button
                    class="carousel-arrow next"
                    aria-label="Next image"
                    onclick={on_next}
                >
                    {"›"}
                </button>
                <div class="gallery-viewport" aria-live={live_region(carousel.autoplay_enabled())}>
                    <div
                        key={carousel.current_index().to_string()}
                        class={classes!("gallery-grid", carousel.direction().enter_class())}
                        style={format!("grid-template-columns: repeat({}, 1fr);", carousel.visible_count())}
                    >
                        { for carousel.visible_window().into_iter().enumerate().map(|(slot, image)| {
                            let open_zoom = {
                                let zoomed = zoomed.clone();
                                let image = image.clone();
                                Callback::from(move |_: MouseEvent| zoomed.set(Some(image.clone())))
                            };
                            html! {
                                <div key={format!("{}-{}", image.id, slot)} class="gallery-card">
                                    <img src={image.src} alt={image.alt} />
                                    <div class="gallery-overlay">
                                        <p>{image.caption}</p>
                                        <button class="zoom-button" aria-label="Zoom image" onclick={open_zoom}>
                                            {"⤢"}
                                        </button>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
                <CarouselIndicators
                    item_count={carousel.item_count()}
                    current_index={carousel.current_index()}
                    visible_count={carousel.visible_count()}
                    on_select={on_select}
                    label="Go to image"
                />
            </div>
            {
                if let Some(image) = (*zoomed).clone() {
                    html! {
                        <div class="zoom-modal" onclick={close_zoom.clone()}>
                            <div
                                class="zoom-content"
                                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                            >
                                <img src={image.src} alt={image.alt} />
                                <p class="zoom-caption">{image.caption}</p>
                                <button class="zoom-button" aria-label="Close" onclick={close_zoom}>
                                    {"✕"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}


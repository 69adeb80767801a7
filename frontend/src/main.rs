use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod carousel;
mod config;
mod content;
mod forms;
mod seo;
mod components {
    pub mod about;
    pub mod booking;
    pub mod contact;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod instagram;
    pub mod menu_highlights;
    pub mod newsletter;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod layout;
    pub mod not_found;
}

use components::footer::Footer;
use pages::{
    faq::Faq,
    home::{BookingPage, ContactPage, GalleryPage, Home},
    not_found::NotFound,
};

/// Pixels scrolled before the nav bar switches to its solid style.
const NAV_SCROLL_THRESHOLD: f64 = 10.0;

fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLL_THRESHOLD
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/booking")]
    Booking,
    #[at("/contact")]
    Contact,
    #[at("/faq")]
    Faq,
    #[at("/gallery")]
    Gallery,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Booking => {
            info!("Rendering Booking page");
            html! { <BookingPage /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Gallery => {
            info!("Rendering Gallery page");
            html! { <GalleryPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = window();
            let scroll_callback = window.clone().map(|win| {
                let scroll_win = win.clone();
                let callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scroll_win.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(nav_is_scrolled(scroll_y));
                }) as Box<dyn FnMut()>);
                if let Err(err) = win.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                    log::warn!("Could not listen for scroll: {:?}", err);
                }
                callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    padding: 1.25rem 1.5rem;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 1.5rem;
                    background: rgba(255, 251, 245, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
                    backdrop-filter: blur(8px);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: bold;
                    color: #d97706;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #374151;
                    text-decoration: none;
                    font-weight: 500;
                }
                .top-nav:not(.scrolled) .nav-link { color: white; }
                .nav-cta {
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    background: #d97706;
                    color: white;
                    text-decoration: none;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    border: none;
                    background: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #d97706;
                }
                .page-spacer { height: 5rem; }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: #fffbf5;
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                    .top-nav .nav-right .nav-link { color: #374151; }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::CAFE_NAME}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <a href="/#menu" class="nav-link">{"Menu"}</a>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <a href="/#about" class="nav-link">{"About"}</a>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Booking} classes="nav-cta">
                            {"Reserve a table"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_turns_solid_just_past_the_threshold() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(10.0));
        assert!(nav_is_scrolled(10.5));
        assert!(nav_is_scrolled(600.0));
    }
}

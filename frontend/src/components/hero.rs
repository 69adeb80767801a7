use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero-section">
            <style>
                {r#"
                .hero-section {
                    position: relative;
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 1rem 3rem;
                    background-image: linear-gradient(rgba(0, 0, 0, 0.45), rgba(0, 0, 0, 0.45)), url('/images/hero-background.jpg');
                    background-size: cover;
                    background-position: center;
                }
                .hero-content {
                    max-width: 48rem;
                    text-align: center;
                    color: white;
                }
                .hero-content h1 {
                    font-size: 3.5rem;
                    font-weight: bold;
                    margin-bottom: 1rem;
                }
                .hero-subline {
                    font-size: 1.5rem;
                    margin-bottom: 2rem;
                    color: #fde68a;
                }
                .hero-card {
                    padding: 1.5rem;
                    margin-bottom: 2rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.15);
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    backdrop-filter: blur(10px);
                    line-height: 1.7;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 0.9rem 2.25rem;
                    border-radius: 9999px;
                    background: #d97706;
                    color: white;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .hero-cta:hover {
                    background: #b45309;
                    transform: translateY(-2px);
                }
                @media (max-width: 768px) {
                    .hero-content h1 { font-size: 2.5rem; }
                    .hero-subline { font-size: 1.2rem; }
                }
                "#}
            </style>
            <div class="hero-content">
                <h1>{"Café Gamma"}</h1>
                <p class="hero-subline">{"Quality coffee, fresh food and a place to slow down"}</p>
                <div class="hero-card">
                    <p>
                        {"Every cup is brewed from beans we roast ourselves, every pastry leaves our oven the same morning. Come for breakfast, stay for the afternoon."}
                    </p>
                </div>
                <Link<Route> to={Route::Booking} classes="hero-cta">
                    {"Reserve a table"}
                </Link<Route>>
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::content::ABOUT_STATS;

const ABOUT_IMAGES: &[(&str, &str)] = &[
    ("/images/about-1.jpg", "Baristas at work behind the bar"),
    ("/images/about-2.jpg", "Freshly roasted coffee beans"),
    ("/images/about-3.jpg", "Morning light in the café"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <style>
                {r#"
                .about-section {
                    padding: 4rem 1rem;
                    background: #fffbf5;
                }
                .about-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-text h2 {
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin-bottom: 1.5rem;
                }
                .about-text p {
                    color: #4b5563;
                    line-height: 1.8;
                    margin-bottom: 1rem;
                }
                .about-images {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .about-images img {
                    width: 100%;
                    height: 220px;
                    object-fit: cover;
                    border-radius: 0.75rem;
                }
                .about-images img:first-child {
                    grid-column: span 2;
                    height: 260px;
                }
                .about-stats {
                    display: flex;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .about-stat {
                    flex: 1;
                    text-align: center;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    background: white;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.05);
                }
                .about-stat .stat-number {
                    display: block;
                    font-size: 1.75rem;
                    font-weight: bold;
                    color: #d97706;
                }
                .about-stat .stat-label {
                    font-size: 0.9rem;
                    color: #6b7280;
                }
                @media (max-width: 768px) {
                    .about-inner { grid-template-columns: 1fr; }
                    .about-stats { flex-direction: column; }
                }
                "#}
            </style>
            <div class="about-inner">
                <div class="about-text">
                    <h2>{"Our Story"}</h2>
                    <p>
                        {"Café Gamma started ten years ago as a small bar with one espresso machine and a lot of curiosity. Today it is a neighbourhood meeting point for anyone who cares about a good cup."}
                    </p>
                    <p>
                        {"We work directly with small farms, roast in small batches and bake every morning. The menu changes with the seasons and with what our suppliers bring in."}
                    </p>
                    <p>
                        {"Whether you are here for a quick espresso, a long breakfast or a quiet afternoon of work, there is a seat waiting for you."}
                    </p>
                    <div class="about-stats">
                        { for ABOUT_STATS.iter().map(|stat| html! {
                            <div class="about-stat" key={stat.label}>
                                <span>{stat.icon}</span>
                                <span class="stat-number">{stat.number}</span>
                                <span class="stat-label">{stat.label}</span>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="about-images">
                    { for ABOUT_IMAGES.iter().map(|(src, alt)| html! {
                        <img src={*src} alt={*alt} />
                    }) }
                </div>
            </div>
        </section>
    }
}

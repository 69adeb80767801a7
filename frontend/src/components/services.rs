use yew::prelude::*;

use crate::content::ServiceTab;

#[function_component(Services)]
pub fn services() -> Html {
    let active_tab = use_state(|| ServiceTab::Coffee);

    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                .services-section {
                    padding: 4rem 1rem;
                    background: #f5efe6;
                }
                .services-section h2 {
                    text-align: center;
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin-bottom: 2rem;
                }
                .service-tabs {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-bottom: 2.5rem;
                }
                .service-tab {
                    padding: 0.6rem 1.5rem;
                    border: 1px solid #d97706;
                    border-radius: 9999px;
                    background: transparent;
                    color: #92400e;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .service-tab.active {
                    background: #d97706;
                    color: white;
                }
                .service-cards {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                    animation: fadeIn 0.4s ease;
                }
                .service-card {
                    overflow: hidden;
                    border-radius: 1rem;
                    background: white;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
                }
                .service-card img {
                    width: 100%;
                    height: 200px;
                    object-fit: cover;
                }
                .service-body { padding: 1.5rem; }
                .service-body h3 {
                    font-size: 1.35rem;
                    margin-bottom: 0.5rem;
                    color: #1f2937;
                }
                .service-body p {
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .service-body a {
                    color: #d97706;
                    font-weight: 600;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .service-cards { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <h2>{"What We Offer"}</h2>
            <div class="service-tabs" role="tablist">
                { for ServiceTab::ALL.iter().map(|&tab| {
                    let onclick = {
                        let active_tab = active_tab.clone();
                        Callback::from(move |_: MouseEvent| active_tab.set(tab))
                    };
                    html! {
                        <button
                            role="tab"
                            aria-selected={(*active_tab == tab).to_string()}
                            class={classes!("service-tab", (*active_tab == tab).then(|| "active"))}
                            {onclick}
                        >
                            {tab.label()}
                        </button>
                    }
                }) }
            </div>
            <div class="service-cards" key={active_tab.label()}>
                { for active_tab.services().iter().map(|service| html! {
                    <div class="service-card" key={service.title}>
                        <img src={service.image} alt={service.title} />
                        <div class="service-body">
                            <h3>{format!("{} {}", service.icon, service.title)}</h3>
                            <p>{service.description}</p>
                            <a href={service.learn_more_url}>{"Learn more →"}</a>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

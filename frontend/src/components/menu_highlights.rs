use yew::prelude::*;

use crate::content::MENU_HIGHLIGHTS;

#[function_component(MenuHighlights)]
pub fn menu_highlights() -> Html {
    let active_item = use_state(|| None::<u32>);

    html! {
        <section id="menu" class="menu-section">
            <style>
                {r#"
                .menu-section {
                    padding: 4rem 1rem;
                    background: #fffbf5;
                }
                .menu-section h2 {
                    text-align: center;
                    font-size: 2.25rem;
                    color: #1f2937;
                    margin-bottom: 0.5rem;
                }
                .menu-subtitle {
                    text-align: center;
                    color: #6b7280;
                    margin-bottom: 2.5rem;
                }
                .menu-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .menu-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1rem;
                    background: white;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.06);
                    transition: transform 0.3s ease;
                }
                .menu-card.active { transform: translateY(-6px); }
                .menu-card img {
                    width: 100%;
                    height: 220px;
                    object-fit: cover;
                }
                .menu-category {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.9);
                    font-size: 0.8rem;
                    color: #92400e;
                }
                .menu-body { padding: 1.25rem; }
                .menu-title-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: baseline;
                    margin-bottom: 0.5rem;
                }
                .menu-title-row h3 { color: #1f2937; }
                .menu-price {
                    font-weight: bold;
                    color: #d97706;
                }
                .menu-body p {
                    color: #6b7280;
                    line-height: 1.5;
                }
                .menu-order {
                    display: block;
                    padding: 0.75rem;
                    text-align: center;
                    background: #d97706;
                    color: white;
                    font-weight: 600;
                    text-decoration: none;
                    animation: fadeIn 0.3s ease;
                }
                @media (max-width: 1024px) {
                    .menu-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 640px) {
                    .menu-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <h2>{"Menu Highlights"}</h2>
            <p class="menu-subtitle">{"A taste of what's waiting for you"}</p>
            <div class="menu-grid">
                { for MENU_HIGHLIGHTS.iter().map(|item| {
                    let is_active = *active_item == Some(item.id);
                    let onmouseenter = {
                        let active_item = active_item.clone();
                        let id = item.id;
                        Callback::from(move |_: MouseEvent| active_item.set(Some(id)))
                    };
                    let onmouseleave = {
                        let active_item = active_item.clone();
                        Callback::from(move |_: MouseEvent| active_item.set(None))
                    };
                    html! {
                        <div
                            key={item.id}
                            class={classes!("menu-card", is_active.then(|| "active"))}
                            {onmouseenter}
                            {onmouseleave}
                        >
                            <img src={item.image} alt={item.name} />
                            <span class="menu-category">{item.category}</span>
                            <div class="menu-body">
                                <div class="menu-title-row">
                                    <h3>{item.name}</h3>
                                    <span class="menu-price">{item.price}</span>
                                </div>
                                <p>{item.description}</p>
                            </div>
                            if is_active {
                                <a class="menu-order" href="#booking">{"Order now"}</a>
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}

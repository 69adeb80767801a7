use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::layout::Layout;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Layout title="Page not found | Café Gamma">
            <section class="not-found">
                <style>
                    {r#"
                    .not-found {
                        min-height: 70vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        text-align: center;
                    }
                    .not-found h1 {
                        font-size: 4rem;
                        color: #d97706;
                    }
                    "#}
                </style>
                <h1>{"404"}</h1>
                <p>{"This page wandered off for a coffee."}</p>
                <Link<Route> to={Route::Home}>{"Back to the café"}</Link<Route>>
            </section>
        </Layout>
    }
}

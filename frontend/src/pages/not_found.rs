use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    font-family: 'Raleway', sans-serif;
                    color: #4b5563;
                }
                .not-found h1 {
                    font-family: 'Press Start 2P', monospace;
                    color: #991b1b;
                }
                .not-found a {
                    color: #0284c7;
                }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"This page wandered off somewhere."}</p>
            <Link<Route> to={Route::Home}>{"Back to the portfolio"}</Link<Route>>
        </div>
    }
}

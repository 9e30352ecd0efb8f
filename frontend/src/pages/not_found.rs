use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to the portfolio"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: var(--text);
                }
                .not-found h1 { font-size: 4rem; margin: 0; color: var(--accent); }
                .not-found-link { color: var(--accent); }
                "#}
            </style>
        </div>
    }
}

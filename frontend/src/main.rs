use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod breakpoint;
mod config;
mod content;
mod dom;
mod error;
mod marquee;
mod theme;
mod components {
    pub mod back_to_top;
    pub mod click_spark;
    pub mod logo_loop;
    pub mod smooth_link;
    pub mod sticker_peel;
    pub mod theme_toggler;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod experience;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod navbar;
    pub mod not_found;
    pub mod portfolio;
    pub mod projects;
    pub mod services;
    pub mod skills;
    pub mod testimonials;
}

use components::click_spark::ClickSpark;
use content::SiteContent;
use pages::{not_found::NotFound, portfolio::Portfolio};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering portfolio");
            html! { <Portfolio /> }
        }
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteContent>> context={props.content.clone()}>
            <ClickSpark color="#FFD54F" size={12.0} radius={25.0} count={12}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ClickSpark>
        </ContextProvider<Rc<SiteContent>>>
    }
}

#[function_component]
fn Unavailable() -> Html {
    html! {
        <div class="not-found">
            <h1>{"MVP Visuals"}</h1>
            <p>{"The site could not be loaded. Please try again later."}</p>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    theme::initialize();

    match content::load() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(e) => {
            error!("Could not load site content: {}", e);
            yew::Renderer::<Unavailable>::new().render();
        }
    }
}

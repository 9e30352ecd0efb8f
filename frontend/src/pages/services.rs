use yew::prelude::*;

use crate::content::Service;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub services: Vec<Service>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="services-section">
            <div class="section-inner">
                <h2 class="section-title">{"What I "}<span class="accent">{"Offer"}</span></h2>
                <div class="services-grid">
                    { for props.services.iter().map(|service| html! {
                        <div class="service-card">
                            <div class="service-icon">{&service.icon}</div>
                            <h3>{&service.title}</h3>
                            <p>{&service.description}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .services-section { padding: 6rem 0; background: var(--card); }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    padding: 2rem;
                    border-radius: 1rem;
                    background: var(--surface);
                    border: 1px solid transparent;
                    transition: border-color 0.3s ease, transform 0.3s ease;
                }
                .service-card:hover { border-color: var(--accent); transform: translateY(-4px); }
                .service-icon { font-size: 2.5rem; margin-bottom: 1rem; }
                .service-card h3 { color: var(--text); margin-bottom: 0.5rem; }
                .service-card p { color: var(--muted); }
                "#}
            </style>
        </section>
    }
}

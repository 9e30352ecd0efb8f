use yew::prelude::*;

use crate::content::About as AboutContent;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub about: AboutContent,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let about = &props.about;
    html! {
        <section id="about" class="about-section">
            <div class="section-inner">
                <h2 class="section-title">{"About "}<span class="accent">{"Me"}</span></h2>
                <div class="about-grid">
                    <div class="about-bio">
                        <p class="about-lead">
                            {"I'm "}<strong>{&about.name}</strong>{", "}{&about.role}{" "}{&about.origin}{"."}
                        </p>
                        { for about.paragraphs.iter().map(|p| html! { <p>{p}</p> }) }
                    </div>
                    <ul class="about-highlights">
                        { for about.highlights.iter().map(|h| html! {
                            <li class="highlight-card">
                                <span class="highlight-icon">{&h.icon}</span>
                                <span>{&h.label}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <style>
                {r#"
                .about-section { padding: 6rem 0; background: var(--surface); }
                .about-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 3rem;
                    align-items: start;
                }
                .about-bio p { color: var(--muted); line-height: 1.75; margin-bottom: 1rem; }
                .about-lead { font-size: 1.25rem; color: var(--text) !important; }
                .about-highlights {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .highlight-card {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: var(--card);
                    color: var(--text);
                    transition: transform 0.3s ease;
                }
                .highlight-card:hover { transform: translateY(-4px); }
                .highlight-icon { font-size: 1.75rem; }
                "#}
            </style>
        </section>
    }
}

use yew::prelude::*;

use crate::components::smooth_link::SmoothLink;
use crate::content::{self, Experience as ExperienceContent, Milestone};

fn timeline(heading: &str, icon: &str, milestones: &[Milestone]) -> Html {
    html! {
        <div class="timeline">
            <div class="timeline-heading">
                <span class="timeline-icon">{icon}</span>
                <h3>{heading}</h3>
            </div>
            <ol class="timeline-list">
                { for milestones.iter().map(|milestone| html! {
                    <li class="timeline-entry">
                        <span class="timeline-period">{&milestone.period}</span>
                        <h4>{&milestone.title}</h4>
                        <p>{&milestone.place}</p>
                    </li>
                }) }
            </ol>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExperienceProps {
    pub experience: ExperienceContent,
}

#[function_component(Experience)]
pub fn experience(props: &ExperienceProps) -> Html {
    let experience = &props.experience;

    // Without a published file the button asks for one instead.
    let resume = match &experience.resume {
        Some(resume) => html! {
            <a class="resume-button" href={content::resolve_asset(resume)} download="">
                {"Download Resume"}
            </a>
        },
        None => html! {
            <SmoothLink to="#contact" class="resume-button">{"Request Resume"}</SmoothLink>
        },
    };

    html! {
        <section id="resume" class="experience-section">
            <div class="section-inner">
                <h2 class="section-title">{"Professional "}<span class="accent">{"Background"}</span></h2>
                <p class="section-subtitle">{"Education and experience that shaped our expertise"}</p>
                <div class="resume-action">{ resume }</div>
                <div class="timeline-grid">
                    { timeline("Education", "🎓", &experience.education) }
                    { timeline("Experience", "💼", &experience.work) }
                </div>
            </div>
            <style>
                {r#"
                .experience-section { padding: 6rem 0; background: var(--card); }
                .resume-action { display: flex; justify-content: center; margin-bottom: 3rem; }
                .resume-button {
                    padding: 0.875rem 2rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(to right, #facc15, #eab308);
                    color: #111;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.3s ease;
                }
                .resume-button:hover { transform: scale(1.05); }
                .timeline-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 3rem;
                }
                .timeline-heading { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 2rem; }
                .timeline-heading h3 { color: var(--text); font-size: 1.5rem; margin: 0; }
                .timeline-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(135deg, #facc15, #eab308);
                }
                .timeline-list { list-style: none; margin: 0; padding: 0; }
                .timeline-entry {
                    position: relative;
                    padding: 0 0 1.5rem 2rem;
                    border-left: 2px solid var(--border);
                }
                .timeline-entry:last-child { border-left-color: transparent; padding-bottom: 0; }
                .timeline-entry::before {
                    content: "";
                    position: absolute;
                    left: -9px;
                    top: 0;
                    width: 1rem;
                    height: 1rem;
                    border-radius: 50%;
                    background: var(--accent);
                }
                .timeline-period { font-size: 0.875rem; font-weight: 600; color: var(--accent); }
                .timeline-entry h4 { margin: 0.25rem 0; color: var(--text); font-size: 1.125rem; }
                .timeline-entry p { margin: 0; color: var(--muted); }
                "#}
            </style>
        </section>
    }
}

use yew::prelude::*;

use crate::content::{self, Project};

/// Clicking the open card closes it; any other card takes over.
pub fn toggle_selection(current: Option<usize>, clicked: usize) -> Option<usize> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: Vec<Project>,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let selected = use_state_eq(|| None::<usize>);

    html! {
        <section id="projects" class="projects-section">
            <div class="section-inner">
                <h2 class="section-title">{"Featured "}<span class="accent">{"Projects"}</span></h2>
                <div class="projects-grid">
                    { for props.projects.iter().enumerate().map(|(index, project)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| {
                                selected.set(toggle_selection(*selected, index));
                            })
                        };
                        let is_open = *selected == Some(index);
                        html! {
                            <div class={classes!("project-card", is_open.then_some("selected"))} {onclick}>
                                <div class="project-image">
                                    <img src={content::resolve_asset(&project.image)} alt={project.title.clone()} loading="lazy" />
                                    <span class="project-category">{&project.category}</span>
                                </div>
                                <div class="project-body">
                                    <h3>{&project.title}</h3>
                                    <p class={classes!("project-description", is_open.then_some("expanded"))}>
                                        {&project.description}
                                    </p>
                                    <div class="project-tools">
                                        { for project.tools.iter().map(|tool| html! {
                                            <span class="tool-tag">{tool}</span>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .projects-section { padding: 6rem 0; background: var(--card); }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .project-card {
                    border-radius: 1rem;
                    overflow: hidden;
                    background: var(--surface);
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .project-card:hover, .project-card.selected {
                    transform: translateY(-6px);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.2);
                }
                .project-card.selected { outline: 2px solid var(--accent); }
                .project-image { position: relative; height: 12rem; overflow: hidden; }
                .project-image img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s ease; }
                .project-card:hover .project-image img { transform: scale(1.1); }
                .project-category {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: var(--accent);
                    color: #111;
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .project-body { padding: 1.5rem; }
                .project-body h3 { color: var(--text); margin-bottom: 0.5rem; }
                .project-description {
                    color: var(--muted);
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }
                .project-description.expanded { -webkit-line-clamp: unset; }
                .project-tools { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; }
                .tool-tag {
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    background: rgba(250, 204, 21, 0.15);
                    color: var(--text);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_twice_closes() {
        assert_eq!(toggle_selection(None, 2), Some(2));
        assert_eq!(toggle_selection(Some(2), 2), None);
        assert_eq!(toggle_selection(Some(2), 4), Some(4));
    }
}

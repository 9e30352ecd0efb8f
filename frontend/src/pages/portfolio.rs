use std::rc::Rc;

use log::warn;
use yew::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::smooth_link::use_initial_hash_scroll;
use crate::content::SiteContent;
use crate::pages::{
    about::About, contact::Contact, experience::Experience, footer::Footer, gallery::Gallery,
    hero::Hero, navbar::Navbar, projects::Projects, services::Services, skills::Skills, testimonials::Testimonials,
};

/// The whole site: one scrolling page of sections.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    use_initial_hash_scroll();
    let content = use_context::<Rc<SiteContent>>();
    let Some(content) = content else {
        warn!("Portfolio rendered without site content");
        return html! {};
    };

    html! {
        <div class="portfolio">
            <Navbar />
            <Hero hero={content.hero.clone()} stickers={content.stickers.clone()} />
            <About about={content.about.clone()} />
            <Services services={content.services.clone()} />
            <Skills skills={content.skills.clone()} />
            <Projects projects={content.projects.clone()} />
            <Gallery artworks={content.gallery.clone()} />
            <Experience experience={content.experience.clone()} />
            <Testimonials testimonials={content.testimonials.clone()} />
            <Contact socials={content.socials.clone()} />
            <Footer />
            <BackToTop />
            <style>
                {r#"
                :root.dark {
                    --surface: #0f0f0f;
                    --card: #1f2937;
                    --text: #ffffff;
                    --muted: #9ca3af;
                    --border: #374151;
                    --accent: #facc15;
                }
                :root.light {
                    --surface: #ffffff;
                    --card: #f3f4f6;
                    --text: #111827;
                    --muted: #4b5563;
                    --border: #e5e7eb;
                    --accent: #eab308;
                }
                :root.yellow {
                    --surface: #fff8e1;
                    --card: #fde68a;
                    --text: #1c1917;
                    --muted: #57534e;
                    --border: #f59e0b;
                    --accent: #b45309;
                }
                body {
                    margin: 0;
                    background: var(--surface);
                    color: var(--text);
                    font-family: 'Inter', system-ui, sans-serif;
                    transition: background 0.3s ease, color 0.3s ease;
                }
                html { scroll-behavior: smooth; }
                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 2rem;
                }
                .section-title {
                    text-align: center;
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: var(--text);
                    margin-bottom: 1rem;
                }
                .section-subtitle {
                    text-align: center;
                    color: var(--muted);
                    margin-bottom: 4rem;
                }
                .accent { color: var(--accent); }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                    white-space: nowrap;
                }
                .back-to-top {
                    position: fixed;
                    right: 2.25rem;
                    bottom: 8.75rem;
                    z-index: 40;
                    width: 3.5rem;
                    height: 3.5rem;
                    border: none;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--accent);
                    color: #111;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .back-to-top:hover { transform: scale(1.1); }
                "#}
            </style>
        </div>
    }
}

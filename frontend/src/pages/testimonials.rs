use yew::prelude::*;

use crate::components::logo_loop::{LogoItem, LogoLoop};
use crate::content::{self, Testimonial};
use crate::theme::use_theme;

const CAROUSEL_SPEED: f64 = 40.0;

fn card(testimonial: &Testimonial) -> LogoItem {
    let node = html! {
        <figure class="testimonial-card">
            <span class="testimonial-mark">{"\u{201C}"}</span>
            <blockquote>{&testimonial.quote}</blockquote>
            <figcaption>
                <img src={content::resolve_asset(&testimonial.image)} alt={testimonial.author.clone()} />
                <div>
                    <p class="testimonial-author">{&testimonial.author}</p>
                    <p class="testimonial-role">{&testimonial.role}</p>
                </div>
            </figcaption>
        </figure>
    };
    LogoItem::Node {
        node,
        href: None,
        title: None,
        aria_label: Some(format!("Testimonial from {}", testimonial.author)),
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let theme = use_theme();
    let items: Vec<LogoItem> = props.testimonials.iter().map(card).collect();

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="section-inner">
                <h2 class="section-title">{"Client "}<span class="accent">{"Testimonials"}</span></h2>
                <p class="section-subtitle">{"What clients say about working with me"}</p>
            </div>
            <LogoLoop
                {items}
                speed={CAROUSEL_SPEED}
                gap={32}
                fade_out=true
                fade_out_color={theme.card_color().to_string()}
                aria_label="Client testimonials"
            />
            <style>
                {r#"
                .testimonials-section { padding: 6rem 0; background: var(--card); overflow: hidden; }
                .testimonial-card {
                    width: 22rem;
                    min-height: 16rem;
                    margin: 0;
                    padding: 2rem;
                    box-sizing: border-box;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    white-space: normal;
                    border-radius: 0.75rem;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    transition: border-color 0.3s ease;
                }
                .testimonial-card:hover { border-color: var(--accent); }
                .testimonial-mark { font-size: 2.5rem; line-height: 1; color: var(--accent); }
                .testimonial-card blockquote { margin: 0.5rem 0 1.5rem; color: var(--muted); line-height: 1.6; }
                .testimonial-card figcaption { display: flex; align-items: center; gap: 1rem; }
                .testimonial-card img { width: 3rem; height: 3rem; border-radius: 50%; object-fit: cover; }
                .testimonial-author { font-weight: 600; color: var(--text); margin: 0; }
                .testimonial-role { font-size: 0.875rem; color: var(--muted); margin: 0; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_labelled_by_author() {
        let testimonial = Testimonial {
            quote: "Great work".into(),
            author: "Sarah Johnson".into(),
            role: "CEO".into(),
            image: "people/sarah.jpg".into(),
        };
        let item = card(&testimonial);
        assert_eq!(item.aria_label(), Some("Testimonial from Sarah Johnson"));
        assert_eq!(item.href(), None);
    }
}

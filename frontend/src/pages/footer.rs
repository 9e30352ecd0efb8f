use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::smooth_link::SmoothLink;
use crate::config;

const QUICK_LINKS: [(&str, &str); 5] = [
    ("Home", "#hero"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Projects", "#projects"),
    ("Contact", "#contact"),
];

pub fn copyright(year: i32) -> String {
    format!("\u{00A9} {} MVP Visuals. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    html! {
        <footer class="site-footer">
            <div class="section-inner footer-grid">
                <div>
                    <div class="footer-brand">
                        <span class="footer-mark"></span>
                        <span>{"MVP Visuals"}</span>
                    </div>
                    <p class="footer-muted">{"Where Design, Art, and Technology Connect"}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for QUICK_LINKS.iter().map(|(name, href)| html! {
                            <li><SmoothLink to={*href} class="footer-link">{*name}</SmoothLink></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <p class="footer-muted">{format!("Email: {}", config::CONTACT_EMAIL)}</p>
                </div>
            </div>
            <div class="section-inner footer-bottom">
                <p class="footer-muted">{copyright(year)}</p>
            </div>
            <style>
                {r#"
                .site-footer { padding: 3rem 0; background: var(--surface); border-top: 1px solid var(--border); }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .footer-brand { display: flex; align-items: center; gap: 0.5rem; font-size: 1.25rem; font-weight: 700; color: var(--text); margin-bottom: 1rem; }
                .footer-mark { width: 2.5rem; height: 2.5rem; border-radius: 0.5rem; background: linear-gradient(135deg, #facc15, #eab308); }
                .site-footer h4 { color: var(--text); margin-bottom: 1rem; }
                .site-footer ul { list-style: none; padding: 0; display: flex; flex-direction: column; gap: 0.5rem; }
                .footer-link { color: var(--muted); text-decoration: none; font-size: 0.875rem; }
                .footer-link:hover { color: var(--accent); }
                .footer-muted { color: var(--muted); font-size: 0.875rem; }
                .footer-bottom { padding-top: 2rem; border-top: 1px solid var(--border); text-align: center; }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "\u{00A9} 2026 MVP Visuals. All rights reserved.");
    }
}

use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::components::smooth_link::SmoothLink;
use crate::components::theme_toggler::ThemeTogglerGroup;
use crate::config;
use crate::theme::use_theme;

const SCROLLED_AFTER_PX: f64 = 50.0;

pub const NAV_LINKS: [(&str, &str); 7] = [
    ("Home", "#hero"),
    ("About", "#about"),
    ("Services", "#services"),
    ("Projects", "#projects"),
    ("Skills", "#skills"),
    ("Gallery", "#art"),
    ("Contact", "#contact"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let theme = use_theme();
    let (_, scroll_y) = use_window_scroll();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let logo = if theme.is_dark() {
        config::asset_url("logo-plain-white.svg")
    } else {
        config::asset_url("logo-plain-black.svg")
    };
    let (left, right) = NAV_LINKS.split_at(4);
    let render_links = |links: &[(&'static str, &'static str)]| -> Html {
        links
            .iter()
            .map(|(name, href)| {
                html! {
                    <SmoothLink to={*href} class="nav-link" onclick={close_menu.clone()}>
                        {*name}
                        <span class="nav-underline"></span>
                    </SmoothLink>
                }
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", (scroll_y > SCROLLED_AFTER_PX).then_some("scrolled"))}>
            <div class="nav-content">
                <div class="nav-side nav-left">
                    { render_links(left) }
                </div>
                <div class="nav-logo">
                    <img src={logo} alt="MVP Visuals" />
                </div>
                <div class="nav-side nav-right">
                    { render_links(right) }
                    <ThemeTogglerGroup />
                </div>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { render_links(&NAV_LINKS) }
                    <ThemeTogglerGroup class="mobile-theme" />
                </div>
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    transition: all 0.5s ease;
                }
                .top-nav.scrolled {
                    backdrop-filter: blur(16px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .nav-content {
                    position: relative;
                    max-width: 1440px;
                    margin: 1rem auto 0;
                    padding: 1.5rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-side {
                    display: flex;
                    align-items: center;
                    gap: 4rem;
                }
                .nav-link {
                    position: relative;
                    font-weight: 500;
                    color: var(--text);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }
                .nav-link:hover { color: var(--accent); }
                .nav-underline {
                    position: absolute;
                    left: 0;
                    bottom: -2px;
                    width: 0;
                    height: 2px;
                    background: var(--accent);
                    transition: width 0.3s ease;
                }
                .nav-link:hover .nav-underline { width: 100%; }
                .nav-logo {
                    position: absolute;
                    left: 50%;
                    transform: translateX(-50%);
                }
                .nav-logo img { height: 3.25rem; }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    margin-left: auto;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--text);
                }
                .mobile-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    padding: 0.75rem 1rem 1rem;
                    background: var(--surface);
                    border-radius: 0 0 1rem 1rem;
                }
                @media (max-width: 767px) {
                    .nav-side { display: none; }
                    .burger-menu { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::breakpoint::{use_breakpoint, Breakpoint};
use crate::components::smooth_link::SmoothLink;
use crate::components::sticker_peel::StickerPeel;
use crate::content::{self, Hero as HeroContent, Sticker};
use crate::dom;

const GLOW_TRAVEL_PX: f64 = 10.0;

/// Maps a pointer coordinate onto `[-10, 10]` px of glow drift.
pub fn parallax_offset(client: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    (client / extent) * 2.0 * GLOW_TRAVEL_PX - GLOW_TRAVEL_PX
}

/// Where each sticker starts inside the hero card, and how wide it is.
/// Phones get no stickers.
pub fn sticker_layout(breakpoint: Breakpoint) -> Option<(f64, &'static [(f64, f64)])> {
    const MD: &[(f64, f64)] = &[(24.0, 140.0), (40.0, 420.0), (560.0, 260.0)];
    const LG: &[(f64, f64)] = &[(60.0, 160.0), (90.0, 460.0), (780.0, 300.0)];
    const XL: &[(f64, f64)] = &[(90.0, 150.0), (120.0, 470.0), (1000.0, 280.0)];
    const XXL: &[(f64, f64)] = &[(140.0, 170.0), (160.0, 500.0), (1240.0, 300.0)];
    match breakpoint {
        Breakpoint::Sm => None,
        Breakpoint::Md => Some((90.0, MD)),
        Breakpoint::Lg => Some((110.0, LG)),
        Breakpoint::Xl => Some((130.0, XL)),
        Breakpoint::Xxl => Some((150.0, XXL)),
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: HeroContent,
    pub stickers: Vec<Sticker>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let breakpoint = use_breakpoint();
    let smiling = use_state_eq(|| false);
    let glow = use_state_eq(|| (0.0, 0.0));
    let holding_sticker = use_state_eq(|| false);

    {
        let glow = glow.clone();
        let holding = *holding_sticker;
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window()
                    .filter(|_| !holding)
                    .map(|window| {
                        EventListener::new(&window, "mousemove", move |event| {
                            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                                return;
                            };
                            let (width, height) = dom::viewport_size();
                            glow.set((
                                parallax_offset(f64::from(event.client_x()), width),
                                parallax_offset(f64::from(event.client_y()), height),
                            ));
                        })
                    });
                move || drop(listener)
            },
            holding,
        );
    }

    let smile = {
        let smiling = smiling.clone();
        Callback::from(move |_: MouseEvent| smiling.set(true))
    };
    let relax = {
        let smiling = smiling.clone();
        Callback::from(move |_: MouseEvent| smiling.set(false))
    };
    let on_sticker = {
        let holding_sticker = holding_sticker.clone();
        Callback::from(move |active: bool| holding_sticker.set(active))
    };

    let stickers = match sticker_layout(breakpoint) {
        Some((width, spots)) => props
            .stickers
            .iter()
            .zip(spots.iter())
            .enumerate()
            .map(|(index, (sticker, spot))| {
                html! {
                    <StickerPeel
                        image={content::resolve_asset(&sticker.image)}
                        width={width}
                        rotate={if index % 2 == 0 { -12.0 } else { 14.0 }}
                        initial_position={Some(*spot)}
                        index={index as u32}
                        on_interaction_change={on_sticker.clone()}
                        tooltip_title={Some(AttrValue::from(sticker.title.clone()))}
                        tooltip_description={Some(AttrValue::from(sticker.description.clone()))}
                    />
                }
            })
            .collect::<Html>(),
        None => html! {},
    };

    let (glow_x, glow_y) = *glow;
    let hero = &props.hero;

    html! {
        <section id="hero" class="hero-section">
            <div class="hero-card">
                <div class="hero-notch"></div>
                <div
                    class="hero-glow"
                    style={format!("transform: translate({}px, {}px);", glow_x, glow_y)}
                ></div>
                { stickers }
                <div class="hero-content">
                    <h1>
                        {&hero.headline}
                        <span class="hero-highlight">{" "}{&hero.highlight}</span>
                    </h1>
                    <p class="hero-tagline">{&hero.tagline}</p>
                    <div class="hero-actions" onmouseenter={smile} onmouseleave={relax}>
                        <SmoothLink to="#projects" class="hero-primary">{"View Projects"}</SmoothLink>
                        <SmoothLink to="#contact" class="hero-secondary">{"Let's Connect"}</SmoothLink>
                    </div>
                    <div class="hero-portrait">
                        <img
                            src={content::resolve_asset(&hero.portrait_focused)}
                            alt="Focused portrait"
                            class={classes!((*smiling).then_some("hidden"))}
                        />
                        <img
                            src={content::resolve_asset(&hero.portrait_smiling)}
                            alt="Smiling portrait"
                            class={classes!("overlay", (!*smiling).then_some("hidden"))}
                        />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--surface);
                }
                .hero-card {
                    position: relative;
                    width: 98vw;
                    height: 97vh;
                    border-radius: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: var(--card);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .hero-notch {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 17.5rem;
                    height: 6.25rem;
                    background: var(--surface);
                    clip-path: polygon(0 0, 100% 0, 85% 100%, 15% 100%);
                }
                .hero-glow {
                    position: absolute;
                    width: 25rem;
                    height: 25rem;
                    border-radius: 50%;
                    background: rgba(250, 204, 21, 0.2);
                    filter: blur(64px);
                    transition: transform 0.3s ease-out;
                    animation: hero-pulse 2s ease-in-out infinite;
                }
                @keyframes hero-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .hero-content h1 {
                    font-size: clamp(2.25rem, 4vw, 3rem);
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    color: var(--text);
                }
                .hero-highlight {
                    background: linear-gradient(to right, #fde047, #eab308);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-tagline {
                    max-width: 48rem;
                    margin: 0 auto;
                    font-size: 1.25rem;
                    color: var(--muted);
                }
                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }
                .hero-primary, .hero-secondary {
                    padding: 0.5rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: transform 0.3s ease, background 0.3s ease;
                }
                .hero-primary { background: #facc15; color: #111; }
                .hero-primary:hover { transform: scale(1.05); background: #eab308; }
                .hero-secondary { border: 2px solid #eab308; color: #ca8a04; }
                .hero-secondary:hover { background: rgba(250, 204, 21, 0.1); }
                .hero-portrait {
                    position: relative;
                    display: flex;
                    justify-content: center;
                    align-items: flex-end;
                }
                .hero-portrait img {
                    width: min(550px, 90vw);
                    transition: opacity 0.5s ease;
                }
                .hero-portrait img.overlay { position: absolute; }
                .hero-portrait img.hidden { opacity: 0; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_drifts_ten_pixels_each_way() {
        assert_eq!(parallax_offset(0.0, 1000.0), -10.0);
        assert_eq!(parallax_offset(500.0, 1000.0), 0.0);
        assert_eq!(parallax_offset(1000.0, 1000.0), 10.0);
        assert_eq!(parallax_offset(300.0, 0.0), 0.0);
    }

    #[test]
    fn phones_get_no_stickers() {
        assert!(sticker_layout(Breakpoint::Sm).is_none());
        for bp in [Breakpoint::Md, Breakpoint::Lg, Breakpoint::Xl, Breakpoint::Xxl] {
            let (width, spots) = sticker_layout(bp).unwrap();
            assert!(width > 0.0);
            assert_eq!(spots.len(), 3);
        }
    }
}

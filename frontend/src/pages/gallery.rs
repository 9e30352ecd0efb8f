use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::content::{self, Artwork};

/// Index reached by moving `delta` places from `index`, wrapping at both ends.
pub fn step(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(len as isize) as usize
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub artworks: Vec<Artwork>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let open = use_state_eq(|| None::<usize>);
    let len = props.artworks.len();

    // Arrow keys browse and Escape closes while the lightbox is showing.
    {
        let open = open.clone();
        let current = *open;
        use_effect_with_deps(
            move |current| {
                let listener = current.and_then(|index| {
                    let window = web_sys::window()?;
                    Some(EventListener::new(&window, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        match event.key().as_str() {
                            "Escape" => open.set(None),
                            "ArrowRight" => open.set(Some(step(index, len, 1))),
                            "ArrowLeft" => open.set(Some(step(index, len, -1))),
                            _ => {}
                        }
                    }))
                });
                move || drop(listener)
            },
            current,
        );
    }

    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(None))
    };
    let browse = |delta: isize| {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if let Some(index) = *open {
                open.set(Some(step(index, len, delta)));
            }
        })
    };

    let lightbox = match (*open).and_then(|index| props.artworks.get(index)) {
        Some(artwork) => html! {
            <div class="lightbox" role="dialog" aria-label={artwork.title.clone()} onclick={close.clone()}>
                <button class="lightbox-nav prev" aria-label="Previous artwork" onclick={browse(-1)}>{"‹"}</button>
                <figure onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <img src={content::resolve_asset(&artwork.image)} alt={artwork.title.clone()} />
                    <figcaption>{&artwork.title}</figcaption>
                </figure>
                <button class="lightbox-nav next" aria-label="Next artwork" onclick={browse(1)}>{"›"}</button>
                <button class="lightbox-close" aria-label="Close" onclick={close}>{"×"}</button>
            </div>
        },
        None => html! {},
    };

    html! {
        <section id="art" class="gallery-section">
            <div class="section-inner">
                <h2 class="section-title">{"Arts & "}<span class="accent">{"Graphics Gallery"}</span></h2>
                <p class="section-subtitle">
                    {"A curated collection of digital art, graphic design projects and visual experiments."}
                </p>
                <div class="gallery-grid">
                    { for props.artworks.iter().enumerate().map(|(index, artwork)| {
                        let onclick = {
                            let open = open.clone();
                            Callback::from(move |_: MouseEvent| open.set(Some(index)))
                        };
                        html! {
                            <button class="gallery-tile" {onclick} aria-label={format!("Open {}", artwork.title)}>
                                <img src={content::resolve_asset(&artwork.image)} alt={artwork.title.clone()} loading="lazy" />
                                <span class="gallery-caption">{&artwork.title}</span>
                            </button>
                        }
                    }) }
                </div>
            </div>
            { lightbox }
            <style>
                {r#"
                .gallery-section { padding: 6rem 0; background: var(--surface); }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                    gap: 1rem;
                }
                .gallery-tile {
                    position: relative;
                    aspect-ratio: 4 / 3;
                    padding: 0;
                    border: none;
                    border-radius: 1rem;
                    overflow: hidden;
                    cursor: zoom-in;
                    background: var(--card);
                }
                .gallery-tile img { width: 100%; height: 100%; object-fit: cover; transition: transform 0.5s ease; }
                .gallery-tile:hover img { transform: scale(1.08); }
                .gallery-caption {
                    position: absolute;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    padding: 0.75rem 1rem;
                    text-align: left;
                    color: #fff;
                    font-weight: 600;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }
                .gallery-tile:hover .gallery-caption { opacity: 1; }
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 200;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.85);
                }
                .lightbox figure { margin: 0; max-width: 90vw; text-align: center; }
                .lightbox img { max-width: 90vw; max-height: 80vh; border-radius: 0.75rem; }
                .lightbox figcaption { margin-top: 0.75rem; color: #fff; }
                .lightbox-nav, .lightbox-close {
                    position: absolute;
                    border: none;
                    background: transparent;
                    color: #fff;
                    font-size: 2.5rem;
                    cursor: pointer;
                }
                .lightbox-nav.prev { left: 1.5rem; }
                .lightbox-nav.next { right: 1.5rem; }
                .lightbox-close { top: 1rem; right: 1.5rem; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browsing_wraps_around() {
        assert_eq!(step(0, 8, -1), 7);
        assert_eq!(step(7, 8, 1), 0);
        assert_eq!(step(3, 8, 1), 4);
        assert_eq!(step(0, 0, 1), 0);
    }
}

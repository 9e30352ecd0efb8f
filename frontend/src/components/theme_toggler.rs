use log::warn;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::Element;
use yew::prelude::*;

use crate::dom;
use crate::error::SiteError;
use crate::theme::{self, switch_theme, use_theme, Theme};

/// Circle that grows out of the clicked toggler until it covers the
/// farthest viewport corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wipe {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Wipe {
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64, viewport: (f64, f64)) -> Self {
        let (vw, vh) = viewport;
        Self {
            x: left + width / 2.0,
            y: top + height / 2.0,
            radius: (left.max(vw - left)).hypot(top.max(vh - top)),
        }
    }

    pub fn clip_path_frames(&self) -> [String; 2] {
        [
            format!("circle(0px at {}px {}px)", self.x, self.y),
            format!("circle({}px at {}px {}px)", self.radius, self.x, self.y),
        ]
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WipeKeyframes {
    clip_path: [String; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WipeTiming {
    duration: u32,
    easing: &'static str,
    pseudo_element: &'static str,
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Switches to `theme` inside a view transition and plays the circular
/// reveal from `button`. Browsers without view transitions switch instantly.
async fn wipe_to(theme: Theme, duration: u32, button: Element) -> Result<(), SiteError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteError::Dom("document is not available".to_string()))?;
    let Some(start) = method(&document, "startViewTransition") else {
        switch_theme(theme);
        return Ok(());
    };

    let update = Closure::once_into_js(move || switch_theme(theme));
    let transition = start.call1(&document, &update)?;
    let ready: Promise = Reflect::get(&transition, &JsValue::from_str("ready"))?.dyn_into()?;
    JsFuture::from(ready).await?;

    let rect = button.get_bounding_client_rect();
    let wipe = Wipe::from_rect(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
        dom::viewport_size(),
    );
    let keyframes = serde_wasm_bindgen::to_value(&WipeKeyframes {
        clip_path: wipe.clip_path_frames(),
    })
    .map_err(JsValue::from)?;
    let timing = serde_wasm_bindgen::to_value(&WipeTiming {
        duration,
        easing: "ease-in-out",
        pseudo_element: "::view-transition-new(root)",
    })
    .map_err(JsValue::from)?;

    let root = document
        .document_element()
        .ok_or_else(|| SiteError::Dom("document has no root element".to_string()))?;
    let animate = method(&root, "animate")
        .ok_or_else(|| SiteError::Dom("element.animate is not supported".to_string()))?;
    animate.call2(&root, &keyframes, &timing)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ThemeTogglerProps {
    pub theme: Theme,
    #[prop_or(1000)]
    pub duration: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggler)]
pub fn theme_toggler(props: &ThemeTogglerProps) -> Html {
    let current = use_theme();
    let button_ref = use_node_ref();
    let target = props.theme;

    let onclick = {
        let button_ref = button_ref.clone();
        let duration = props.duration;
        Callback::from(move |_: MouseEvent| {
            let Some(button) = button_ref.cast::<Element>() else {
                return;
            };
            if theme::store().get() == target {
                return;
            }
            spawn_local(async move {
                if let Err(e) = wipe_to(target, duration, button).await {
                    warn!("Theme wipe failed, switching directly: {}", e);
                    switch_theme(target);
                }
            });
        })
    };

    let label = match target {
        Theme::Light => "Light theme",
        Theme::Dark => "Dark theme",
        Theme::Yellow => "Yellow theme",
    };

    html! {
        <button
            ref={button_ref}
            {onclick}
            class={classes!(
                "theme-toggler",
                format!("theme-toggler-{}", target.class_name()),
                (current == target).then_some("active"),
                props.class.clone(),
            )}
            aria-label={format!("Switch to {} theme", target.class_name())}
            aria-pressed={(current == target).to_string()}
        >
            <span class="sr-only">{ label }</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeTogglerGroupProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeTogglerGroup)]
pub fn theme_toggler_group(props: &ThemeTogglerGroupProps) -> Html {
    html! {
        <div class={classes!("theme-toggler-group", props.class.clone())}>
            { for Theme::ALL.iter().map(|theme| html! { <ThemeToggler theme={*theme} /> }) }
            <style>
                {r#"
                .theme-toggler-group {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .theme-toggler {
                    width: 1.75rem;
                    height: 1.75rem;
                    border-radius: 50%;
                    border: 2px solid var(--border);
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .theme-toggler:hover { transform: scale(1.1); }
                .theme-toggler-light { background: #ffffff; border-color: #d1d5db; }
                .theme-toggler-dark { background: #000000; border-color: #1f2937; }
                .theme-toggler-yellow { background: #facc15; border-color: #eab308; }
                .theme-toggler.active {
                    box-shadow: 0 0 0 2px var(--surface), 0 0 0 4px var(--accent);
                }
                ::view-transition-old(root),
                ::view-transition-new(root) {
                    animation: none;
                    mix-blend-mode: normal;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_covers_farthest_corner() {
        let wipe = Wipe::from_rect(100.0, 50.0, 40.0, 40.0, (1000.0, 800.0));
        assert_eq!((wipe.x, wipe.y), (120.0, 70.0));
        assert!((wipe.radius - 900.0_f64.hypot(750.0)).abs() < 1e-9);
    }

    #[test]
    fn wipe_from_bottom_right() {
        let wipe = Wipe::from_rect(950.0, 750.0, 40.0, 40.0, (1000.0, 800.0));
        assert!((wipe.radius - 950.0_f64.hypot(750.0)).abs() < 1e-9);
    }

    #[test]
    fn clip_path_frames_grow_from_zero() {
        let wipe = Wipe {
            x: 10.0,
            y: 20.0,
            radius: 300.0,
        };
        assert_eq!(
            wipe.clip_path_frames(),
            [
                "circle(0px at 10px 20px)".to_string(),
                "circle(300px at 10px 20px)".to_string(),
            ]
        );
    }
}

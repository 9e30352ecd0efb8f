use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::{HtmlElement, PointerEvent};
use yew::prelude::*;

use crate::dom;

const SETTLE_MS: u32 = 800;
const TOOLTIP_DELAY_MS: u32 = 500;
const PADDING: f64 = 12.0;

/// Keeps a `size` box inside `bounds`, both anchored at the top-left corner.
pub fn clamp_position(position: (f64, f64), bounds: (f64, f64), size: (f64, f64)) -> (f64, f64) {
    let max_x = (bounds.0 - size.0).max(0.0);
    let max_y = (bounds.1 - size.1).max(0.0);
    (position.0.clamp(0.0, max_x), position.1.clamp(0.0, max_y))
}

pub fn centered(bounds: (f64, f64), size: (f64, f64)) -> (f64, f64) {
    clamp_position(((bounds.0 - size.0) / 2.0, (bounds.1 - size.1) / 2.0), bounds, size)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickerDrag {
    pointer_origin: (f64, f64),
    position_origin: (f64, f64),
}

impl StickerDrag {
    pub fn start(pointer: (f64, f64), position: (f64, f64)) -> Self {
        Self {
            pointer_origin: pointer,
            position_origin: position,
        }
    }

    pub fn position_at(&self, pointer: (f64, f64)) -> (f64, f64) {
        (
            self.position_origin.0 + pointer.0 - self.pointer_origin.0,
            self.position_origin.1 + pointer.1 - self.pointer_origin.1,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lift {
    Resting,
    Lifted,
}

impl Lift {
    pub fn scale(self) -> f64 {
        match self {
            Lift::Resting => 1.0,
            Lift::Lifted => 1.1,
        }
    }

    pub fn z_index(self) -> &'static str {
        match self {
            Lift::Resting => "101",
            Lift::Lifted => "102",
        }
    }

    fn transition(self) -> &'static str {
        match self {
            Lift::Resting => "transform 0.8s cubic-bezier(0.33, 1, 0.68, 1)",
            Lift::Lifted => "none",
        }
    }
}

struct StickerState {
    position: Option<(f64, f64)>,
    drag: Option<StickerDrag>,
    lift: Lift,
}

fn bounds_and_size(target: &HtmlElement) -> Option<((f64, f64), (f64, f64))> {
    let parent = target.parent_element()?;
    let bounds = (f64::from(parent.client_width()), f64::from(parent.client_height()));
    let size = (f64::from(target.offset_width()), f64::from(target.offset_height()));
    Some((bounds, size))
}

fn paint(target: &HtmlElement, position: (f64, f64), lift: Lift) {
    let style = target.style();
    let transform = format!(
        "translate3d({}px, {}px, 0) scale({})",
        position.0,
        position.1,
        lift.scale()
    );
    dom::set_style(&style, "transform", &transform);
    dom::set_style(&style, "z-index", lift.z_index());
    dom::set_style(&style, "transition", lift.transition());
}

/// Re-fits the sticker into its parent, falling back to the center when it
/// has never been placed.
fn reclamp(target_ref: &NodeRef, state: &Rc<RefCell<StickerState>>) {
    let Some(target) = target_ref.cast::<HtmlElement>() else {
        return;
    };
    let Some((bounds, size)) = bounds_and_size(&target) else {
        return;
    };
    let mut state = state.borrow_mut();
    let position = match state.position {
        Some(position) => clamp_position(position, bounds, size),
        None => centered(bounds, size),
    };
    state.position = Some(position);
    paint(&target, position, state.lift);
}

#[derive(Properties, PartialEq)]
pub struct StickerPeelProps {
    pub image: AttrValue,
    #[prop_or(30.0)]
    pub rotate: f64,
    #[prop_or(30.0)]
    pub peel_back_hover_pct: f64,
    #[prop_or(40.0)]
    pub peel_back_active_pct: f64,
    #[prop_or(200.0)]
    pub width: f64,
    #[prop_or(0.6)]
    pub shadow_intensity: f64,
    #[prop_or(0.0)]
    pub peel_direction: f64,
    /// Top-left offset inside the parent; `None` centers the sticker.
    #[prop_or_default]
    pub initial_position: Option<(f64, f64)>,
    #[prop_or_default]
    pub index: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_interaction_change: Callback<bool>,
    #[prop_or_default]
    pub tooltip_title: Option<AttrValue>,
    #[prop_or_default]
    pub tooltip_description: Option<AttrValue>,
}

#[function_component(StickerPeel)]
pub fn sticker_peel(props: &StickerPeelProps) -> Html {
    let target_ref = use_node_ref();
    let state = use_mut_ref(|| StickerState {
        position: None,
        drag: None,
        lift: Lift::Resting,
    });
    let settle_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let tooltip_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let show_tooltip = use_state_eq(|| false);

    {
        let target_ref = target_ref.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |initial: &Option<(f64, f64)>| {
                state.borrow_mut().position = *initial;
                reclamp(&target_ref, &state);
                || ()
            },
            props.initial_position,
        );
    }

    {
        let target_ref = target_ref.clone();
        let state = state.clone();
        let settle_timer = settle_timer.clone();
        let tooltip_timer = tooltip_timer.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = web_sys::window().map(|window| {
                    ["resize", "orientationchange"].map(|event| {
                        let target_ref = target_ref.clone();
                        let state = state.clone();
                        EventListener::new(&window, event, move |_| reclamp(&target_ref, &state))
                    })
                });
                move || {
                    drop(listeners);
                    settle_timer.borrow_mut().take();
                    tooltip_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onpointerdown = {
        let target_ref = target_ref.clone();
        let state = state.clone();
        let settle_timer = settle_timer.clone();
        let on_change = props.on_interaction_change.clone();
        Callback::from(move |e: PointerEvent| {
            if e.button() != 0 {
                return;
            }
            let Some(target) = target_ref.cast::<HtmlElement>() else {
                return;
            };
            e.prevent_default();
            settle_timer.borrow_mut().take();
            let mut s = state.borrow_mut();
            let position = s.position.unwrap_or((0.0, 0.0));
            let pointer = (f64::from(e.client_x()), f64::from(e.client_y()));
            s.drag = Some(StickerDrag::start(pointer, position));
            s.lift = Lift::Lifted;
            paint(&target, position, s.lift);
            let _ = target.set_pointer_capture(e.pointer_id());
            drop(s);
            on_change.emit(true);
        })
    };

    let onpointermove = {
        let target_ref = target_ref.clone();
        let state = state.clone();
        Callback::from(move |e: PointerEvent| {
            let mut s = state.borrow_mut();
            let Some(drag) = s.drag else {
                return;
            };
            let Some(target) = target_ref.cast::<HtmlElement>() else {
                return;
            };
            let pointer = (f64::from(e.client_x()), f64::from(e.client_y()));
            let mut position = drag.position_at(pointer);
            if let Some((bounds, size)) = bounds_and_size(&target) {
                position = clamp_position(position, bounds, size);
            }
            s.position = Some(position);
            paint(&target, position, s.lift);
        })
    };

    let end_drag = {
        let target_ref = target_ref.clone();
        let state = state.clone();
        let settle_timer = settle_timer.clone();
        let on_change = props.on_interaction_change.clone();
        Callback::from(move |_: PointerEvent| {
            let mut s = state.borrow_mut();
            if s.drag.take().is_none() {
                return;
            }
            s.lift = Lift::Resting;
            if let (Some(target), Some(position)) = (target_ref.cast::<HtmlElement>(), s.position) {
                paint(&target, position, s.lift);
                debug!("Sticker dropped at {:?}", position);
            }
            let on_change = on_change.clone();
            *settle_timer.borrow_mut() = Some(Timeout::new(SETTLE_MS, move || on_change.emit(false)));
        })
    };

    let onmouseenter = {
        let tooltip_timer = tooltip_timer.clone();
        let show_tooltip = show_tooltip.clone();
        let has_tooltip = props.tooltip_title.is_some();
        Callback::from(move |_: MouseEvent| {
            if !has_tooltip {
                return;
            }
            let show_tooltip = show_tooltip.clone();
            *tooltip_timer.borrow_mut() =
                Some(Timeout::new(TOOLTIP_DELAY_MS, move || show_tooltip.set(true)));
        })
    };
    let onmouseleave = {
        let tooltip_timer = tooltip_timer.clone();
        let show_tooltip = show_tooltip.clone();
        Callback::from(move |_: MouseEvent| {
            tooltip_timer.borrow_mut().take();
            show_tooltip.set(false);
        })
    };

    let vars = format!(
        "--sticker-rotate: {}deg; --sticker-p: {PADDING}px; --sticker-peelback-hover: {}%; \
         --sticker-peelback-active: {}%; --sticker-width: {}px; --sticker-shadow-opacity: {}; \
         --peel-direction: {}deg; --sticker-index: {}; \
         --sticker-start: calc(-1 * {PADDING}px); --sticker-end: calc(100% + {PADDING}px);",
        props.rotate,
        props.peel_back_hover_pct,
        props.peel_back_active_pct,
        props.width,
        props.shadow_intensity,
        props.peel_direction,
        props.index,
    );
    let image_style = format!(
        "transform: rotate({}deg); width: {}px;",
        props.rotate - props.peel_direction,
        props.width
    );
    let prevent_context_menu = Callback::from(|e: MouseEvent| e.prevent_default());

    let tooltip = match (&props.tooltip_title, *show_tooltip) {
        (Some(title), true) => html! {
            <div class="sticker-tooltip" role="tooltip">
                <div class="sticker-tooltip-title">{ title.to_string() }</div>
                if let Some(description) = &props.tooltip_description {
                    <div class="sticker-tooltip-description">{ description.to_string() }</div>
                }
            </div>
        },
        _ => html! {},
    };

    html! {
        <div
            ref={target_ref}
            class={classes!("sticker-peel", props.class.clone())}
            {onpointerdown}
            {onpointermove}
            onpointerup={end_drag.clone()}
            onpointercancel={end_drag}
        >
            <style>
                {r#"
                .sticker-peel {
                    position: absolute;
                    top: 0;
                    left: 0;
                    z-index: 101;
                    isolation: isolate;
                    cursor: grab;
                    touch-action: none;
                    will-change: transform;
                }
                .sticker-peel:active { cursor: grabbing; }
                @keyframes sticker-float {
                    0%, 100% { transform: translateY(0) rotate(var(--peel-direction)); }
                    50% { transform: translateY(-3px) rotate(var(--peel-direction)); }
                }
                .sticker-container {
                    position: relative;
                    user-select: none;
                    -webkit-user-select: none;
                    -webkit-touch-callout: none;
                    transform-origin: center;
                    transform: rotate(var(--peel-direction));
                    animation: sticker-float 4s ease-in-out infinite;
                    animation-delay: calc(var(--sticker-index, 0) * 0.2s);
                }
                .sticker-container:hover {
                    animation: none;
                    transform: translateY(-2px) rotate(var(--peel-direction));
                    transition: transform 0.2s ease-out;
                }
                .sticker-main {
                    clip-path: polygon(var(--sticker-start) var(--sticker-start), var(--sticker-end) var(--sticker-start), var(--sticker-end) var(--sticker-end), var(--sticker-start) var(--sticker-end));
                    transition: clip-path 0.6s ease-out;
                    filter: drop-shadow(2px 4px 2px rgba(0, 0, 0, var(--sticker-shadow-opacity)));
                }
                .sticker-flap {
                    position: absolute;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    top: calc(-100% - var(--sticker-p) - var(--sticker-p));
                    transform: scaleY(-1);
                    clip-path: polygon(var(--sticker-start) var(--sticker-start), var(--sticker-end) var(--sticker-start), var(--sticker-end) var(--sticker-start), var(--sticker-start) var(--sticker-start));
                    transition: all 0.6s ease-out;
                }
                .sticker-flap img { filter: brightness(0.7); }
                .sticker-container:hover .sticker-main {
                    clip-path: polygon(var(--sticker-start) var(--sticker-peelback-hover), var(--sticker-end) var(--sticker-peelback-hover), var(--sticker-end) var(--sticker-end), var(--sticker-start) var(--sticker-end));
                }
                .sticker-container:hover .sticker-flap {
                    clip-path: polygon(var(--sticker-start) var(--sticker-start), var(--sticker-end) var(--sticker-start), var(--sticker-end) var(--sticker-peelback-hover), var(--sticker-start) var(--sticker-peelback-hover));
                    top: calc(-100% + 2 * var(--sticker-peelback-hover) - 1px);
                }
                .sticker-container:active .sticker-main {
                    clip-path: polygon(var(--sticker-start) var(--sticker-peelback-active), var(--sticker-end) var(--sticker-peelback-active), var(--sticker-end) var(--sticker-end), var(--sticker-start) var(--sticker-end));
                }
                .sticker-container:active .sticker-flap {
                    clip-path: polygon(var(--sticker-start) var(--sticker-start), var(--sticker-end) var(--sticker-start), var(--sticker-end) var(--sticker-peelback-active), var(--sticker-start) var(--sticker-peelback-active));
                    top: calc(-100% + 2 * var(--sticker-peelback-active) - 1px);
                }
                .sticker-container img { display: block; pointer-events: none; }
                .sticker-tooltip {
                    position: absolute;
                    bottom: calc(100% + 12px);
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 200;
                    pointer-events: none;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    background: var(--tooltip-bg, #111827);
                    color: var(--tooltip-fg, #fff);
                    font-size: 0.875rem;
                    white-space: nowrap;
                }
                .sticker-tooltip-title { font-weight: 600; }
                .sticker-tooltip-description {
                    margin-top: 0.25rem;
                    max-width: 200px;
                    font-size: 0.75rem;
                    opacity: 0.9;
                    white-space: normal;
                }
                "#}
            </style>
            <div class="sticker-container" style={vars} {onmouseenter} {onmouseleave}>
                <div class="sticker-main">
                    <img
                        src={props.image.clone()}
                        alt=""
                        style={image_style.clone()}
                        draggable="false"
                        oncontextmenu={prevent_context_menu.clone()}
                    />
                </div>
                <div class="sticker-flap">
                    <img
                        src={props.image.clone()}
                        alt=""
                        style={image_style}
                        draggable="false"
                        oncontextmenu={prevent_context_menu}
                    />
                </div>
                { tooltip }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_bounds() {
        let bounds = (800.0, 600.0);
        let size = (200.0, 150.0);
        assert_eq!(clamp_position((-40.0, 20.0), bounds, size), (0.0, 20.0));
        assert_eq!(clamp_position((700.0, 500.0), bounds, size), (600.0, 450.0));
        assert_eq!(clamp_position((300.0, 200.0), bounds, size), (300.0, 200.0));
    }

    #[test]
    fn oversized_sticker_pins_to_origin() {
        assert_eq!(clamp_position((50.0, 50.0), (100.0, 100.0), (200.0, 200.0)), (0.0, 0.0));
    }

    #[test]
    fn centers_inside_parent() {
        assert_eq!(centered((1000.0, 500.0), (200.0, 100.0)), (400.0, 200.0));
    }

    #[test]
    fn drag_follows_pointer_from_grab_point() {
        let drag = StickerDrag::start((100.0, 100.0), (20.0, 30.0));
        assert_eq!(drag.position_at((100.0, 100.0)), (20.0, 30.0));
        assert_eq!(drag.position_at((150.0, 80.0)), (70.0, 10.0));
    }

    #[test]
    fn lift_and_settle() {
        assert_eq!(Lift::Lifted.scale(), 1.1);
        assert_eq!(Lift::Lifted.z_index(), "102");
        assert_eq!(Lift::Resting.scale(), 1.0);
        assert_eq!(Lift::Resting.z_index(), "101");
    }
}

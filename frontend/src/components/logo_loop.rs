use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement, PointerEvent, ResizeObserver, WheelEvent};
use yew::prelude::*;

use crate::content::LogoImage;
use crate::dom;
use crate::marquee::{Direction, MarqueeConfig, MarqueeEngine, ResumeTicket, MIN_COPIES, RESUME_DELAY_MS};

/// One entry of the strip: arbitrary markup or an image by URL.
#[derive(Clone, PartialEq)]
pub enum LogoItem {
    Node {
        node: Html,
        href: Option<String>,
        title: Option<String>,
        aria_label: Option<String>,
    },
    Image(LogoImage),
}

impl LogoItem {
    pub fn node(node: Html) -> Self {
        LogoItem::Node {
            node,
            href: None,
            title: None,
            aria_label: None,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            LogoItem::Node { href, .. } => href.as_deref(),
            LogoItem::Image(image) => image.href.as_deref(),
        }
    }

    pub fn aria_label(&self) -> Option<&str> {
        match self {
            LogoItem::Node { aria_label, title, .. } => aria_label.as_deref().or(title.as_deref()),
            LogoItem::Image(image) => Some(image.alt.as_str())
                .filter(|alt| !alt.is_empty())
                .or(image.title.as_deref()),
        }
    }
}

impl From<LogoImage> for LogoItem {
    fn from(image: LogoImage) -> Self {
        LogoItem::Image(image)
    }
}

#[derive(Properties, PartialEq)]
pub struct LogoLoopProps {
    pub items: Vec<LogoItem>,
    #[prop_or(120.0)]
    pub speed: f64,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(true)]
    pub pause_on_hover: bool,
    #[prop_or(true)]
    pub draggable: bool,
    #[prop_or(32)]
    pub gap: u32,
    #[prop_or(28)]
    pub logo_height: u32,
    #[prop_or_default]
    pub fade_out: bool,
    #[prop_or_default]
    pub fade_out_color: Option<String>,
    #[prop_or_default]
    pub scale_on_hover: bool,
    #[prop_or_else(|| "Partner logos".to_string())]
    pub aria_label: String,
    #[prop_or_default]
    pub class: Classes,
}

/// Per-frame driver: pulls a translation out of the engine and writes it to
/// the track, then re-registers itself for the next frame until stopped.
struct FrameLoop {
    engine: Rc<RefCell<MarqueeEngine>>,
    track: NodeRef,
    last_timestamp: Cell<Option<f64>>,
    handle: RefCell<Option<AnimationFrame>>,
    running: Cell<bool>,
}

impl FrameLoop {
    fn new(engine: Rc<RefCell<MarqueeEngine>>, track: NodeRef) -> Rc<Self> {
        Rc::new(Self {
            engine,
            track,
            last_timestamp: Cell::new(None),
            handle: RefCell::new(None),
            running: Cell::new(false),
        })
    }

    fn start(self: &Rc<Self>) {
        self.running.set(true);
        self.schedule();
    }

    fn schedule(self: &Rc<Self>) {
        let frame_loop = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| frame_loop.tick(timestamp));
        *self.handle.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>, timestamp: f64) {
        self.handle.borrow_mut().take();
        if !self.running.get() {
            return;
        }
        let dt = match self.last_timestamp.replace(Some(timestamp)) {
            Some(previous) => timestamp - previous,
            None => 0.0,
        };
        let translate = self.engine.borrow_mut().frame(dt);
        if let (Some(x), Some(track)) = (translate, self.track.cast::<HtmlElement>()) {
            dom::set_style(
                &track.style(),
                "transform",
                &format!("translate3d({}px, 0, 0)", x),
            );
        }
        self.schedule();
    }

    /// Drops the pending frame, which also breaks the loop's self reference.
    fn stop(&self) {
        self.running.set(false);
        self.handle.borrow_mut().take();
    }
}

/// Arms the quiet-period timer for `ticket`. Replacing the previous timer
/// cancels it.
fn arm_resume(
    engine: &Rc<RefCell<MarqueeEngine>>,
    slot: &Rc<RefCell<Option<Timeout>>>,
    ticket: ResumeTicket,
) {
    let engine = Rc::clone(engine);
    let timeout = Timeout::new(RESUME_DELAY_MS, move || {
        let mut engine = engine.borrow_mut();
        let session = engine.arbiter().session();
        if engine.on_resume(ticket) {
            if let Some(session) = session {
                debug!(
                    "Marquee resuming after {:.0}ms of interaction",
                    session.last_input_at - session.started_at
                );
            }
        }
    });
    *slot.borrow_mut() = Some(timeout);
}

fn render_item(item: &LogoItem, key: String, scale_on_hover: bool, dragging: bool) -> Html {
    let content = match item {
        LogoItem::Node { node, href, aria_label, .. } => html! {
            <span
                class={classes!("logoloop-node", scale_on_hover.then_some("scalable"))}
                aria-hidden={(href.is_some() && aria_label.is_none()).to_string()}
            >
                { node.clone() }
            </span>
        },
        LogoItem::Image(image) => html! {
            <img
                class={classes!("logoloop-img", scale_on_hover.then_some("scalable"))}
                src={image.url()}
                alt={image.alt.clone()}
                title={image.title.clone()}
                draggable="false"
            />
        },
    };

    let inner = match item.href() {
        Some(href) => {
            let onclick = Callback::from(move |e: MouseEvent| {
                if dragging {
                    e.prevent_default();
                }
            });
            html! {
                <a
                    class={classes!("logoloop-link", dragging.then_some("dragging"))}
                    href={href.to_string()}
                    aria-label={item.aria_label().unwrap_or("logo link").to_string()}
                    target="_blank"
                    rel="noreferrer noopener"
                    {onclick}
                >
                    { content }
                </a>
            }
        }
        None => content,
    };

    html! {
        <li class="logoloop-item" role="listitem" key={key}>
            { inner }
        </li>
    }
}

#[function_component(LogoLoop)]
pub fn logo_loop(props: &LogoLoopProps) -> Html {
    let config = MarqueeConfig {
        speed: props.speed,
        direction: props.direction,
        pause_on_hover: props.pause_on_hover,
        draggable: props.draggable,
    };

    let engine = {
        let config = config.clone();
        use_mut_ref(move || MarqueeEngine::new(config))
    };
    let container_ref = use_node_ref();
    let sequence_ref = use_node_ref();
    let track_ref = use_node_ref();
    let copy_count = use_state_eq(|| MIN_COPIES);
    let is_dragging = use_state_eq(|| false);
    let pointer_x = use_mut_ref(|| None::<i32>);
    let resume_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        let engine = engine.clone();
        use_effect_with_deps(
            move |config| {
                engine.borrow_mut().set_config(config.clone());
                || ()
            },
            config,
        );
    }

    let remeasure: Rc<dyn Fn()> = {
        let engine = engine.clone();
        let container_ref = container_ref.clone();
        let sequence_ref = sequence_ref.clone();
        let copy_count = copy_count.clone();
        Rc::new(move || {
            let container_width = container_ref
                .cast::<Element>()
                .map_or(0.0, |el| el.client_width() as f64);
            let sequence_width = sequence_ref
                .cast::<Element>()
                .map_or(0.0, |el| el.get_bounding_client_rect().width());
            if let Some(measurement) = engine.borrow_mut().remeasure(container_width, sequence_width) {
                debug!(
                    "Marquee measured: sequence {}px in {}px container, {} copies",
                    measurement.sequence_width, container_width, measurement.copy_count
                );
                copy_count.set(measurement.copy_count);
            }
        })
    };

    // Layout can change when the container or the sequence resizes, on late
    // image loads and on new content. Window resize covers browsers without
    // ResizeObserver.
    {
        let remeasure = remeasure.clone();
        let container_ref = container_ref.clone();
        let sequence_ref = sequence_ref.clone();
        use_effect_with_deps(
            move |_| {
                remeasure();

                let resize_listener = web_sys::window().map(|window| {
                    let remeasure = remeasure.clone();
                    EventListener::new(&window, "resize", move |_| remeasure())
                });

                let on_resize = {
                    let remeasure = remeasure.clone();
                    Closure::<dyn FnMut()>::new(move || remeasure())
                };
                let observer = match ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
                    Ok(observer) => {
                        for node in [&container_ref, &sequence_ref] {
                            if let Some(element) = node.cast::<Element>() {
                                observer.observe(&element);
                            }
                        }
                        Some(observer)
                    }
                    Err(_) => {
                        warn!("ResizeObserver unavailable, remeasuring on window resize only");
                        None
                    }
                };

                let mut image_listeners = Vec::new();
                let images = sequence_ref
                    .cast::<Element>()
                    .and_then(|seq| seq.query_selector_all("img").ok());
                if let Some(images) = images {
                    for index in 0..images.length() {
                        let Some(image) = images
                            .item(index)
                            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
                        else {
                            continue;
                        };
                        if image.complete() {
                            continue;
                        }
                        for event in ["load", "error"] {
                            let remeasure = remeasure.clone();
                            image_listeners.push(EventListener::once(&image, event, move |_| remeasure()));
                        }
                    }
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(on_resize);
                    drop(resize_listener);
                    drop(image_listeners);
                }
            },
            (props.items.clone(), props.gap, props.logo_height),
        );
    }

    // Frame loop, reduced-motion tracking and the non-passive wheel listener
    // live exactly as long as the widget is mounted.
    {
        let engine = engine.clone();
        let track_ref = track_ref.clone();
        let resume_timer = resume_timer.clone();
        use_effect_with_deps(
            move |_| {
                let frame_loop = FrameLoop::new(engine.clone(), track_ref.clone());
                frame_loop.start();

                let motion_listener = dom::reduced_motion_query().map(|query| {
                    if query.matches() {
                        info!("Reduced motion requested, marquee will stay still");
                    }
                    engine.borrow_mut().set_reduced_motion(query.matches());
                    let engine = engine.clone();
                    let watched = query.clone();
                    EventListener::new(&query, "change", move |_| {
                        engine.borrow_mut().set_reduced_motion(watched.matches());
                    })
                });

                let wheel_listener = track_ref.cast::<HtmlElement>().map(|track| {
                    let engine = engine.clone();
                    let resume_timer = resume_timer.clone();
                    EventListener::new_with_options(
                        &track,
                        "wheel",
                        EventListenerOptions::enable_prevent_default(),
                        move |event| {
                            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                                return;
                            };
                            if !engine.borrow().is_active() {
                                return;
                            }
                            wheel.prevent_default();
                            let ticket = engine
                                .borrow_mut()
                                .on_wheel(wheel.delta_x(), wheel.delta_y(), dom::now_ms());
                            if let Some(ticket) = ticket {
                                arm_resume(&engine, &resume_timer, ticket);
                            }
                        },
                    )
                });

                move || {
                    frame_loop.stop();
                    resume_timer.borrow_mut().take();
                    drop(motion_listener);
                    drop(wheel_listener);
                }
            },
            (),
        );
    }

    let onpointerdown = {
        let engine = engine.clone();
        let pointer_x = pointer_x.clone();
        let is_dragging = is_dragging.clone();
        let resume_timer = resume_timer.clone();
        let track_ref = track_ref.clone();
        Callback::from(move |e: PointerEvent| {
            if e.button() != 0 {
                return;
            }
            let mut engine = engine.borrow_mut();
            engine.on_drag_start(dom::now_ms());
            if !engine.arbiter().is_dragging() {
                return;
            }
            resume_timer.borrow_mut().take();
            *pointer_x.borrow_mut() = Some(e.client_x());
            if let Some(track) = track_ref.cast::<Element>() {
                let _ = track.set_pointer_capture(e.pointer_id());
            }
            is_dragging.set(true);
        })
    };

    let onpointermove = {
        let engine = engine.clone();
        let pointer_x = pointer_x.clone();
        Callback::from(move |e: PointerEvent| {
            let mut last = pointer_x.borrow_mut();
            if let Some(previous) = *last {
                let x = e.client_x();
                *last = Some(x);
                engine
                    .borrow_mut()
                    .on_drag_move(f64::from(x - previous), dom::now_ms());
            }
        })
    };

    let end_drag = {
        let engine = engine.clone();
        let pointer_x = pointer_x.clone();
        let is_dragging = is_dragging.clone();
        let resume_timer = resume_timer.clone();
        Callback::from(move |_: PointerEvent| {
            if pointer_x.borrow_mut().take().is_none() {
                return;
            }
            let ticket = engine.borrow_mut().on_drag_end(dom::now_ms());
            if let Some(ticket) = ticket {
                arm_resume(&engine, &resume_timer, ticket);
            }
            is_dragging.set(false);
        })
    };

    let onmouseenter = {
        let engine = engine.clone();
        Callback::from(move |_: MouseEvent| engine.borrow_mut().on_hover(true))
    };
    let onmouseleave = {
        let engine = engine.clone();
        Callback::from(move |_: MouseEvent| engine.borrow_mut().on_hover(false))
    };

    let dragging = *is_dragging;
    let copies = (0..*copy_count).map(|copy_index| {
        let node_ref = if copy_index == 0 {
            sequence_ref.clone()
        } else {
            NodeRef::default()
        };
        html! {
            <ul
                class="logoloop-seq"
                role="list"
                key={format!("copy-{}", copy_index)}
                aria-hidden={(copy_index > 0).to_string()}
                ref={node_ref}
            >
                {
                    for props.items.iter().enumerate().map(|(item_index, item)| {
                        render_item(item, format!("{}-{}", copy_index, item_index), props.scale_on_hover, dragging)
                    })
                }
            </ul>
        }
    });

    let container_style = format!(
        "--logoloop-gap: {}px; --logoloop-logoHeight: {}px;{}",
        props.gap,
        props.logo_height,
        props
            .fade_out_color
            .as_ref()
            .map(|color| format!(" --logoloop-fadeColor: {};", color))
            .unwrap_or_default()
    );

    html! {
        <div
            ref={container_ref}
            class={classes!("logoloop", props.scale_on_hover.then_some("scale-on-hover"), props.class.clone())}
            style={container_style}
            role="region"
            aria-label={props.aria_label.clone()}
            {onmouseenter}
            {onmouseleave}
        >
            {
                if props.fade_out {
                    html! {
                        <>
                            <div class="logoloop-fade left" aria-hidden="true"></div>
                            <div class="logoloop-fade right" aria-hidden="true"></div>
                        </>
                    }
                } else {
                    html! {}
                }
            }
            <div
                ref={track_ref}
                class={classes!("logoloop-track", dragging.then_some("dragging"))}
                {onpointerdown}
                {onpointermove}
                onpointerup={end_drag.clone()}
                onpointercancel={end_drag}
            >
                { for copies }
            </div>
            <style>
                {r#"
                    .logoloop {
                        position: relative;
                        overflow-x: hidden;
                        width: 100%;
                        --logoloop-fadeColorAuto: #ffffff;
                    }
                    :root.dark .logoloop {
                        --logoloop-fadeColorAuto: #0b0b0b;
                    }
                    .logoloop.scale-on-hover {
                        padding: calc(var(--logoloop-logoHeight) * 0.1) 0;
                    }
                    .logoloop-track {
                        display: flex;
                        width: max-content;
                        will-change: transform;
                        cursor: grab;
                        user-select: none;
                        -webkit-user-select: none;
                        touch-action: pan-y;
                    }
                    .logoloop-track.dragging {
                        cursor: grabbing;
                    }
                    .logoloop-seq {
                        display: flex;
                        align-items: center;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .logoloop-item {
                        flex: none;
                        margin-right: var(--logoloop-gap);
                    }
                    .logoloop-img {
                        display: block;
                        height: var(--logoloop-logoHeight);
                        width: auto;
                        object-fit: contain;
                        filter: grayscale(1) invert(1) contrast(0.5);
                        transition: filter 0.3s ease-in-out, transform 0.3s ease-in-out;
                        pointer-events: none;
                        -webkit-user-drag: none;
                    }
                    .logoloop-item:hover .logoloop-img {
                        filter: none;
                    }
                    .logoloop-node {
                        display: inline-flex;
                        align-items: center;
                        transition: transform 0.3s ease-in-out;
                    }
                    .logoloop-item:hover .scalable {
                        transform: scale(1.2);
                    }
                    .logoloop-link {
                        display: inline-flex;
                        align-items: center;
                        text-decoration: none;
                        transition: opacity 0.2s linear;
                    }
                    .logoloop-link:hover {
                        opacity: 0.8;
                    }
                    .logoloop-link.dragging {
                        pointer-events: none;
                    }
                    .logoloop-fade {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        z-index: 1;
                        width: clamp(24px, 8%, 120px);
                        pointer-events: none;
                    }
                    .logoloop-fade.left {
                        left: 0;
                        background: linear-gradient(to right, var(--logoloop-fadeColor, var(--logoloop-fadeColorAuto)) 0%, rgba(0, 0, 0, 0) 100%);
                    }
                    .logoloop-fade.right {
                        right: 0;
                        background: linear-gradient(to left, var(--logoloop-fadeColor, var(--logoloop-fadeColorAuto)) 0%, rgba(0, 0, 0, 0) 100%);
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .logoloop-track {
                            transform: none !important;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(alt: &str, title: Option<&str>) -> LogoImage {
        LogoImage {
            src: "logos/dev/rust.svg".into(),
            alt: alt.into(),
            href: Some("https://www.rust-lang.org".into()),
            title: title.map(String::from),
        }
    }

    #[test]
    fn image_label_prefers_alt() {
        let item = LogoItem::from(image("Rust", Some("Rust language")));
        assert_eq!(item.aria_label(), Some("Rust"));
        assert_eq!(item.href(), Some("https://www.rust-lang.org"));

        let untitled = LogoItem::from(image("", Some("Rust language")));
        assert_eq!(untitled.aria_label(), Some("Rust language"));
    }

    #[test]
    fn node_label_falls_back_to_title() {
        let item = LogoItem::Node {
            node: html! { <span>{"card"}</span> },
            href: None,
            title: Some("Testimonial".into()),
            aria_label: None,
        };
        assert_eq!(item.aria_label(), Some("Testimonial"));
        assert_eq!(LogoItem::node(Html::default()).aria_label(), None);
    }
}

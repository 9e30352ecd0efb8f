use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub started_at: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkStyle {
    pub size: f64,
    pub radius: f64,
    pub count: u32,
    pub duration: f64,
}

impl SparkStyle {
    /// `count` sparks fanned out evenly around the click point.
    pub fn burst(&self, x: f64, y: f64, now: f64) -> Vec<Spark> {
        (0..self.count)
            .map(|i| Spark {
                x,
                y,
                angle: 2.0 * PI * f64::from(i) / f64::from(self.count),
                started_at: now,
            })
            .collect()
    }

    /// Line segment to stroke for `spark` at time `now`, or `None` once it
    /// has burned out.
    pub fn segment(&self, spark: &Spark, now: f64) -> Option<((f64, f64), (f64, f64))> {
        let elapsed = now - spark.started_at;
        if elapsed >= self.duration {
            return None;
        }
        let progress = (elapsed / self.duration).max(0.0);
        let distance = progress * self.radius;
        let length = self.size * (1.0 - progress);
        let (sin, cos) = spark.angle.sin_cos();
        Some((
            (spark.x + distance * cos, spark.y + distance * sin),
            (spark.x + (distance + length) * cos, spark.y + (distance + length) * sin),
        ))
    }
}

#[derive(Properties, PartialEq)]
pub struct ClickSparkProps {
    #[prop_or_else(|| "#fff".to_string())]
    pub color: String,
    #[prop_or(10.0)]
    pub size: f64,
    #[prop_or(20.0)]
    pub radius: f64,
    #[prop_or(8)]
    pub count: u32,
    #[prop_or(400.0)]
    pub duration: f64,
    #[prop_or_default]
    pub children: Children,
}

struct SparkCanvas {
    canvas: NodeRef,
    style: Cell<SparkStyle>,
    color: RefCell<String>,
    sparks: RefCell<Vec<Spark>>,
    handle: RefCell<Option<AnimationFrame>>,
}

impl SparkCanvas {
    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| this.draw(timestamp));
        *self.handle.borrow_mut() = Some(handle);
    }

    fn draw(self: &Rc<Self>, timestamp: f64) {
        self.handle.borrow_mut().take();
        let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() else {
            return;
        };
        let Some(context) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return;
        };

        context.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
        let style = self.style.get();
        context.set_stroke_style(&self.color.borrow().as_str().into());
        context.set_line_width(2.0);

        self.sparks.borrow_mut().retain(|spark| match style.segment(spark, timestamp) {
            Some(((x1, y1), (x2, y2))) => {
                context.begin_path();
                context.move_to(x1, y1);
                context.line_to(x2, y2);
                context.stroke();
                true
            }
            None => false,
        });

        self.schedule();
    }

    fn stop(&self) {
        self.handle.borrow_mut().take();
    }
}

fn fit_to_viewport(canvas: &NodeRef) {
    if let Some(canvas) = canvas.cast::<HtmlCanvasElement>() {
        let (width, height) = dom::viewport_size();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
}

/// Wraps the page and draws a short radial burst wherever it is clicked.
#[function_component(ClickSpark)]
pub fn click_spark(props: &ClickSparkProps) -> Html {
    let canvas_ref = use_node_ref();
    let style = SparkStyle {
        size: props.size,
        radius: props.radius,
        count: props.count,
        duration: props.duration,
    };

    let painter: Rc<SparkCanvas> = {
        let canvas_ref = canvas_ref.clone();
        let color = props.color.clone();
        use_memo(
            move |_| SparkCanvas {
                canvas: canvas_ref,
                style: Cell::new(style),
                color: RefCell::new(color),
                sparks: RefCell::new(Vec::new()),
                handle: RefCell::new(None),
            },
            (),
        )
    };
    painter.style.set(style);
    *painter.color.borrow_mut() = props.color.clone();

    {
        let painter = painter.clone();
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                fit_to_viewport(&canvas_ref);
                let resize_listener = web_sys::window().map(|window| {
                    let canvas_ref = canvas_ref.clone();
                    EventListener::new(&window, "resize", move |_| fit_to_viewport(&canvas_ref))
                });
                painter.schedule();
                move || {
                    painter.stop();
                    drop(resize_listener);
                }
            },
            (),
        );
    }

    let onclick = {
        let painter = painter.clone();
        Callback::from(move |e: MouseEvent| {
            let burst = painter.style.get().burst(
                f64::from(e.client_x()),
                f64::from(e.client_y()),
                dom::now_ms(),
            );
            painter.sparks.borrow_mut().extend(burst);
        })
    };

    html! {
        <>
            <canvas
                ref={canvas_ref}
                style="position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; pointer-events: none; z-index: 999999;"
            />
            <div {onclick}>
                { for props.children.iter() }
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> SparkStyle {
        SparkStyle {
            size: 12.0,
            radius: 25.0,
            count: 12,
            duration: 400.0,
        }
    }

    #[test]
    fn burst_fans_out_evenly() {
        let sparks = style().burst(100.0, 50.0, 0.0);
        assert_eq!(sparks.len(), 12);
        assert_eq!(sparks[0].angle, 0.0);
        assert!((sparks[3].angle - PI / 2.0).abs() < 1e-12);
        assert!(sparks.iter().all(|s| s.x == 100.0 && s.y == 50.0));
    }

    #[test]
    fn segment_travels_and_shrinks() {
        let style = style();
        let spark = Spark {
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            started_at: 1000.0,
        };
        let (start, end) = style.segment(&spark, 1000.0).unwrap();
        assert_eq!(start, (0.0, 0.0));
        assert_eq!(end, (12.0, 0.0));

        let (start, end) = style.segment(&spark, 1200.0).unwrap();
        assert!((start.0 - 12.5).abs() < 1e-9);
        assert!((end.0 - 18.5).abs() < 1e-9);
    }

    #[test]
    fn burned_out_sparks_disappear() {
        let style = style();
        let spark = style.burst(0.0, 0.0, 0.0)[0];
        assert!(style.segment(&spark, 399.0).is_some());
        assert!(style.segment(&spark, 400.0).is_none());
    }
}

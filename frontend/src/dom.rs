use std::cell::Cell;

use log::debug;
use web_sys::{CssStyleDeclaration, MediaQueryList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

/// Milliseconds on the same clock as animation frame timestamps.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

pub fn reduced_motion_query() -> Option<MediaQueryList> {
    web_sys::window()?
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
}

/// Smooth-scrolls the element with `id` to the top of the viewport.
/// Returns `false` when no such element exists.
pub fn scroll_to_id(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            options.block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let mut options = ScrollToOptions::new();
        options.top(0.0);
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

thread_local! {
    static STYLE_FAILURE_LOGGED: Cell<bool> = Cell::new(false);
}

/// Reports whether a style write went through. Only the first failure is
/// logged.
fn style_applied<E>(property: &str, result: Result<(), E>) -> bool {
    if result.is_ok() {
        return true;
    }
    if !STYLE_FAILURE_LOGGED.with(|logged| logged.replace(true)) {
        debug!("Could not set style property {}", property);
    }
    false
}

pub fn set_style(style: &CssStyleDeclaration, property: &str, value: &str) -> bool {
    style_applied(property, style.set_property(property, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_failures_are_reported() {
        assert!(style_applied::<()>("transform", Ok(())));
        assert!(!style_applied("transform", Err(())));
        assert!(!style_applied("z-index", Err(())));
        assert!(STYLE_FAILURE_LOGGED.with(Cell::get));
    }
}

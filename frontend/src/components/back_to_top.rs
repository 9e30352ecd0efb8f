use yew::prelude::*;
use yew_hooks::use_window_scroll;

use crate::dom;

const SHOW_AFTER_PX: f64 = 300.0;

pub fn is_visible(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();
    if !is_visible(scroll_y) {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| dom::scroll_to_top());
    html! {
        <button class="back-to-top" {onclick} aria-label="Back to top">
            <svg viewBox="0 0 24 24" width="24" height="24" fill="none" stroke="currentColor"
                stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M12 19V5" />
                <path d="M5 12l7-7 7 7" />
            </svg>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_only_past_threshold() {
        assert!(!is_visible(0.0));
        assert!(!is_visible(300.0));
        assert!(is_visible(300.5));
    }
}

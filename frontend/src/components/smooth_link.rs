use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::dom;

const INITIAL_SCROLL_DELAY_MS: u32 = 100;

/// Element id a `#fragment` link points at, if it is one.
pub fn hash_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Properties, PartialEq)]
pub struct SmoothLinkProps {
    pub to: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Runs after the scroll starts, e.g. to close a menu.
    #[prop_or_default]
    pub onclick: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that smooth-scrolls to in-page sections instead of jumping.
#[function_component(SmoothLink)]
pub fn smooth_link(props: &SmoothLinkProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        let after = props.onclick.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = hash_target(&to) {
                e.prevent_default();
                if !dom::scroll_to_id(id) {
                    debug!("No section with id {}", id);
                }
            }
            after.emit(());
        })
    };

    html! {
        <a href={props.to.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

/// Scrolls to the section named by the location hash shortly after mount.
#[hook]
pub fn use_initial_hash_scroll() {
    use_effect_with_deps(
        |_| {
            let hash = web_sys::window()
                .and_then(|w| w.location().hash().ok())
                .unwrap_or_default();
            let timeout = hash_target(&hash).map(str::to_string).map(|id| {
                Timeout::new(INITIAL_SCROLL_DELAY_MS, move || {
                    dom::scroll_to_id(&id);
                })
            });
            move || drop(timeout)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fragments_are_targets() {
        assert_eq!(hash_target("#about"), Some("about"));
        assert_eq!(hash_target("#"), None);
        assert_eq!(hash_target("/contact"), None);
        assert_eq!(hash_target("https://example.com/#x"), None);
    }
}

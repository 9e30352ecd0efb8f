//! Site-wide color theme.
//!
//! The active theme lives in one [`ThemeStore`] per page. Components read it
//! through [`use_theme`] and re-render when it changes; [`switch_theme`]
//! publishes a new theme, mirrors it onto the document root class list,
//! persists it to local storage and swaps the favicon.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlLinkElement;
use yew::prelude::*;

use crate::error::SiteError;

const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Yellow,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Yellow];

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Yellow => "yellow",
        }
    }

    /// Dark pages get the light logo; light and yellow share the black one.
    pub fn favicon_href(self) -> &'static str {
        match self {
            Theme::Dark => "/favicon-dark.svg",
            Theme::Light | Theme::Yellow => "/favicon-light.svg",
        }
    }

    /// Page background, used where widgets fade into the page.
    pub fn surface_color(self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#0f0f0f",
            Theme::Yellow => "#fff8e1",
        }
    }

    pub fn card_color(self) -> &'static str {
        match self {
            Theme::Light => "#f3f4f6",
            Theme::Dark => "#1f2937",
            Theme::Yellow => "#fde68a",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for Theme {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "yellow" => Ok(Theme::Yellow),
            other => Err(SiteError::UnknownTheme(other.to_string())),
        }
    }
}

type Listener = Rc<dyn Fn(Theme)>;

pub struct ThemeStore {
    current: Cell<Theme>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Rc<Self> {
        Rc::new(Self {
            current: Cell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    pub fn get(&self) -> Theme {
        self.current.get()
    }

    /// Publishes `theme` to every subscriber. Returns `false` and notifies
    /// nobody when it is already active.
    pub fn set(&self, theme: Theme) -> bool {
        if self.current.replace(theme) == theme {
            return false;
        }
        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(theme);
        }
        true
    }

    /// Registers `listener` until the returned subscription is dropped.
    pub fn subscribe(self: &Rc<Self>, listener: impl Fn(Theme) + 'static) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription {
            store: Rc::downgrade(self),
            id,
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
    }
}

#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    store: Weak<ThemeStore>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.unsubscribe(self.id);
        }
    }
}

thread_local! {
    static STORE: Rc<ThemeStore> = ThemeStore::new(Theme::default());
}

pub fn store() -> Rc<ThemeStore> {
    STORE.with(Rc::clone)
}

/// Theme to start with given what local storage holds, and whether the
/// stored value has to be rewritten.
pub fn resolve_saved(saved: Option<&str>) -> (Theme, bool) {
    match saved.map(str::parse::<Theme>) {
        Some(Ok(theme)) => (theme, false),
        Some(Err(_)) | None => (Theme::default(), true),
    }
}

fn local_storage() -> Result<web_sys::Storage, SiteError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .ok_or(SiteError::StorageUnavailable)
}

fn persist(theme: Theme) -> Result<(), SiteError> {
    local_storage()?.set_item(STORAGE_KEY, theme.class_name())?;
    Ok(())
}

pub fn apply_to_document(theme: Theme) -> Result<(), SiteError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SiteError::Dom("document is not available".to_string()))?;
    let root = document
        .document_element()
        .ok_or_else(|| SiteError::Dom("document has no root element".to_string()))?;

    let classes = root.class_list();
    for other in Theme::ALL {
        classes.remove_1(other.class_name())?;
    }
    classes.add_1(theme.class_name())?;

    if let Some(favicon) = document
        .get_element_by_id("favicon")
        .and_then(|el| el.dyn_into::<HtmlLinkElement>().ok())
    {
        favicon.set_href(theme.favicon_href());
    }
    Ok(())
}

/// Restores the saved theme before the first render.
pub fn initialize() -> Theme {
    let saved = match local_storage() {
        Ok(storage) => storage.get_item(STORAGE_KEY).ok().flatten(),
        Err(e) => {
            warn!("Falling back to default theme: {}", e);
            None
        }
    };
    let (theme, rewrite) = resolve_saved(saved.as_deref());
    if rewrite {
        if let Err(e) = persist(theme) {
            warn!("Could not store theme: {}", e);
        }
    }
    store().set(theme);
    if let Err(e) = apply_to_document(theme) {
        warn!("Could not apply theme: {}", e);
    }
    info!("Theme initialized to {}", theme);
    theme
}

pub fn switch_theme(theme: Theme) {
    if !store().set(theme) {
        return;
    }
    info!("Switching theme to {}", theme);
    if let Err(e) = apply_to_document(theme) {
        warn!("Could not apply theme: {}", e);
    }
    if let Err(e) = persist(theme) {
        warn!("Could not store theme: {}", e);
    }
}

/// Current theme; the calling component re-renders whenever it changes.
#[hook]
pub fn use_theme() -> Theme {
    let theme = use_state_eq(|| store().get());
    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |_| {
                // Catch a switch that landed between render and effect.
                theme.set(store().get());
                let subscription = store().subscribe(move |next| theme.set(next));
                move || drop(subscription)
            },
            (),
        );
    }
    *theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_themes() {
        for theme in Theme::ALL {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
        assert!(matches!(
            "blue".parse::<Theme>(),
            Err(SiteError::UnknownTheme(name)) if name == "blue"
        ));
    }

    #[test]
    fn saved_value_resolution() {
        assert_eq!(resolve_saved(Some("yellow")), (Theme::Yellow, false));
        assert_eq!(resolve_saved(Some("purple")), (Theme::Dark, true));
        assert_eq!(resolve_saved(None), (Theme::Dark, true));
    }

    #[test]
    fn favicon_follows_darkness() {
        assert_eq!(Theme::Dark.favicon_href(), "/favicon-dark.svg");
        assert_eq!(Theme::Yellow.favicon_href(), "/favicon-light.svg");
        assert_eq!(Theme::Light.favicon_href(), "/favicon-light.svg");
    }

    #[test]
    fn subscribers_hear_changes_in_order() {
        let store = ThemeStore::new(Theme::Dark);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let seen = seen.clone();
            store.subscribe(move |t| seen.borrow_mut().push(("first", t)))
        };
        let _second = {
            let seen = seen.clone();
            store.subscribe(move |t| seen.borrow_mut().push(("second", t)))
        };

        assert!(store.set(Theme::Yellow));
        assert!(!store.set(Theme::Yellow));
        drop(first);
        assert!(store.set(Theme::Light));

        assert_eq!(
            *seen.borrow(),
            vec![
                ("first", Theme::Yellow),
                ("second", Theme::Yellow),
                ("second", Theme::Light),
            ]
        );
        assert_eq!(store.get(), Theme::Light);
    }

    #[test]
    fn listener_may_unsubscribe_itself() {
        let store = ThemeStore::new(Theme::Light);
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let slot = slot.clone();
            let calls = calls.clone();
            store.subscribe(move |_| {
                calls.set(calls.get() + 1);
                slot.borrow_mut().take();
            })
        };
        *slot.borrow_mut() = Some(subscription);

        store.set(Theme::Dark);
        store.set(Theme::Yellow);
        assert_eq!(calls.get(), 1);
    }
}

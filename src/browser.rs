//! Browser collaborators and listener wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the controller to `localStorage`, `matchMedia`, and the page's
//! `<html>` and toggle elements, then attaches the click and scheme-change
//! listeners. Compiled only with the `hydrate` feature.
//!
//! TRADE-OFFS
//! ==========
//! Missing browser capabilities degrade silently (logged at debug or warn).
//! The only hard failure is a page with no window, document, or root element,
//! where there is nothing to theme.
//!
//! The module start installs with the default config before page scripts can
//! call `initThemeWithConfig`. Overrides such as a custom storage key
//! therefore replace an already-applied default theme.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::WasmClosure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MediaQueryList, MediaQueryListEvent, Storage, Window};

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::host::{PreferenceStore, SystemScheme, ThemeRoot, ToggleControl};
use crate::theme::Theme;

type BrowserController = ThemeController<LocalStorageStore, MediaQueryScheme, DomRoot, DomToggle>;

thread_local! {
    static ACTIVE: RefCell<Option<ThemeHandle>> = const { RefCell::new(None) };
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn dom_error(err: JsValue) -> ThemeError {
    ThemeError::Dom(js_error(err))
}

fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

// =============================================================
// Collaborators
// =============================================================

/// `window.localStorage`, if the page may use it.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("theme: localStorage blocked: {}", js_error(err));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let storage = self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)?;
        storage.get_item(key).map_err(|err| ThemeError::Storage(js_error(err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        let storage = self.storage.as_ref().ok_or(ThemeError::StorageUnavailable)?;
        storage.set_item(key, value).map_err(|err| ThemeError::Storage(js_error(err)))
    }
}

/// `window.matchMedia(dark_query)`, if the browser provides it.
pub struct MediaQueryScheme {
    list: Option<MediaQueryList>,
}

impl MediaQueryScheme {
    #[must_use]
    pub fn from_window(window: &Window, query: &str) -> Self {
        if !has_property(window, "matchMedia") {
            log::debug!("theme: matchMedia unsupported");
            return Self { list: None };
        }
        let list = match window.match_media(query) {
            Ok(list) => list,
            Err(err) => {
                log::debug!("theme: matchMedia({query}) failed: {}", js_error(err));
                None
            }
        };
        Self { list }
    }

    /// The list to subscribe to, when it supports `change` listeners.
    fn change_target(&self) -> Option<EventTarget> {
        if !self.supports_change_events() {
            return None;
        }
        self.list.clone().map(EventTarget::from)
    }
}

impl SystemScheme for MediaQueryScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.list.as_ref().map(MediaQueryList::matches)
    }

    fn supports_change_events(&self) -> bool {
        self.list.as_ref().is_some_and(|list| has_property(list, "addEventListener"))
    }
}

/// `document.documentElement`.
pub struct DomRoot {
    element: Element,
}

impl ThemeRoot for DomRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element.set_attribute(name, value).map_err(dom_error)
    }
}

/// The toggle button found by id.
pub struct DomToggle {
    element: Element,
}

impl ToggleControl for DomToggle {
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element.set_attribute(name, value).map_err(dom_error)
    }

    fn set_glyph(&mut self, selector: &str, glyph: &str) -> Result<bool, ThemeError> {
        let Some(icon) = self.element.query_selector(selector).map_err(dom_error)? else {
            return Ok(false);
        };
        icon.set_text_content(Some(glyph));
        Ok(true)
    }
}

// =============================================================
// Listeners
// =============================================================

/// An attached DOM listener; detached again on drop.
struct Listener<F: ?Sized + WasmClosure> {
    target: EventTarget,
    event: &'static str,
    closure: Closure<F>,
}

impl<F: ?Sized + WasmClosure> Listener<F> {
    fn attach(target: EventTarget, event: &'static str, closure: Closure<F>) -> Option<Self> {
        match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self { target, event, closure }),
            Err(err) => {
                log::warn!("theme: failed to attach {event} listener: {}", js_error(err));
                None
            }
        }
    }
}

impl<F: ?Sized + WasmClosure> Drop for Listener<F> {
    fn drop(&mut self) {
        if let Err(err) =
            self.target.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("theme: failed to detach {} listener: {}", self.event, js_error(err));
        }
    }
}

fn click_listener(controller: &Rc<RefCell<BrowserController>>, toggle: Element) -> Option<Listener<dyn FnMut(Event)>> {
    let controller = Rc::clone(controller);
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        let Ok(mut controller) = controller.try_borrow_mut() else {
            log::warn!("theme: toggle click ignored, controller busy");
            return;
        };
        controller.on_toggle_click();
    }) as Box<dyn FnMut(Event)>);
    Listener::attach(EventTarget::from(toggle), "click", closure)
}

fn scheme_listener(
    controller: &Rc<RefCell<BrowserController>>,
    target: EventTarget,
) -> Option<Listener<dyn FnMut(MediaQueryListEvent)>> {
    let controller = Rc::clone(controller);
    let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
        let Ok(mut controller) = controller.try_borrow_mut() else {
            log::warn!("theme: scheme change ignored, controller busy");
            return;
        };
        controller.on_system_change(event.matches());
    }) as Box<dyn FnMut(MediaQueryListEvent)>);
    Listener::attach(target, "change", closure)
}

// =============================================================
// Install
// =============================================================

/// A controller bound to the live page, with its listeners.
///
/// Dropping the handle detaches the listeners.
pub struct ThemeHandle {
    controller: Rc<RefCell<BrowserController>>,
    click: Option<Listener<dyn FnMut(Event)>>,
    scheme_change: Option<Listener<dyn FnMut(MediaQueryListEvent)>>,
}

impl ThemeHandle {
    /// Theme currently on the root element.
    #[must_use]
    pub fn current_theme(&self) -> Option<Theme> {
        match self.controller.try_borrow() {
            Ok(controller) => controller.current_theme(),
            Err(_) => None,
        }
    }

    #[must_use]
    pub fn listens_for_clicks(&self) -> bool {
        self.click.is_some()
    }

    #[must_use]
    pub fn listens_for_scheme_changes(&self) -> bool {
        self.scheme_change.is_some()
    }
}

/// Resolve and apply the initial theme, then attach listeners.
///
/// # Errors
///
/// Returns [`ThemeError::Dom`] when the page has no window, document, or
/// root element.
pub fn install(config: ThemeConfig) -> Result<ThemeHandle, ThemeError> {
    let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".to_owned()))?;
    let document = window.document().ok_or_else(|| ThemeError::Dom("no document".to_owned()))?;
    let root = document
        .document_element()
        .ok_or_else(|| ThemeError::Dom("no document element".to_owned()))?;
    let toggle = document.get_element_by_id(&config.toggle_id);

    let store = LocalStorageStore::from_window(&window);
    let scheme = MediaQueryScheme::from_window(&window, &config.dark_query);
    let change_target = scheme.change_target();

    let mut controller = ThemeController::new(
        config,
        store,
        scheme,
        DomRoot { element: root },
        toggle.clone().map(|element| DomToggle { element }),
    );
    controller.initialize();
    let controller = Rc::new(RefCell::new(controller));

    let click = toggle.and_then(|element| click_listener(&controller, element));
    let scheme_change = match change_target {
        Some(target) => scheme_listener(&controller, target),
        None => {
            log::debug!("theme: scheme change events unsupported");
            None
        }
    };

    Ok(ThemeHandle { controller, click, scheme_change })
}

/// Install and keep the handle alive for the page lifetime, replacing (and
/// detaching) any earlier install.
fn activate(config: ThemeConfig) -> bool {
    match install(config) {
        Ok(handle) => {
            log::debug!(
                "theme: installed (click listener: {}, scheme listener: {})",
                handle.listens_for_clicks(),
                handle.listens_for_scheme_changes()
            );
            ACTIVE.with(|active| *active.borrow_mut() = Some(handle));
            true
        }
        Err(err) => {
            log::warn!("theme: install failed: {err}");
            false
        }
    }
}

// =============================================================
// Entry points
// =============================================================

/// Module start: logging, then install with the default config.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("theme: logger already installed: {err}");
    }
    activate(ThemeConfig::default());
}

/// Reinstall with JSON overrides (see [`ThemeConfig`]). Returns whether the
/// controller is now installed.
///
/// `start` has already themed the page with the default config by the time
/// this runs, so a custom `storage_key` takes effect only from this call on.
#[wasm_bindgen(js_name = initThemeWithConfig)]
pub fn init_theme_with_config(config_json: &str) -> bool {
    match ThemeConfig::from_json(config_json) {
        Ok(config) => activate(config),
        Err(err) => {
            log::warn!("theme: {err}");
            false
        }
    }
}

/// The active theme string, if installed.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    ACTIVE.with(|active| {
        let Ok(active) = active.try_borrow() else {
            return None;
        };
        active
            .as_ref()
            .and_then(ThemeHandle::current_theme)
            .map(|theme| theme.as_str().to_owned())
    })
}

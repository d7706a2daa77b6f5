// src/web/mod.rs
//! Browser bindings: `web_sys` implementations of the document, storage and
//! location capabilities, plus the exported entry points.

use crate::app::{I18n, UiEvent};
use crate::core::config::Config;
use crate::dom::{Document, DomError, DomResult};
use crate::i18n::HttpSource;
use crate::state::{Location, SessionStorage, StateError};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn write_error(target: &str, value: JsValue) -> DomError {
    DomError::Write {
        target: target.to_string(),
        message: describe(&value),
    }
}

// =====================================================
// DOCUMENT
// =====================================================

pub struct WebDocument {
    document: web_sys::Document,
    root: web_sys::Element,
}

impl WebDocument {
    /// `None` for a document without a root element.
    pub fn new(document: web_sys::Document) -> Option<Self> {
        let root = document.document_element()?;
        Some(Self { document, root })
    }
}

impl Document for WebDocument {
    type Node = web_sys::Element;

    // `build` refuses documents without a root element, so this is always set.
    fn root(&self) -> web_sys::Element {
        self.root.clone()
    }

    fn query_all(&self, attribute: &str) -> Vec<web_sys::Element> {
        let Ok(list) = self
            .document
            .query_selector_all(&format!("[{}]", attribute))
        else {
            return Vec::new();
        };

        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect()
    }

    fn closest(&self, node: &web_sys::Element, attribute: &str) -> Option<web_sys::Element> {
        node.closest(&format!("[{}]", attribute)).ok().flatten()
    }

    fn text(&self, node: &web_sys::Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn set_text(&self, node: &web_sys::Element, text: &str) -> DomResult<()> {
        node.set_text_content(Some(text));
        Ok(())
    }

    fn attribute(&self, node: &web_sys::Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &web_sys::Element, name: &str, value: &str) -> DomResult<()> {
        node.set_attribute(name, value)
            .map_err(|e| write_error(name, e))
    }

    fn remove_attribute(&self, node: &web_sys::Element, name: &str) -> DomResult<()> {
        node.remove_attribute(name).map_err(|e| write_error(name, e))
    }

    fn value(&self, node: &web_sys::Element) -> Option<String> {
        node.dyn_ref::<web_sys::HtmlSelectElement>()
            .map(|select| select.value())
    }

    fn set_value(&self, node: &web_sys::Element, value: &str) -> DomResult<()> {
        if let Some(select) = node.dyn_ref::<web_sys::HtmlSelectElement>() {
            select.set_value(value);
        }
        Ok(())
    }

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&self, title: &str) -> DomResult<()> {
        self.document.set_title(title);
        Ok(())
    }
}

// =====================================================
// SESSION STORAGE
// =====================================================

/// `window.sessionStorage`, or nothing when the browser refuses access.
pub struct WebStorage {
    storage: Option<web_sys::Storage>,
}

impl WebStorage {
    pub fn new(window: &web_sys::Window) -> Self {
        Self {
            storage: window.session_storage().ok().flatten(),
        }
    }
}

impl SessionStorage for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StateError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StateError::Storage("sessionStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| StateError::Storage(describe(&e)))
    }
}

// =====================================================
// LOCATION
// =====================================================

pub struct WebLocation {
    window: web_sys::Window,
}

impl WebLocation {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Location for WebLocation {
    fn href(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }

    fn replace(&self, path_query_hash: &str) -> Result<(), StateError> {
        let history = self
            .window
            .history()
            .map_err(|e| StateError::History(describe(&e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(path_query_hash))
            .map_err(|e| StateError::History(describe(&e)))
    }
}

// =====================================================
// ENTRY POINTS
// =====================================================

pub type BrowserI18n = I18n<WebDocument, HttpSource, WebStorage, WebLocation>;

thread_local! {
    static INSTANCE: RefCell<Option<Rc<BrowserI18n>>> = RefCell::new(None);
}

fn instance() -> Option<Rc<BrowserI18n>> {
    INSTANCE.with(|cell| cell.borrow().clone())
}

/// Calls `window.updateThemeLabel()` when the page defines it.
fn call_page_hook(window: &web_sys::Window) {
    let Ok(value) = js_sys::Reflect::get(window, &JsValue::from_str("updateThemeLabel")) else {
        return;
    };
    if let Ok(function) = value.dyn_into::<js_sys::Function>() {
        if let Err(e) = function.call0(window) {
            log::warn!("updateThemeLabel failed: {}", describe(&e));
        }
    }
}

pub fn build(config: &Config) -> Result<BrowserI18n, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let page = WebDocument::new(document)
        .ok_or_else(|| JsValue::from_str("document has no root element"))?;

    let origin = window.location().origin()?;
    let source = match config.dictionaries.base_url.as_deref() {
        Some(base) => HttpSource::new(base),
        None => HttpSource::new(&origin),
    }
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let hook_window = window.clone();
    Ok(I18n::new(
        config,
        page,
        source,
        WebStorage::new(&window),
        WebLocation::new(window),
    )
    .with_hook(move |_| call_page_hook(&hook_window)))
}

/// One delegated click listener on the document, one change listener on the
/// select control if the page has one.
pub fn attach(i18n: &Rc<BrowserI18n>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let on_click = {
        let i18n = Rc::clone(i18n);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            else {
                return;
            };
            if i18n.switch_target(&target).is_none() {
                return;
            }
            event.prevent_default();

            let i18n = Rc::clone(&i18n);
            wasm_bindgen_futures::spawn_local(async move {
                i18n.handle_event(UiEvent::Click { target }).await;
            });
        })
    };
    document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    if let Some(select) = i18n.document().query_first(&i18n.markers().select) {
        let on_change = {
            let i18n = Rc::clone(i18n);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                let i18n = Rc::clone(&i18n);
                wasm_bindgen_futures::spawn_local(async move {
                    i18n.handle_event(UiEvent::SelectChanged).await;
                });
            })
        };
        select.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
    }

    Ok(())
}

fn launch(config: Config) -> Result<(), JsValue> {
    let level = crate::output::logging::level_filter(&config.log_level);
    if let Err(e) = crate::output::logging::init(level) {
        log::debug!("Logger already installed: {}", e);
    }

    let i18n = Rc::new(build(&config)?);
    INSTANCE.with(|cell| *cell.borrow_mut() = Some(Rc::clone(&i18n)));

    wasm_bindgen_futures::spawn_local(async move {
        i18n.init().await;
        if let Err(e) = attach(&i18n) {
            log::error!("[i18n] could not attach listeners: {}", describe(&e));
        }
    });
    Ok(())
}

/// Starts with the built-in configuration.
#[wasm_bindgen(js_name = startI18n)]
pub fn start() -> Result<(), JsValue> {
    launch(Config::default())
}

/// Starts with a TOML configuration string.
#[wasm_bindgen(js_name = startI18nWithConfig)]
pub fn start_with_config(toml: &str) -> Result<(), JsValue> {
    let config = Config::from_toml_str(toml).map_err(|e| JsValue::from_str(&e.to_string()))?;
    launch(config)
}

#[wasm_bindgen(js_name = setLangFromMenu)]
pub fn set_lang_from_menu(lang: String) {
    if let Some(i18n) = instance() {
        wasm_bindgen_futures::spawn_local(async move {
            i18n.set_lang_from_menu(&lang).await;
        });
    }
}

/// Reads a translated string outside the marker-driven flow.
#[wasm_bindgen(js_name = i18nGet)]
pub fn i18n_get(key: &str) -> Option<String> {
    instance().and_then(|i18n| i18n.get(key))
}

//! Browser bindings: find page anchors, attach listeners, write state back.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once on page-ready, scheduled by [`crate::start`]. Each widget module exposes a
//! `mount` that returns `false` when its anchors are missing, in which case
//! nothing is attached. Listener closures live for the page's lifetime and
//! are leaked with `Closure::forget`.

pub mod contact;
pub mod expandable;
pub mod greeting;
pub mod skills;
pub mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget};

use crate::config::{CONFIG_ELEMENT_ID, PortfolioConfig};
use crate::page::{PageKind, Widget, mount_plan};

/// Run [`boot`] now, or on `DOMContentLoaded` if the document is still loading.
pub fn boot_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; portfolio widgets not mounted");
        return;
    };
    if document.ready_state() == "loading" {
        listen(&document, "DOMContentLoaded", |_event| boot());
    } else {
        boot();
    }
}

/// Mount every widget for the current page.
pub fn boot() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document; portfolio widgets not mounted");
        return;
    };
    let config = load_config(&document);
    let pages = document
        .body()
        .map_or_else(|| vec![PageKind::Other], |body| PageKind::from_body_class(&body.class_name()));
    log::debug!("booting portfolio widgets for {pages:?}");

    for widget in mount_plan(&pages) {
        let mounted = match widget {
            Widget::Theme => theme::mount(&document, &config.theme),
            Widget::Greeting => greeting::mount(&document, &config.greeting),
            Widget::ExpandableText => expandable::mount(&document, &config.expandable),
            Widget::SkillPanel => skills::mount(&document, &config.skills),
            Widget::ContactForm => contact::mount(&document, &config.contact),
        };
        if mounted {
            log::debug!("{widget:?} mounted");
        } else {
            log::debug!("{widget:?} skipped: anchors missing");
        }
    }
}

fn load_config(document: &Document) -> PortfolioConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PortfolioConfig::default();
    };
    match PortfolioConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("loaded page config overrides from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
            PortfolioConfig::default()
        }
    }
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("bad selector {selector}: {err:?}");
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// First element matching `selector`, if any.
pub(crate) fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::warn!("bad selector {selector}: {err:?}");
            None
        }
    }
}

/// Attach `handler` to `target` for `event` and leak it for the page lifetime.
pub(crate) fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    warn_on_err(
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()),
        event,
    );
    closure.forget();
}

/// Log a failed DOM call. DOM writes are best-effort.
pub(crate) fn warn_on_err(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}

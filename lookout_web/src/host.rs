// Copyright 2025 the Lookout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use js_sys::{Function, Reflect};
use kurbo::Rect;
use lookout_viewport::{Host, MediaQueryList, Probe};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Node, Window};

/// [`Host`] over a browser window and its document.
///
/// The root element is looked up on every read, so documents that replace
/// `document.documentElement` are measured correctly.
#[derive(Clone)]
pub struct WebHost {
    window: Window,
}

impl fmt::Debug for WebHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebHost { .. }")
    }
}

impl WebHost {
    /// Creates a host for `window`.
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Creates a host for the global `window`, if there is one.
    ///
    /// Workers and other window-less contexts return `None`.
    pub fn from_global() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    /// Creates a [`Probe`] for the global `window`, resolving its measurement
    /// strategy now.
    pub fn probe() -> Option<Probe<Self>> {
        Self::from_global().map(Probe::new)
    }

    /// Returns the wrapped window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    fn root(&self) -> Option<Element> {
        self.window.document()?.document_element()
    }

    fn root_number(&self, name: &str) -> Option<f64> {
        number_property(&self.root()?, name)
    }
}

/// Reads `target[name]` as a number, treating absence and exceptions alike.
fn number_property(target: &JsValue, name: &str) -> Option<f64> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
}

/// Evaluates `Modernizr.mq(query)` if Modernizr is loaded.
fn modernizr_mq(window: &Window, query: &str) -> Option<bool> {
    let modernizr = Reflect::get(window, &JsValue::from_str("Modernizr")).ok()?;
    if modernizr.is_undefined() || modernizr.is_null() {
        return None;
    }
    let mq = Reflect::get(&modernizr, &JsValue::from_str("mq"))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    let result = mq.call1(&modernizr, &JsValue::from_str(query)).ok()?;
    Some(result.as_bool().unwrap_or(false))
}

impl Host for WebHost {
    type Node = Node;

    fn inner_width(&self) -> f64 {
        number_property(&self.window, "innerWidth").unwrap_or(f64::NAN)
    }

    fn inner_height(&self) -> f64 {
        number_property(&self.window, "innerHeight").unwrap_or(f64::NAN)
    }

    fn client_width(&self) -> f64 {
        self.root_number("clientWidth").unwrap_or(f64::NAN)
    }

    fn client_height(&self) -> f64 {
        self.root_number("clientHeight").unwrap_or(f64::NAN)
    }

    fn page_x_offset(&self) -> Option<f64> {
        number_property(&self.window, "pageXOffset")
    }

    fn page_y_offset(&self) -> Option<f64> {
        number_property(&self.window, "pageYOffset")
    }

    fn scroll_left(&self) -> f64 {
        self.root_number("scrollLeft").unwrap_or(f64::NAN)
    }

    fn scroll_top(&self) -> f64 {
        self.root_number("scrollTop").unwrap_or(f64::NAN)
    }

    fn bounding_client_rect(&self, node: &Node) -> Option<Rect> {
        if node.node_type() != Node::ELEMENT_NODE {
            return None;
        }
        let rect = node.dyn_ref::<Element>()?.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom()))
    }

    fn match_media(&self, query: &str) -> Option<MediaQueryList> {
        // Throws when `matchMedia` is missing; older engines also return null.
        let list = self.window.match_media(query).ok().flatten()?;
        Some(MediaQueryList::new(list.media(), list.matches()))
    }

    fn fallback_media_query(&self, query: &str) -> Option<bool> {
        let matches = modernizr_mq(&self.window, query);
        if matches.is_some() {
            log::trace!("evaluated {query:?} with Modernizr.mq");
        }
        matches
    }
}

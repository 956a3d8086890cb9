//! Thin helpers over `web_sys` shared by the widget bindings.

use crate::error::PageError;
use crate::render::Surface;
use crate::timer::defer;
use coastline_shared::markup::{class, data, selector};
use coastline_shared::{Section, SummaryField};
use coastline_widgets::PageProbe;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, ScrollBehavior, ScrollIntoViewOptions, Window};

/// Attach `handler` for the page's lifetime
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// All elements matching `selector`, in document order
pub fn query_all(root: &impl AsQueryRoot, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_root_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Typed lookup by id; `None` when absent or of another element type
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Value of the `<input>` with this id, empty when absent
pub fn input_value(document: &Document, id: &str) -> String {
    by_id::<web_sys::HtmlInputElement>(document, id)
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn set_class(element: &Element, name: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(name, on) {
        tracing::warn!("Failed to toggle class {}: {:?}", name, e);
    }
}

/// `Document` and `Element` both answer `querySelectorAll`
pub trait AsQueryRoot {
    fn query_root_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue>;
}

impl AsQueryRoot for Document {
    fn query_root_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

impl AsQueryRoot for Element {
    fn query_root_all(&self, selector: &str) -> Result<web_sys::NodeList, JsValue> {
        self.query_selector_all(selector)
    }
}

/// [`PageProbe`] over the live document
pub struct DomProbe<'a> {
    document: &'a Document,
}

impl<'a> DomProbe<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }
}

impl PageProbe for DomProbe<'_> {
    fn exists(&self, selector: &str) -> bool {
        matches!(self.document.query_selector(selector), Ok(Some(_)))
    }

    fn count(&self, selector: &str) -> usize {
        self.document
            .query_selector_all(selector)
            .map(|nodes| nodes.length() as usize)
            .unwrap_or(0)
    }

    fn child_count(&self, selector: &str) -> usize {
        match self.document.query_selector(selector) {
            Ok(Some(element)) => element.child_element_count() as usize,
            _ => 0,
        }
    }
}

/// [`Surface`] that writes to the document
#[derive(Clone)]
pub struct DomSurface {
    window: Window,
    document: Document,
    origin: Option<Element>,
}

impl DomSurface {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            origin: None,
        }
    }

    /// The element whose click is being handled. Transport marks land on it alone.
    pub fn set_origin(&mut self, element: Element) {
        self.origin = Some(element);
    }
}

impl Surface for DomSurface {
    fn set_visible(&mut self, section: Section, visible: bool) {
        if let Some(element) = self.document.get_element_by_id(section.element_id()) {
            set_class(&element, class::HIDDEN, !visible);
        }
    }

    fn scroll_to(&mut self, section: Section, after: Duration) {
        let document = self.document.clone();
        defer(after, move || {
            if let Some(element) = document.get_element_by_id(section.element_id()) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }

    fn set_text(&mut self, field: SummaryField, text: &str) {
        if let Some(element) = self.document.get_element_by_id(field.element_id()) {
            element.set_text_content(Some(text));
        }
    }

    fn highlight_summary(&mut self) {
        if let Ok(Some(card)) = self.document.query_selector(selector::SUMMARY_CARD) {
            set_class(&card, class::HIGHLIGHT, true);
        }
    }

    fn mark_transport(&mut self, key: &str, selected: bool) {
        let attribute = format!("data-{}", data::TRANSPORT_KEY);
        match self.origin.take() {
            Some(option) if option.get_attribute(&attribute).as_deref() == Some(key) => {
                set_class(&option, class::SELECTED, selected);
            }
            _ => tracing::warn!(key, "Transport toggled without its option element"),
        }
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!("Failed to show notice: {:?}", e);
        }
    }

    fn reload(&mut self) {
        if let Err(e) = self.window.location().reload() {
            tracing::warn!("Failed to reload page: {:?}", e);
        }
    }
}

//! Browser platform layer
//!
//! Mirrors engine state into the DOM and feeds browser events back in.
//! Setup is fallible and returns `PlatformError`; per-frame writes ignore
//! individual DOM failures.

pub mod cards;
pub mod page;
pub mod spotlight;
pub mod trail;

pub use cards::CardView;
pub use page::PageText;
pub use spotlight::SpotlightView;
pub use trail::TrailView;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::fx::CardRect;
use crate::renderer::RenderError;

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("element {0} is not a {1}")]
    WrongElementType(String, &'static str),
    #[error("GPU init failed: {0}")]
    Gpu(String),
}

impl From<RenderError> for PlatformError {
    fn from(e: RenderError) -> Self {
        PlatformError::Gpu(e.to_string())
    }
}

pub fn window() -> Result<Window, PlatformError> {
    web_sys::window().ok_or(PlatformError::NoWindow)
}

pub fn document() -> Result<Document, PlatformError> {
    window()?.document().ok_or(PlatformError::NoDocument)
}

/// Look up an element by id and cast it to `T`
pub fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    type_name: &'static str,
) -> Result<T, PlatformError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| PlatformError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| PlatformError::WrongElementType(id.to_string(), type_name))
}

/// All elements matching `selector`, skipping anything that is not an element
pub fn query_all(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Bounding box in viewport coordinates
pub fn client_rect(el: &Element) -> CardRect {
    let r = el.get_bounding_client_rect();
    CardRect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

pub fn pointer_client(ev: &web_sys::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

//! Spotlight overlay element

use web_sys::{Document, HtmlElement};

use super::{PlatformError, element_by_id, set_style};
use crate::fx::{SpotlightConfig, SpotlightState};

pub const SPOTLIGHT_ID: &str = "spotlight";

/// The fixed, pointer-following light element
pub struct SpotlightView {
    element: HtmlElement,
}

impl SpotlightView {
    pub fn new(document: &Document, config: &SpotlightConfig) -> Result<Self, PlatformError> {
        let element: HtmlElement = element_by_id(document, SPOTLIGHT_ID, "HtmlElement")?;
        let diameter = format!("{}px", config.radius * 2.0);
        set_style(&element, "width", &diameter);
        set_style(&element, "height", &diameter);
        set_style(
            &element,
            "background",
            &format!(
                "radial-gradient(circle, {} 0%, transparent 70%)",
                config.color.css_rgba(0.2)
            ),
        );
        set_style(&element, "opacity", "0");
        Ok(Self { element })
    }

    pub fn apply(&self, state: SpotlightState) {
        set_style(
            &self.element,
            "transform",
            &format!(
                "translate({:.1}px, {:.1}px) translate(-50%, -50%)",
                state.position.x, state.position.y
            ),
        );
        set_style(&self.element, "opacity", &format!("{:.3}", state.opacity));
    }

    pub fn hide(&self) {
        set_style(&self.element, "opacity", "0");
    }
}

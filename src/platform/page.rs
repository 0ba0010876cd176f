//! Text, views and small widgets
//!
//! Everything on the page that is not pointer-reactive: translated copy,
//! the typewriter line, the marquee strip, the hero avatar and entrance,
//! the copy-email button, outbound links and which route view is visible.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{query_all, set_style};
use crate::clipboard::{GITHUB_URL, LINKEDIN_URL};
use crate::fx::{AvatarState, AvatarStatus, StaggerReveal, TECH_ITEMS};
use crate::i18n::Language;
use crate::router::Route;

const I18N_ATTR: &str = "data-i18n";
const LANG_ATTR: &str = "data-lang";
pub const TYPEWRITER_ID: &str = "typewriter-text";
pub const COPY_LABEL_ID: &str = "copy-email-label";
pub const COPY_BUTTON_ID: &str = "copy-email";
const MARQUEE_GROUP_SELECTOR: &str = ".marquee-group";
const ROUTE_ATTR: &str = "data-route";
const GITHUB_LINK_ID: &str = "github-link";
const LINKEDIN_LINK_ID: &str = "linkedin-link";
const AVATAR_ID: &str = "avatar";
const AVATAR_BORDER_SELECTOR: &str = "#avatar .avatar-border";
const AVATAR_DOT_SELECTOR: &str = "#avatar .avatar-dot";
const AVATAR_RING_SELECTOR: &str = "#avatar .avatar-ring";
pub const REVEAL_SELECTOR: &str = ".reveal";
const ACTIVE_CLASS: &str = "active";
const HIDDEN_CLASS: &str = "hidden";

pub struct PageText {
    root: Option<Element>,
    translated: Vec<(Element, String)>,
    lang_buttons: Vec<(Element, Language)>,
    marquee_groups: Vec<HtmlElement>,
    views: Vec<(Route, Element)>,
    typewriter: Option<Element>,
    copy_label: Option<Element>,
    /// Last typewriter text written
    typed: String,
    avatar: Option<AvatarNodes>,
    /// Hero items in entrance order
    reveal_items: Vec<HtmlElement>,
}

struct AvatarNodes {
    root: HtmlElement,
    border: HtmlElement,
    dot: HtmlElement,
    ring: HtmlElement,
}

impl AvatarNodes {
    fn find(document: &Document) -> Option<Self> {
        Some(Self {
            root: document.get_element_by_id(AVATAR_ID)?.dyn_into().ok()?,
            border: html_by_selector(document, AVATAR_BORDER_SELECTOR)?,
            dot: html_by_selector(document, AVATAR_DOT_SELECTOR)?,
            ring: html_by_selector(document, AVATAR_RING_SELECTOR)?,
        })
    }
}

impl PageText {
    pub fn new(document: &Document) -> Self {
        let translated = query_all(document, &format!("[{}]", I18N_ATTR))
            .into_iter()
            .filter_map(|el| {
                let key = el.get_attribute(I18N_ATTR)?;
                Some((el, key))
            })
            .collect();

        let lang_buttons = query_all(document, &format!("[{}]", LANG_ATTR))
            .into_iter()
            .filter_map(|el| {
                let lang = el.get_attribute(LANG_ATTR).and_then(|c| Language::from_str(&c))?;
                let _ = el.set_attribute("aria-label", lang.switch_label());
                Some((el, lang))
            })
            .collect();

        for el in query_all(document, &format!("[{}]", ROUTE_ATTR)) {
            if let Some(name) = el.get_attribute(ROUTE_ATTR) {
                let _ = el.set_attribute("href", Route::from_hash(&name).as_hash());
            }
        }
        for (id, url) in [(GITHUB_LINK_ID, GITHUB_URL), (LINKEDIN_LINK_ID, LINKEDIN_URL)] {
            if let Some(el) = document.get_element_by_id(id) {
                let _ = el.set_attribute("href", url);
            }
        }

        let marquee_groups: Vec<HtmlElement> = query_all(document, MARQUEE_GROUP_SELECTOR)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect();
        for group in &marquee_groups {
            if group.child_element_count() == 0 {
                fill_marquee_group(document, group);
            }
        }

        let views = Route::ALL
            .iter()
            .filter_map(|&route| Some((route, document.get_element_by_id(route.view_id())?)))
            .collect();

        Self {
            root: document.document_element(),
            translated,
            lang_buttons,
            marquee_groups,
            views,
            typewriter: document.get_element_by_id(TYPEWRITER_ID),
            copy_label: document.get_element_by_id(COPY_LABEL_ID),
            typed: String::new(),
            avatar: AvatarNodes::find(document),
            reveal_items: query_all(document, REVEAL_SELECTOR)
                .into_iter()
                .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                .collect(),
        }
    }

    /// Number of hero items that take part in the entrance
    pub fn reveal_count(&self) -> usize {
        self.reveal_items.len()
    }

    /// Language buttons with the language each one selects
    pub fn lang_buttons(&self) -> impl Iterator<Item = (&Element, Language)> {
        self.lang_buttons.iter().map(|(el, lang)| (el, *lang))
    }

    pub fn apply_language(&self, language: Language) {
        let t = language.translations();
        for (el, key) in &self.translated {
            match t.lookup(key) {
                Some(text) => el.set_text_content(Some(text)),
                None => log::warn!("unknown translation key: {}", key),
            }
        }
        for (el, lang) in &self.lang_buttons {
            let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, *lang == language);
        }
        if let Some(root) = &self.root {
            let _ = root.set_attribute("lang", language.code());
        }
    }

    pub fn set_typed(&mut self, text: &str) {
        if self.typed == text {
            return;
        }
        self.typed.clear();
        self.typed.push_str(text);
        if let Some(el) = &self.typewriter {
            el.set_text_content(Some(text));
        }
    }

    pub fn set_copy_label(&self, label: &str, copied: bool) {
        if let Some(el) = &self.copy_label {
            el.set_text_content(Some(label));
            if let Some(button) = el.parent_element() {
                let _ = button.class_list().toggle_with_force("copied", copied);
            }
        }
    }

    pub fn set_marquee(&self, transform: &str) {
        for group in &self.marquee_groups {
            set_style(group, "transform", transform);
        }
    }

    /// Color the status dot and its pulse ring
    pub fn set_avatar_status(&self, status: AvatarStatus) {
        let Some(nodes) = &self.avatar else {
            return;
        };
        for el in [&nodes.dot, &nodes.ring] {
            for other in [AvatarStatus::Online, AvatarStatus::Away, AvatarStatus::Offline] {
                let _ = el
                    .class_list()
                    .toggle_with_force(other.color_class(), other == status);
            }
        }
    }

    pub fn set_avatar(&self, state: AvatarState) {
        let Some(nodes) = &self.avatar else {
            return;
        };
        set_style(&nodes.root, "transform", &format!("scale({:.3})", state.scale));
        set_style(&nodes.border, "opacity", &format!("{:.3}", state.border_opacity));
        set_style(&nodes.dot, "transform", &format!("scale({:.3})", state.dot_scale));
        set_style(&nodes.ring, "transform", &format!("scale({:.3})", state.ring_scale));
        set_style(&nodes.ring, "opacity", &format!("{:.3}", state.ring_opacity));
    }

    pub fn set_reveal(&self, reveal: &StaggerReveal) {
        for (i, el) in self.reveal_items.iter().enumerate() {
            let item = reveal.item(i);
            set_style(el, "opacity", &format!("{:.3}", item.opacity));
            set_style(el, "transform", &item.transform_css());
        }
    }

    pub fn show_route(&self, route: Route) {
        for (view, el) in &self.views {
            let _ = el.class_list().toggle_with_force(HIDDEN_CLASS, *view != route);
        }
    }
}

fn html_by_selector(document: &Document, selector: &str) -> Option<HtmlElement> {
    document.query_selector(selector).ok()??.dyn_into().ok()
}

/// Populate an empty marquee group with the tech stack items
fn fill_marquee_group(document: &Document, group: &HtmlElement) {
    for item in TECH_ITEMS {
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        span.set_class_name(item.color_class);
        span.set_text_content(Some(item.name));
        let _ = group.append_child(&span);
    }
}

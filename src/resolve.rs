//! The property resolver: every renderable property is computed through the
//! same layered chain — explicit node prop, then page-context field, then a
//! built-in default. Malformed values count as absent and fall through; the
//! chain never produces an error.

use crate::context::PageContext;
use crate::graph::Node;
use crate::props::{Color, EdgeInsets, PropBag};
use crate::widget::{Alignment, NavAction, StackDirection, TextAlign};

/// Built-in defaults, the last step of every fallback chain.
pub mod defaults {
    pub const HEADER_TEXT: &str = "Header";
    pub const BODY_TEXT: &str = "Body text";
    pub const BUTTON_LABEL: &str = "Continue";
    pub const INPUT_PLACEHOLDER: &str = "Enter text";

    pub const HEADER_FONT_SIZE: f64 = 28.0;
    /// Platform-standard reading size.
    pub const BODY_FONT_SIZE: f64 = 17.0;

    pub const STACK_SPACING: f64 = 8.0;
    pub const SPACER_HEIGHT: f64 = 16.0;
    pub const BUTTON_CORNER_RADIUS: f64 = 12.0;

    pub const SLIDER_MIN: f64 = 0.0;
    pub const SLIDER_MAX: f64 = 100.0;
    pub const SLIDER_STEP: f64 = 1.0;

    /// Reserved at the end of the scroll container when bottom-anchored
    /// overlays exist, so they do not occlude the final flow content.
    pub const BOTTOM_CLEARANCE: f64 = 96.0;
}

/// Resolves properties for one node against its page context.
pub struct Resolver<'a> {
    props: &'a PropBag,
    page: &'a PageContext,
}

impl<'a> Resolver<'a> {
    pub fn new(node: &'a Node, page: &'a PageContext) -> Resolver<'a> {
        Resolver {
            props: &node.props,
            page,
        }
    }

    // ─── Text content ────────────────────────────────────────────────────

    /// Header text: `text` prop → page title → "Header".
    pub fn header_text(&self) -> String {
        self.props
            .string("text")
            .or(self.page.title.as_deref())
            .unwrap_or(defaults::HEADER_TEXT)
            .to_string()
    }

    /// Body text: `text` prop → page subtitle → page title → "Body text".
    pub fn body_text(&self) -> String {
        self.props
            .string("text")
            .or(self.page.subtitle.as_deref())
            .or(self.page.title.as_deref())
            .unwrap_or(defaults::BODY_TEXT)
            .to_string()
    }

    pub fn button_label(&self) -> String {
        self.props
            .string("text")
            .unwrap_or(defaults::BUTTON_LABEL)
            .to_string()
    }

    /// Navigation label: `text` prop → a per-action default.
    pub fn nav_label(&self, action: NavAction) -> String {
        self.props
            .string("text")
            .unwrap_or(match action {
                NavAction::Back => "Back",
                NavAction::Next => "Next",
                NavAction::Finish => "Done",
            })
            .to_string()
    }

    /// The `action` prop of a navigation button. Anything other than
    /// `back`/`finish` (including absence) means `next`.
    pub fn nav_action(&self) -> NavAction {
        match self.props.string("action") {
            Some("back") => NavAction::Back,
            Some("finish") => NavAction::Finish,
            _ => NavAction::Next,
        }
    }

    // ─── Typography & color ──────────────────────────────────────────────

    pub fn font_size(&self, builtin: f64) -> f64 {
        self.props.number("fontSize").unwrap_or(builtin)
    }

    pub fn color(&self, key: &str) -> Option<Color> {
        self.props.color(key)
    }

    /// Text alignment defaults to leading.
    pub fn text_align(&self) -> TextAlign {
        match self.props.string("textAlign") {
            Some("center") => TextAlign::Center,
            Some("trailing") | Some("right") => TextAlign::Trailing,
            _ => TextAlign::Leading,
        }
    }

    // ─── Layout ──────────────────────────────────────────────────────────

    pub fn padding(&self) -> EdgeInsets {
        self.props.insets("padding").unwrap_or_default()
    }

    pub fn spacing(&self) -> f64 {
        self.props
            .number("spacing")
            .unwrap_or(defaults::STACK_SPACING)
    }

    pub fn direction(&self) -> StackDirection {
        match self.props.string("direction") {
            Some("horizontal") | Some("row") => StackDirection::Horizontal,
            _ => StackDirection::Vertical,
        }
    }

    pub fn alignment(&self) -> Alignment {
        match self.props.string("alignment") {
            Some("center") => Alignment::Center,
            Some("trailing") | Some("end") => Alignment::Trailing,
            _ => Alignment::Leading,
        }
    }

    pub fn corner_radius(&self) -> f64 {
        self.props
            .number("cornerRadius")
            .unwrap_or(defaults::BUTTON_CORNER_RADIUS)
    }

    pub fn dimension(&self, key: &str) -> Option<f64> {
        self.props.number(key)
    }

    pub fn spacer_height(&self) -> f64 {
        self.props
            .number("height")
            .unwrap_or(defaults::SPACER_HEIGHT)
    }

    // ─── Content & interactive ───────────────────────────────────────────

    pub fn icon(&self) -> Option<String> {
        self.props.string("icon").map(str::to_string)
    }

    /// Image URL: `url` prop → page image URL.
    pub fn image_url(&self) -> Option<String> {
        self.props
            .string("url")
            .map(str::to_string)
            .or_else(|| self.page.image_url.clone())
    }

    /// The user-input key: `key` prop → the page's `key` field.
    pub fn input_key(&self) -> Option<String> {
        self.props
            .string("key")
            .map(str::to_string)
            .or_else(|| self.page.key.clone())
    }

    pub fn placeholder(&self) -> String {
        self.props
            .string("placeholder")
            .or(self.page.placeholder.as_deref())
            .unwrap_or(defaults::INPUT_PLACEHOLDER)
            .to_string()
    }

    /// Select options: `options` prop → page options → empty.
    pub fn options(&self) -> Vec<String> {
        self.props
            .string_list("options")
            .unwrap_or_else(|| self.page.options.clone())
    }

    /// Slider bounds, each resolved independently through its own chain.
    pub fn slider_bounds(&self) -> (f64, f64, f64) {
        let min = self
            .props
            .number("min")
            .or(self.page.min)
            .unwrap_or(defaults::SLIDER_MIN);
        let max = self
            .props
            .number("max")
            .or(self.page.max)
            .unwrap_or(defaults::SLIDER_MAX);
        let step = self
            .props
            .number("step")
            .or(self.page.step)
            .unwrap_or(defaults::SLIDER_STEP);
        (min, max, step)
    }
}

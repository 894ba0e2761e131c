use serde::{Deserialize, Serialize};

use crate::graph::NodeId;
use crate::props::{Color, EdgeInsets};

/// Identifies one render pass. The host bumps the epoch whenever the active
/// page changes; results of asynchronous work started during an older pass
/// (image loads) are matched against it and dropped when stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageEpoch(pub u64);

/// Where a positioned root child is anchored.
///
/// `pagePosition` values other than `top`/`bottom` all collapse to
/// `Center`, which leaves room for future anchor names without breaking
/// older documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StackDirection {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Leading,
    Center,
    Trailing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Leading,
    Center,
    Trailing,
}

/// Distinguishes the two text registers so hosts can apply platform type
/// styles on top of the resolved size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextRole {
    Header,
    Body,
}

/// Navigation intent of a `NavigationButton`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavAction {
    Back,
    Next,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonRole {
    Primary,
    Navigation(NavAction),
}

/// One element of the render output. The tree is plain data: the host maps
/// it onto native views and owns all interaction and async loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Widget {
    Text {
        content: String,
        role: TextRole,
        font_size: f64,
        color: Option<Color>,
        align: TextAlign,
        padding: EdgeInsets,
    },
    /// A synchronous placeholder. The pixels arrive later via the host's
    /// image loader; see [`ImageUpdate`].
    Image {
        node_id: NodeId,
        url: Option<String>,
        width: Option<f64>,
        height: Option<f64>,
        corner_radius: f64,
    },
    Button {
        label: String,
        role: ButtonRole,
        background: Option<Color>,
        foreground: Option<Color>,
        corner_radius: f64,
        icon: Option<String>,
    },
    Stack {
        direction: StackDirection,
        alignment: Alignment,
        spacing: f64,
        padding: EdgeInsets,
        background: Option<Color>,
        children: Vec<Widget>,
    },
    Select {
        key: Option<String>,
        options: Vec<String>,
        selected: Option<String>,
    },
    Input {
        key: Option<String>,
        value: Option<String>,
        placeholder: String,
    },
    Slider {
        key: Option<String>,
        value: f64,
        min: f64,
        max: f64,
        step: f64,
    },
    Spacer {
        height: f64,
    },
    /// Rendered by dangling references, cycles, and childless unknown
    /// kinds. Composition drops it.
    Empty,
}

impl Widget {
    pub fn is_empty(&self) -> bool {
        matches!(self, Widget::Empty)
    }
}

/// A positioned root child, composited above the flow container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub anchor: Anchor,
    pub widget: Widget,
}

/// A one-shot "image arrived" notification from the host's loader.
/// Carries the epoch of the render pass that requested it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpdate {
    pub epoch: PageEpoch,
    pub node_id: NodeId,
}

/// The rendered page: flow content in a vertically scrolling container,
/// positioned overlays stacked above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub epoch: PageEpoch,
    /// Flow children in original document order.
    pub flow: Vec<Widget>,
    /// Positioned children in original document order.
    pub overlays: Vec<Overlay>,
    /// Space the scroll container reserves at its end so bottom-anchored
    /// overlays do not occlude the final flow content. Zero when there are
    /// no bottom overlays.
    pub bottom_clearance: f64,
}

impl Page {
    /// The fixed placeholder shown when the document cannot be parsed at
    /// all. This is the only user-visible failure mode.
    pub fn unable_to_render(epoch: PageEpoch) -> Page {
        Page {
            epoch,
            flow: vec![Widget::Text {
                content: "Unable to render custom layout".to_string(),
                role: TextRole::Body,
                font_size: crate::resolve::defaults::BODY_FONT_SIZE,
                color: None,
                align: TextAlign::Center,
                padding: EdgeInsets::default(),
            }],
            overlays: Vec::new(),
            bottom_clearance: 0.0,
        }
    }

    /// Whether a late image result belongs to this render pass. A stale
    /// update (from a page that is no longer displayed) is simply ignored.
    pub fn accepts_image(&self, update: &ImageUpdate) -> bool {
        update.epoch == self.epoch
    }

    pub fn has_bottom_overlay(&self) -> bool {
        self.overlays.iter().any(|o| o.anchor == Anchor::Bottom)
    }
}

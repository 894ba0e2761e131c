//! The tree renderer: walks a [`NodeGraph`] from `"ROOT"`, dispatches each
//! node to its kind's builder, and partitions root children into flow
//! content and page-anchored overlays.
//!
//! A render pass is a pure, synchronous function of the graph, the page
//! context, and the current input values: rendering twice with the same
//! inputs produces identical output, and nothing that goes wrong below the
//! root aborts rendering of sibling or ancestor nodes.

use std::collections::HashSet;
use tracing::warn;

use crate::context::{InputStore, PageContext};
use crate::error::LayoutError;
use crate::graph::{self, Node, NodeGraph, NodeId, ROOT_ID};
use crate::kind::ComponentKind;
use crate::resolve::{defaults, Resolver};
use crate::widget::{
    Anchor, ButtonRole, Overlay, Page, PageEpoch, StackDirection, TextRole, Widget,
};

/// Render a raw JSON document. This is the render-entry boundary: a parse
/// failure is absorbed into the fixed "unable to render" placeholder page,
/// never a panic or a blank screen.
pub fn render_document(
    json: &str,
    ctx: &PageContext,
    store: &dyn InputStore,
    epoch: PageEpoch,
) -> Page {
    match graph::parse_graph(json) {
        Ok(graph) => render_page(&graph, ctx, store, epoch),
        Err(err) => {
            warn!(error = %err, "custom layout did not parse; showing fallback");
            Page::unable_to_render(epoch)
        }
    }
}

/// Render a parsed graph into a page.
pub fn render_page(
    graph: &NodeGraph,
    ctx: &PageContext,
    store: &dyn InputStore,
    epoch: PageEpoch,
) -> Page {
    let renderer = Renderer { graph, ctx, store };
    let (flow_ids, positioned_ids) = partition_root_children(graph);

    // The path set starts with ROOT so a child referencing it back renders
    // empty instead of recursing.
    let mut path: HashSet<NodeId> = HashSet::new();
    path.insert(ROOT_ID.to_string());

    let flow: Vec<Widget> = flow_ids
        .iter()
        .map(|id| renderer.render_node(id, &mut path))
        .filter(|w| !w.is_empty())
        .collect();

    let overlays: Vec<Overlay> = positioned_ids
        .iter()
        .map(|(anchor, id)| (*anchor, renderer.render_node(id, &mut path)))
        .filter(|(_, w)| !w.is_empty())
        .map(|(anchor, widget)| Overlay { anchor, widget })
        .collect();

    let bottom_clearance = if overlays.iter().any(|o| o.anchor == Anchor::Bottom) {
        defaults::BOTTOM_CLEARANCE
    } else {
        0.0
    };

    Page {
        epoch,
        flow,
        overlays,
        bottom_clearance,
    }
}

/// Partition the root's children into flow ids and positioned ids.
///
/// A child is positioned exactly when its `pagePosition` prop is present
/// (`top`, `bottom`, anything else means center); all other children are
/// flow. The union of both lists is the original children with no
/// duplicates or omissions, and relative order within each list matches
/// the original order. A child id missing from the graph classifies as
/// flow (it renders as empty there).
pub fn partition_root_children(graph: &NodeGraph) -> (Vec<NodeId>, Vec<(Anchor, NodeId)>) {
    let mut flow = Vec::new();
    let mut positioned = Vec::new();

    for id in &graph.root().children {
        let anchor = graph.get(id).and_then(|node| page_anchor(node));
        match anchor {
            Some(anchor) => positioned.push((anchor, id.clone())),
            None => flow.push(id.clone()),
        }
    }

    (flow, positioned)
}

fn page_anchor(node: &Node) -> Option<Anchor> {
    node.props.string("pagePosition").map(|value| match value {
        "top" => Anchor::Top,
        "bottom" => Anchor::Bottom,
        _ => Anchor::Center,
    })
}

struct Renderer<'a> {
    graph: &'a NodeGraph,
    ctx: &'a PageContext,
    store: &'a dyn InputStore,
}

impl Renderer<'_> {
    /// Render one node by id. Dangling references and repeated ids on the
    /// current path render as empty; neither is an error.
    fn render_node(&self, id: &str, path: &mut HashSet<NodeId>) -> Widget {
        let Some(node) = self.graph.get(id) else {
            warn!(node = id, "child id not present in graph");
            return Widget::Empty;
        };

        if !path.insert(id.to_string()) {
            warn!(node = id, "node repeats on its own render path");
            return Widget::Empty;
        }
        let widget = self.render_kind(id, node, path);
        path.remove(id);

        widget
    }

    fn render_kind(&self, id: &str, node: &Node, path: &mut HashSet<NodeId>) -> Widget {
        let r = Resolver::new(node, self.ctx);

        match &node.kind {
            ComponentKind::HeaderText => Widget::Text {
                content: r.header_text(),
                role: TextRole::Header,
                font_size: r.font_size(defaults::HEADER_FONT_SIZE),
                color: r.color("color"),
                align: r.text_align(),
                padding: r.padding(),
            },
            ComponentKind::BodyText => Widget::Text {
                content: r.body_text(),
                role: TextRole::Body,
                font_size: r.font_size(defaults::BODY_FONT_SIZE),
                color: r.color("color"),
                align: r.text_align(),
                padding: r.padding(),
            },
            ComponentKind::Image => Widget::Image {
                node_id: id.to_string(),
                url: r.image_url(),
                width: r.dimension("width"),
                height: r.dimension("height"),
                corner_radius: r.dimension("cornerRadius").unwrap_or(0.0),
            },
            ComponentKind::Button => Widget::Button {
                label: r.button_label(),
                role: ButtonRole::Primary,
                background: r.color("backgroundColor"),
                foreground: r.color("foregroundColor"),
                corner_radius: r.corner_radius(),
                icon: r.icon(),
            },
            ComponentKind::NavButton => {
                let action = r.nav_action();
                Widget::Button {
                    label: r.nav_label(action),
                    role: ButtonRole::Navigation(action),
                    background: r.color("backgroundColor"),
                    foreground: r.color("foregroundColor"),
                    corner_radius: r.corner_radius(),
                    icon: r.icon(),
                }
            }
            ComponentKind::Container => Widget::Stack {
                direction: r.direction(),
                alignment: r.alignment(),
                spacing: r.spacing(),
                padding: r.padding(),
                background: r.color("backgroundColor"),
                children: self.render_children(node, path),
            },
            ComponentKind::Select => {
                let key = r.input_key();
                let options = r.options();
                let selected = self
                    .stored_text(key.as_deref())
                    .or_else(|| options.first().cloned());
                Widget::Select {
                    key,
                    options,
                    selected,
                }
            }
            ComponentKind::Input => {
                let key = r.input_key();
                Widget::Input {
                    value: self.stored_text(key.as_deref()),
                    placeholder: r.placeholder(),
                    key,
                }
            }
            ComponentKind::Slider => {
                let key = r.input_key();
                let (min, max, step) = r.slider_bounds();
                let value = self
                    .stored_number(key.as_deref())
                    .map(|v| v.clamp(min, max))
                    .unwrap_or(min);
                Widget::Slider {
                    key,
                    value,
                    min,
                    max,
                    step,
                }
            }
            ComponentKind::Spacer => Widget::Spacer {
                height: r.spacer_height(),
            },
            ComponentKind::Unknown(name) => {
                // Unknown kinds must never drop children: with children they
                // become a plain vertical stack, without they render nothing.
                if node.children.is_empty() {
                    Widget::Empty
                } else {
                    warn!(node = id, kind = name.as_str(), "unresolved kind with children; rendering as stack");
                    self.fallback_stack(node, path)
                }
            }
        }
    }

    fn render_children(&self, node: &Node, path: &mut HashSet<NodeId>) -> Vec<Widget> {
        node.children
            .iter()
            .map(|child| self.render_node(child, path))
            .filter(|w| !w.is_empty())
            .collect()
    }

    fn fallback_stack(&self, node: &Node, path: &mut HashSet<NodeId>) -> Widget {
        Widget::Stack {
            direction: StackDirection::Vertical,
            alignment: crate::widget::Alignment::Leading,
            spacing: defaults::STACK_SPACING,
            padding: Default::default(),
            background: None,
            children: self.render_children(node, path),
        }
    }

    fn stored_text(&self, key: Option<&str>) -> Option<String> {
        let value = self.store.current_value(key?)?;
        value.as_text().map(str::to_string)
    }

    fn stored_number(&self, key: Option<&str>) -> Option<f64> {
        self.store.current_value(key?)?.as_number()
    }
}

/// Convenience wrapper over [`render_document`] that also surfaces the
/// parse error, for callers that want to log or report it themselves.
pub fn try_render_document(
    json: &str,
    ctx: &PageContext,
    store: &dyn InputStore,
    epoch: PageEpoch,
) -> Result<Page, LayoutError> {
    let graph = graph::parse_graph(json)?;
    Ok(render_page(&graph, ctx, store, epoch))
}

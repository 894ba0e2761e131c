//! # pagecraft
//!
//! A declarative page-layout interpreter: renders UI pages whose structure,
//! styling, and content are described entirely by data.
//!
//! The input is a graph-shaped JSON document exported by a visual editor —
//! a map of node id to node data, with `"ROOT"` as the entry point. Each
//! node carries a component-type hint, an untyped property bag, and an
//! ordered list of child ids. One render pass parses the document into a
//! [`NodeGraph`], walks it recursively from the root, resolves every
//! visual property through a fallback chain (node prop → page context →
//! built-in default), and produces a typed [`Page`] of widgets for the
//! host toolkit to display.
//!
//! ## Example
//! ```
//! use pagecraft::{render_document, MemoryInputStore, PageContext, PageEpoch};
//!
//! let json = r#"{
//!   "ROOT": { "nodes": ["a", "b"] },
//!   "a": { "type": "HeaderText", "props": { "text": "Hi" } },
//!   "b": { "type": "ButtonComponent", "props": { "pagePosition": "bottom", "text": "Next" } }
//! }"#;
//!
//! let ctx = PageContext::default();
//! let store = MemoryInputStore::new();
//! let page = render_document(json, &ctx, &store, PageEpoch(0));
//! assert_eq!(page.flow.len(), 1);
//! assert_eq!(page.overlays.len(), 1);
//! ```
//!
//! Rendering is absorbing by design: only an unparseable document is a
//! failure, and even that surfaces as a fixed placeholder page rather than
//! an error. Unknown component kinds, dangling child references, cycles,
//! and malformed property values all degrade locally.

pub mod context;
pub mod error;
pub mod graph;
pub mod kind;
pub mod props;
pub mod render;
pub mod resolve;
pub mod widget;

// --- Core types ---
pub use context::{InputStore, InputValue, MemoryInputStore, PageContext};
pub use error::{LayoutError, LayoutResult};
pub use graph::{Node, NodeGraph, NodeId, ROOT_ID};
pub use kind::ComponentKind;
pub use props::{Color, EdgeInsets, PropBag};
pub use widget::{
    Anchor, ButtonRole, ImageUpdate, NavAction, Overlay, Page, PageEpoch, Widget,
};

/// Parse a raw JSON document into a validated node graph.
pub fn parse_graph(json: &str) -> LayoutResult<NodeGraph> {
    graph::parse_graph(json)
}

/// Render a parsed graph into a page.
pub fn render_page(
    graph: &NodeGraph,
    ctx: &PageContext,
    store: &dyn InputStore,
    epoch: PageEpoch,
) -> Page {
    render::render_page(graph, ctx, store, epoch)
}

/// Parse and render in one step, absorbing parse failures into the fixed
/// "unable to render" placeholder page.
pub fn render_document(
    json: &str,
    ctx: &PageContext,
    store: &dyn InputStore,
    epoch: PageEpoch,
) -> Page {
    render::render_document(json, ctx, store, epoch)
}

/// Parse and render, surfacing the parse error to the caller instead of
/// absorbing it.
pub fn try_render_document(
    json: &str,
    ctx: &PageContext,
    store: &dyn InputStore,
    epoch: PageEpoch,
) -> LayoutResult<Page> {
    render::try_render_document(json, ctx, store, epoch)
}

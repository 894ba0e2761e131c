use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::{LayoutError, LayoutResult};
use crate::kind::ComponentKind;
use crate::props::PropBag;

/// Opaque node key, unique within a graph.
pub type NodeId = String;

/// The id that always denotes a graph's entry point.
pub const ROOT_ID: &str = "ROOT";

/// One entry of the serialized tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Resolved component kind; `Unknown` when the type hint was missing or
    /// unrecognized.
    pub kind: ComponentKind,
    /// Untyped property bag, copied verbatim from the document.
    pub props: PropBag,
    /// Child ids in render order. May reference ids absent from the graph;
    /// such references render as empty.
    pub children: Vec<NodeId>,
    /// The editor's container hint. Renderers do not trust it: any node with
    /// children renders them, container or not.
    pub is_container: bool,
}

impl Node {
    fn unresolved() -> Node {
        Node {
            kind: ComponentKind::Unknown(String::new()),
            props: PropBag::default(),
            children: Vec::new(),
            is_container: false,
        }
    }
}

/// The full id-to-node mapping for one page, built fresh from JSON per
/// render request and immutable during a render pass.
///
/// Orphan nodes unreachable from `"ROOT"` are allowed and never rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeGraph {
    nodes: HashMap<NodeId, Node>,
}

impl NodeGraph {
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// The root node. Parsing guarantees it exists.
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT_ID]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Parse a raw document into a validated graph.
///
/// Fails only when the input is not JSON, the top level is not an object,
/// or the object has no `"ROOT"` entry. Everything below the top level is
/// tolerated: a node entry of the wrong shape simply becomes an empty
/// unresolved node.
pub fn parse_graph(json: &str) -> LayoutResult<NodeGraph> {
    let value: Value = serde_json::from_str(json).map_err(|e| LayoutError::InvalidJson {
        message: e.to_string(),
    })?;
    graph_from_value(value)
}

/// Build a graph from an already-deserialized JSON value.
pub fn graph_from_value(value: Value) -> LayoutResult<NodeGraph> {
    let entries = match value {
        Value::Object(entries) => entries,
        _ => return Err(LayoutError::NotAnObject),
    };

    let mut nodes = HashMap::with_capacity(entries.len());
    for (id, data) in entries {
        nodes.insert(id, node_from_value(data));
    }

    if !nodes.contains_key(ROOT_ID) {
        return Err(LayoutError::MissingRoot);
    }

    Ok(NodeGraph { nodes })
}

fn node_from_value(data: Value) -> Node {
    let mut obj = match data {
        Value::Object(obj) => obj,
        _ => return Node::unresolved(),
    };

    let kind = match resolved_kind_name(&obj) {
        Some(name) => ComponentKind::from_name(&name),
        None => ComponentKind::Unknown(String::new()),
    };

    let props = match obj.remove("props") {
        Some(Value::Object(map)) => PropBag::new(map),
        _ => PropBag::default(),
    };

    let children = match obj.remove("nodes") {
        Some(Value::Array(ids)) => ids
            .into_iter()
            .filter_map(|v| match v {
                Value::String(id) => Some(id),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    let is_container = obj
        .get("isCanvas")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    Node {
        kind,
        props,
        children,
        is_container,
    }
}

/// Derive the kind name from the two type encodings found in editor
/// exports: a `{name, resolvedName}` object (resolvedName wins) or a bare
/// string.
fn resolved_kind_name(obj: &Map<String, Value>) -> Option<String> {
    match obj.get("type") {
        Some(Value::Object(ty)) => ty
            .get("resolvedName")
            .and_then(Value::as_str)
            .or_else(|| ty.get("name").and_then(Value::as_str))
            .map(str::to_string),
        Some(Value::String(name)) => Some(name.clone()),
        _ => None,
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Node categories in the knowledge graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Publication,
    Mission,
    Keyword,
    Organism,
    Location,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Publication => "Publication",
            Self::Mission => "Mission",
            Self::Keyword => "Keyword",
            Self::Organism => "Organism",
            Self::Location => "Location",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Publication" => Some(Self::Publication),
            "Mission" => Some(Self::Mission),
            "Keyword" => Some(Self::Keyword),
            "Organism" => Some(Self::Organism),
            "Location" => Some(Self::Location),
            _ => None,
        }
    }
}

/// One graph node. Ids are unique within a graph; two mentions that
/// normalize to the same id collapse into one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: String,
}

/// An edge endpoint as the rendering collaborator exchanges it: either a
/// bare node id or an embedded node object carrying an `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EdgeEndpoint {
    Id(String),
    Node { id: String },
}

impl EdgeEndpoint {
    /// The node id this endpoint refers to, whatever its shape.
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Node { id } => id,
        }
    }
}

/// A Publication→entity edge. Undirected in meaning. Duplicate edges for
/// the same pair are tolerated, not collapsed; they mirror multiple
/// distinct mentions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: EdgeEndpoint,
    pub target: EdgeEndpoint,
}

impl GraphEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: EdgeEndpoint::Id(source.into()),
            target: EdgeEndpoint::Id(target.into()),
        }
    }
}

/// The full corpus graph, built once per corpus load and immutable after.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    #[serde(rename = "links")]
    pub edges: Vec<GraphEdge>,
    /// Publication node ids in corpus order; the "first N publications"
    /// truncation order used by the filter.
    #[serde(skip)]
    pub publication_ids: Vec<String>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn publication_count(&self) -> usize {
        self.publication_ids.len()
    }
}

/// Mutable view state owned by the presentation layer and passed by value
/// into the pure filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub selected_types: HashSet<NodeType>,
    pub max_publications: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            selected_types: [
                NodeType::Publication,
                NodeType::Mission,
                NodeType::Keyword,
                NodeType::Organism,
            ]
            .into_iter()
            .collect(),
            max_publications: 50,
        }
    }
}

/// The subgraph visible under a view configuration. A pure derivation of
/// `(Graph, ViewConfig)` with no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphEdge>,
}

impl VisibleGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.links.len()
    }
}

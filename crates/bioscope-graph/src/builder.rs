//! Single-pass graph construction over the corpus.

use std::collections::HashMap;

use tracing::{debug, info};

use bioscope_core::Corpus;
use bioscope_extract::{normalize, EntityExtractor};

use crate::types::{Graph, GraphEdge, GraphNode, NodeType};

/// Minimum normalized title length for a document to qualify.
const MIN_TITLE_CHARS: usize = 5;

/// Maximum characters of raw title used as a Publication node label.
const MAX_LABEL_CHARS: usize = 100;

/// Build the knowledge graph from the whole corpus in one pass.
///
/// Documents whose normalized title is shorter than five characters are
/// skipped entirely and contribute nothing. Nodes are deduplicated by id
/// (first-insertion position, last-write label); edges are never
/// deduplicated, so repeated mentions across documents keep their
/// multiplicity.
pub fn build(corpus: &Corpus) -> Graph {
    let extractor = EntityExtractor::new();

    let mut nodes: Vec<GraphNode> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut edges: Vec<GraphEdge> = Vec::new();
    let mut publication_ids: Vec<String> = Vec::new();
    let mut skipped = 0usize;

    let mut upsert = |nodes: &mut Vec<GraphNode>, node: GraphNode| {
        if let Some(&i) = positions.get(&node.id) {
            nodes[i] = node;
        } else {
            positions.insert(node.id.clone(), nodes.len());
            nodes.push(node);
        }
    };

    for (doc_id, doc) in corpus.iter() {
        let title = normalize(doc.title.as_deref());
        if title.chars().count() < MIN_TITLE_CHARS {
            skipped += 1;
            debug!(document_id = %doc_id, "Skipping document with short or missing title");
            continue;
        }

        let pub_id = format!("pub_{}", doc_id);
        let raw_title = doc.title.as_deref().unwrap_or_default();
        upsert(
            &mut nodes,
            GraphNode {
                id: pub_id.clone(),
                node_type: NodeType::Publication,
                label: raw_title.chars().take(MAX_LABEL_CHARS).collect(),
            },
        );
        publication_ids.push(pub_id.clone());

        let entities = extractor.extract(doc);

        for mission in entities.missions {
            upsert(
                &mut nodes,
                GraphNode {
                    id: mission.clone(),
                    node_type: NodeType::Mission,
                    label: mission.clone(),
                },
            );
            edges.push(GraphEdge::new(pub_id.clone(), mission));
        }

        for keyword in entities.keywords {
            upsert(
                &mut nodes,
                GraphNode {
                    id: keyword.clone(),
                    node_type: NodeType::Keyword,
                    label: keyword.clone(),
                },
            );
            edges.push(GraphEdge::new(pub_id.clone(), keyword));
        }

        for organism in entities.organisms {
            upsert(
                &mut nodes,
                GraphNode {
                    id: organism.clone(),
                    node_type: NodeType::Organism,
                    label: organism.clone(),
                },
            );
            edges.push(GraphEdge::new(pub_id.clone(), organism));
        }
    }

    info!(
        nodes = nodes.len(),
        edges = edges.len(),
        publications = publication_ids.len(),
        skipped,
        "Knowledge graph built"
    );

    Graph {
        nodes,
        edges,
        publication_ids,
    }
}

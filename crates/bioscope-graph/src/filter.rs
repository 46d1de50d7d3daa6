//! Visible-subgraph derivation.

use std::collections::HashSet;

use crate::types::{Graph, NodeType, ViewConfig, VisibleGraph};

/// Derive the visible subgraph for a view configuration.
///
/// Pure and re-entrant; safe to call on every configuration change. A
/// node is visible iff its type is selected and, for publications, its id
/// is within the first `max_publications` of corpus order. An edge is
/// visible iff both endpoints are visible, so the output never contains
/// dangling edges. The caller pre-validates `max_publications`; an
/// out-of-range value produces a smaller or empty result, never an error.
pub fn filter(graph: &Graph, config: &ViewConfig) -> VisibleGraph {
    let visible_publications: HashSet<&str> =
        if config.selected_types.contains(&NodeType::Publication) {
            graph
                .publication_ids
                .iter()
                .take(config.max_publications)
                .map(String::as_str)
                .collect()
        } else {
            HashSet::new()
        };

    let nodes: Vec<_> = graph
        .nodes
        .iter()
        .filter(|n| {
            config.selected_types.contains(&n.node_type)
                && (n.node_type != NodeType::Publication
                    || visible_publications.contains(n.id.as_str()))
        })
        .cloned()
        .collect();

    let visible_ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();

    let links: Vec<_> = graph
        .edges
        .iter()
        .filter(|e| visible_ids.contains(e.source.id()) && visible_ids.contains(e.target.id()))
        .cloned()
        .collect();

    VisibleGraph { nodes, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use bioscope_core::Corpus;

    fn sample_graph() -> Graph {
        let corpus = Corpus::from_json_str(
            r#"{
                "1": {
                    "Title": "Microgravity Effects on Mouse Bone Density",
                    "Abstract": "bone loss in mice during spaceflight",
                    "Introduction": "Aboard the ISS."
                },
                "2": {
                    "Title": "Radiation and muscle atrophy in rats",
                    "Abstract": "radiation muscle",
                    "Introduction": "Flown on STS-90 with rats."
                },
                "3": {
                    "Title": "Gene expression in human cell culture",
                    "Abstract": "gene expression in human samples"
                }
            }"#,
        )
        .unwrap();
        build(&corpus)
    }

    fn config(types: &[NodeType], max_publications: usize) -> ViewConfig {
        ViewConfig {
            selected_types: types.iter().copied().collect(),
            max_publications,
        }
    }

    #[test]
    fn test_full_selection_is_whole_graph() {
        let graph = sample_graph();
        let all = config(
            &[
                NodeType::Publication,
                NodeType::Mission,
                NodeType::Keyword,
                NodeType::Organism,
                NodeType::Location,
            ],
            50,
        );
        let visible = filter(&graph, &all);
        assert_eq!(visible.node_count(), graph.node_count());
        assert_eq!(visible.edge_count(), graph.edge_count());
    }

    #[test]
    fn test_publication_cap_truncates_in_corpus_order() {
        let graph = sample_graph();
        let visible = filter(&graph, &config(&[NodeType::Publication], 2));
        let ids: Vec<&str> = visible.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["pub_1", "pub_2"]);
        // Entity types are deselected, so no edge has two visible endpoints.
        assert!(visible.links.is_empty());
    }

    #[test]
    fn test_mission_only_keeps_isolated_missions() {
        let graph = sample_graph();
        let visible = filter(&graph, &config(&[NodeType::Mission], 50));
        assert!(visible
            .nodes
            .iter()
            .all(|n| n.node_type == NodeType::Mission));
        assert!(!visible.nodes.is_empty());
        // No publications are visible, so every edge is dropped; mission
        // nodes stay visible as isolated nodes.
        assert!(visible.links.is_empty());
    }

    #[test]
    fn test_no_dangling_edges_for_any_config() {
        let graph = sample_graph();
        let type_sets: Vec<Vec<NodeType>> = vec![
            vec![NodeType::Publication],
            vec![NodeType::Publication, NodeType::Keyword],
            vec![NodeType::Publication, NodeType::Mission, NodeType::Organism],
            vec![NodeType::Keyword, NodeType::Organism],
            vec![],
        ];
        for types in type_sets {
            for max in [0, 1, 2, 100] {
                let visible = filter(&graph, &config(&types, max));
                let ids: HashSet<&str> = visible.nodes.iter().map(|n| n.id.as_str()).collect();
                for edge in &visible.links {
                    assert!(ids.contains(edge.source.id()), "dangling source");
                    assert!(ids.contains(edge.target.id()), "dangling target");
                }
            }
        }
    }

    #[test]
    fn test_filter_is_pure_and_repeatable() {
        let graph = sample_graph();
        let cfg = ViewConfig::default();
        let first = filter(&graph, &cfg);
        let second = filter(&graph, &cfg);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_max_publications_yields_no_publications() {
        let graph = sample_graph();
        let visible = filter(&graph, &config(&[NodeType::Publication, NodeType::Keyword], 0));
        assert!(visible
            .nodes
            .iter()
            .all(|n| n.node_type == NodeType::Keyword));
        assert!(visible.links.is_empty());
    }

    #[test]
    fn test_empty_selection_is_empty() {
        let graph = sample_graph();
        let visible = filter(&graph, &config(&[], 50));
        assert!(visible.nodes.is_empty());
        assert!(visible.links.is_empty());
    }

    #[test]
    fn test_object_shaped_endpoints_honored() {
        use crate::types::{EdgeEndpoint, GraphEdge, GraphNode};

        // The rendering collaborator hands edges back with embedded node
        // objects; visibility must resolve those the same as bare ids.
        let graph = Graph {
            nodes: vec![
                GraphNode {
                    id: "pub_1".to_string(),
                    node_type: NodeType::Publication,
                    label: "A bone study".to_string(),
                },
                GraphNode {
                    id: "Bone".to_string(),
                    node_type: NodeType::Keyword,
                    label: "Bone".to_string(),
                },
                GraphNode {
                    id: "Mice".to_string(),
                    node_type: NodeType::Organism,
                    label: "Mice".to_string(),
                },
            ],
            edges: vec![
                GraphEdge {
                    source: EdgeEndpoint::Node {
                        id: "pub_1".to_string(),
                    },
                    target: EdgeEndpoint::Node {
                        id: "Bone".to_string(),
                    },
                },
                GraphEdge {
                    source: EdgeEndpoint::Id("pub_1".to_string()),
                    target: EdgeEndpoint::Node {
                        id: "Mice".to_string(),
                    },
                },
            ],
            publication_ids: vec!["pub_1".to_string()],
        };

        let visible = filter(
            &graph,
            &config(&[NodeType::Publication, NodeType::Keyword], 50),
        );

        // The object-shaped Bone edge survives; the Mice edge drops with
        // its hidden endpoint.
        assert_eq!(visible.links.len(), 1);
        assert_eq!(visible.links[0].source.id(), "pub_1");
        assert_eq!(visible.links[0].target.id(), "Bone");
    }
}

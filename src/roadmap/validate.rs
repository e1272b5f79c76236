//! Roadmap Integrity
//!
//! Dangling references and duplicate ids are tolerated by the canvas
//! (edges with a missing endpoint are simply not drawn) but reported so
//! the user can see why something is missing.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{RoadmapEdge, RoadmapNode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadmapIssue {
    #[error("duplicate node id `{0}`")]
    DuplicateNode(String),
    #[error("duplicate edge id `{0}`")]
    DuplicateEdge(String),
    #[error("edge `{edge}` references missing node `{node}`")]
    DanglingEdge { edge: String, node: String },
    #[error("node `{node}` lists missing child `{child}`")]
    DanglingChild { node: String, child: String },
}

/// Collect every integrity problem, in node order then edge order
pub fn validate(nodes: &[RoadmapNode], edges: &[RoadmapEdge]) -> Vec<RoadmapIssue> {
    let mut issues = Vec::new();

    let mut node_ids = HashSet::new();
    for node in nodes {
        if !node_ids.insert(node.id.as_str()) {
            issues.push(RoadmapIssue::DuplicateNode(node.id.clone()));
        }
    }

    for node in nodes {
        for child in &node.children {
            if !node_ids.contains(child.as_str()) {
                issues.push(RoadmapIssue::DanglingChild {
                    node: node.id.clone(),
                    child: child.clone(),
                });
            }
        }
    }

    let mut edge_ids = HashSet::new();
    for edge in edges {
        if !edge_ids.insert(edge.id.as_str()) {
            issues.push(RoadmapIssue::DuplicateEdge(edge.id.clone()));
        }
        for endpoint in [&edge.source, &edge.target] {
            if !node_ids.contains(endpoint.as_str()) {
                issues.push(RoadmapIssue::DanglingEdge {
                    edge: edge.id.clone(),
                    node: endpoint.clone(),
                });
            }
        }
    }

    issues
}

/// One-line message for the error view, `None` when there is nothing to report
pub fn summarize(issues: &[RoadmapIssue]) -> Option<String> {
    match issues {
        [] => None,
        [only] => Some(format!("Roadmap problem: {}", only)),
        [first, rest @ ..] => Some(format!("Roadmap problem: {} (and {} more)", first, rest.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn node(id: &str, children: &[&str]) -> RoadmapNode {
        RoadmapNode {
            id: id.into(),
            title: id.to_uppercase(),
            description: String::new(),
            completed: false,
            completion_time: None,
            deadline: None,
            time_needed: 1.0,
            time_consumed: 0.0,
            children: children.iter().map(|c| c.to_string()).collect(),
            position: Position::default(),
        }
    }

    fn edge(id: &str, source: &str, target: &str) -> RoadmapEdge {
        RoadmapEdge {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            edge_type: "default".into(),
            animated: false,
            label: None,
        }
    }

    #[test]
    fn test_valid_roadmap_has_no_issues() {
        let nodes = vec![node("a", &["b"]), node("b", &[])];
        let edges = vec![edge("e1", "a", "b")];
        assert!(validate(&nodes, &edges).is_empty());
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_reports_dangling_and_duplicates() {
        let nodes = vec![node("a", &["ghost"]), node("a", &[])];
        let edges = vec![edge("e1", "a", "missing"), edge("e1", "a", "a")];

        let issues = validate(&nodes, &edges);
        assert_eq!(
            issues,
            vec![
                RoadmapIssue::DuplicateNode("a".into()),
                RoadmapIssue::DanglingChild { node: "a".into(), child: "ghost".into() },
                RoadmapIssue::DanglingEdge { edge: "e1".into(), node: "missing".into() },
                RoadmapIssue::DuplicateEdge("e1".into()),
            ]
        );
    }

    #[test]
    fn test_duplicate_connections_are_not_issues() {
        let nodes = vec![node("a", &[]), node("b", &[])];
        let edges = vec![edge("e1", "a", "b"), edge("e2", "a", "b")];
        assert!(validate(&nodes, &edges).is_empty());
    }

    #[test]
    fn test_summarize() {
        let one = vec![RoadmapIssue::DuplicateNode("a".into())];
        assert_eq!(summarize(&one).unwrap(), "Roadmap problem: duplicate node id `a`");

        let three = vec![
            RoadmapIssue::DuplicateNode("a".into()),
            RoadmapIssue::DuplicateEdge("e".into()),
            RoadmapIssue::DuplicateEdge("f".into()),
        ];
        assert_eq!(
            summarize(&three).unwrap(),
            "Roadmap problem: duplicate node id `a` (and 2 more)"
        );
    }
}

//! Frontend Models
//!
//! Data structures exchanged with the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 2D coordinate of a roadmap node on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A step in a learning roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapNode {
    /// Unique within a roadmap
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub completion_time: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    /// Hours
    #[serde(default)]
    pub time_needed: f64,
    /// Hours
    #[serde(default)]
    pub time_consumed: f64,
    /// Ordered child node ids
    #[serde(default)]
    pub children: Vec<String>,
    pub position: Position,
}

/// Dependency link between two roadmap nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub edge_type: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(default)]
    pub label: Option<String>,
}

/// Nodes and edges of one course roadmap
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Roadmap {
    pub nodes: Vec<RoadmapNode>,
    pub edges: Vec<RoadmapEdge>,
}

/// Signed-in user (matches backend, without credentials)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [CourseLevel::Beginner, CourseLevel::Intermediate, CourseLevel::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Some(CourseLevel::Beginner),
            "intermediate" => Some(CourseLevel::Intermediate),
            "advanced" => Some(CourseLevel::Advanced),
            _ => None,
        }
    }
}

/// Course data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub level: CourseLevel,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_uses_camel_case_keys() {
        let json = r#"{
            "id": "n1",
            "title": "Rust basics",
            "completionTime": null,
            "deadline": "2026-11-01T12:00:00Z",
            "timeNeeded": 4.5,
            "position": { "x": 1.0, "y": 2.0 }
        }"#;
        let node: RoadmapNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.time_needed, 4.5);
        assert_eq!(node.time_consumed, 0.0);
        assert!(node.deadline.is_some());
        assert!(node.children.is_empty());

        let out = serde_json::to_value(&node).unwrap();
        assert!(out.get("timeNeeded").is_some());
        assert!(out.get("time_needed").is_none());
    }

    #[test]
    fn test_edge_type_key() {
        let edge: RoadmapEdge =
            serde_json::from_str(r#"{"id":"e1","source":"a","target":"b","type":"smoothstep"}"#).unwrap();
        assert_eq!(edge.edge_type, "smoothstep");
        assert!(!edge.animated);
        assert_eq!(edge.label, None);
    }

    #[test]
    fn test_course_level_parse() {
        assert_eq!(CourseLevel::parse(" Advanced "), Some(CourseLevel::Advanced));
        assert_eq!(CourseLevel::parse("expert"), None);
        assert_eq!(CourseLevel::Intermediate.as_str(), "intermediate");
    }
}

//! Node Edits
//!
//! Turns a single details-panel field change into an updated node.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::models::RoadmapNode;

/// `<input type="datetime-local">` value format
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// One field edited in the details panel, with the raw form value where
/// parsing is needed
#[derive(Debug, Clone, PartialEq)]
pub enum NodeEdit {
    Title(String),
    Description(String),
    Completed(bool),
    Deadline(String),
    TimeNeeded(String),
    TimeConsumed(String),
    /// Comma separated child ids
    Children(String),
}

/// Parse a non-negative number of hours
fn parse_hours(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|h| h.is_finite() && *h >= 0.0)
}

/// Parse a `datetime-local` value as UTC. Empty clears the deadline.
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, DATETIME_LOCAL_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_deadline(deadline: Option<DateTime<Utc>>) -> String {
    deadline
        .map(|d| d.format(DATETIME_LOCAL_FORMAT).to_string())
        .unwrap_or_default()
}

/// Apply `edit` to a copy of `node`.
///
/// Marking a node complete stamps `completion_time` with `now`; reopening
/// it clears the stamp. Hour fields that do not parse as a non-negative
/// number leave the node unchanged, as does a deadline that does not parse.
pub fn apply_edit(node: &RoadmapNode, edit: NodeEdit, now: DateTime<Utc>) -> RoadmapNode {
    let mut updated = node.clone();
    match edit {
        NodeEdit::Title(title) => updated.title = title,
        NodeEdit::Description(description) => updated.description = description,
        NodeEdit::Completed(completed) => {
            if completed && !node.completed {
                updated.completion_time = Some(now);
            } else if !completed {
                updated.completion_time = None;
            }
            updated.completed = completed;
        }
        NodeEdit::Deadline(raw) => {
            if raw.trim().is_empty() {
                updated.deadline = None;
            } else if let Some(deadline) = parse_deadline(&raw) {
                updated.deadline = Some(deadline);
            }
        }
        NodeEdit::TimeNeeded(raw) => {
            if let Some(hours) = parse_hours(&raw) {
                updated.time_needed = hours;
            }
        }
        NodeEdit::TimeConsumed(raw) => {
            if let Some(hours) = parse_hours(&raw) {
                updated.time_consumed = hours;
            }
        }
        NodeEdit::Children(raw) => {
            updated.children = raw
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect();
        }
    }
    updated
}

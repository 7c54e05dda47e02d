//! Subtask entity and the incoming descriptor types used by reconciliation.

use super::task::Status;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    pub id: Option<i64>,
    pub task_id: i64,
    pub title: String,
    /// Free-form estimate ("2h", "half a day"); not interpreted.
    pub time_estimate: Option<String>,
    /// Accumulated minutes; only ever increased while the row exists.
    pub time_spent: i64,
    pub order_num: Option<i64>,
    pub status: Status,
}

impl Subtask {
    pub fn new(task_id: i64, title: &str, time_estimate: Option<String>, order_num: Option<i64>) -> Self {
        Subtask {
            id: None,
            task_id,
            title: title.to_string(),
            time_estimate,
            time_spent: 0,
            order_num,
            status: Status::Pending,
        }
    }
}

/// Wire-level subtask descriptor as it arrives in a create or update
/// request. `id` is the optional handle onto an already stored row; create
/// paths ignore it because every descriptor there is new by definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtaskDraft {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub time_estimate: Option<String>,
}

/// A draft resolved into its reconciliation role. A missing identifier
/// always means "create new"; a present one claims an existing row and is
/// checked against the stored set before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubtaskSpec {
    Existing {
        id: i64,
        title: String,
        time_estimate: Option<String>,
    },
    New {
        title: String,
        time_estimate: Option<String>,
    },
}

impl SubtaskSpec {
    pub fn existing_id(&self) -> Option<i64> {
        match self {
            SubtaskSpec::Existing { id, .. } => Some(*id),
            SubtaskSpec::New { .. } => None,
        }
    }
}

impl From<SubtaskDraft> for SubtaskSpec {
    fn from(draft: SubtaskDraft) -> Self {
        match draft.id {
            Some(id) => SubtaskSpec::Existing {
                id,
                title: draft.title,
                time_estimate: draft.time_estimate,
            },
            None => SubtaskSpec::New {
                title: draft.title,
                time_estimate: draft.time_estimate,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_with_id_resolves_to_existing() {
        let draft = SubtaskDraft {
            id: Some(7),
            title: "Write docs".to_string(),
            time_estimate: Some("1h".to_string()),
        };
        let spec = SubtaskSpec::from(draft);
        assert_eq!(spec.existing_id(), Some(7));
    }

    #[test]
    fn test_draft_without_id_resolves_to_new() {
        let draft = SubtaskDraft {
            id: None,
            title: "Write docs".to_string(),
            time_estimate: None,
        };
        let spec = SubtaskSpec::from(draft);
        assert_eq!(spec.existing_id(), None);
        assert!(matches!(spec, SubtaskSpec::New { .. }));
    }
}

use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

/// An `Assignment` belongs to a `StudySubject` and is backed by a
/// regular `Task`, so completing or deleting it goes through the task
/// operations using `task_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: ID,
    pub title: String,
    pub owner: ID,
    /// Optional due date in nanoseconds since the epoch
    pub due_date: Option<i64>,
    pub task_id: ID,
    pub subject_id: ID,
}

impl Entity for Assignment {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySubject {
    pub id: ID,
    pub title: String,
    pub owner: ID,
    pub assignments: Vec<Assignment>,
}

impl StudySubject {
    pub fn new(owner: ID, title: &str) -> Self {
        Self {
            id: Default::default(),
            title: title.to_string(),
            owner,
            assignments: Vec::new(),
        }
    }
}

impl Entity for StudySubject {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

use crate::shared::entity::{Entity, ID};
use crate::time::nanos_to_millis;
use serde::{Deserialize, Serialize};

/// How long after its timestamp a reminder is still considered due.
/// Bounds duplicate firing on one side and missed firings on the other,
/// given that scans only run every 30 seconds.
pub const REMINDER_DUE_WINDOW_MILLIS: i64 = 60 * 1000;

/// A `Task` is a single todo item owned by a user. It is a read-only
/// snapshot of what the backend service stores, all mutations go
/// through the backend operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: ID,
    pub title: String,
    pub completed: bool,
    pub owner: ID,
    /// Optional reminder timestamp in nanoseconds since the epoch
    pub reminder_time: Option<i64>,
}

impl Task {
    pub fn new(owner: ID, title: &str) -> Self {
        Self {
            id: Default::default(),
            title: title.to_string(),
            completed: false,
            owner,
            reminder_time: None,
        }
    }

    /// Composite key identifying a single firing of this task's reminder.
    /// A changed reminder timestamp yields a new key and may fire again.
    pub fn reminder_key(&self) -> Option<String> {
        self.reminder_time
            .map(|nanos| format!("{}-{}", self.id, nanos))
    }

    /// A reminder is due when its timestamp has passed but by less than
    /// [`REMINDER_DUE_WINDOW_MILLIS`]. Completed tasks and tasks without
    /// a reminder are never due.
    pub fn is_reminder_due(&self, now_millis: i64) -> bool {
        if self.completed {
            return false;
        }
        match self.reminder_time {
            Some(nanos) => {
                let reminder_millis = nanos_to_millis(nanos);
                reminder_millis <= now_millis
                    && reminder_millis > now_millis - REMINDER_DUE_WINDOW_MILLIS
            }
            None => false,
        }
    }
}

impl Entity for Task {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

mod goal;
mod shared;
mod study;
mod task;
mod time;
mod user;

pub use goal::{completion_percentage, goal_percentage, GoalProgress};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use study::{Assignment, StudySubject};
pub use task::{Task, REMINDER_DUE_WINDOW_MILLIS};
pub use time::{format_reminder_time, millis_to_nanos, nanos_to_millis};
pub use user::UserProfile;

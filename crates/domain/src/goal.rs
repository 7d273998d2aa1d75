use crate::task::Task;
use serde::{Deserialize, Serialize};

/// Share of tasks that are completed, rounded half-away-from-zero.
/// Defined as 0 when there are no tasks at all.
pub fn completion_percentage(completed: usize, total: usize) -> i64 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as i64
}

/// Progress towards the user's daily goal, rounded half-away-from-zero.
/// Defined as 0 for a missing or non-positive goal. Deliberately not
/// capped at 100, consumers with a bounded progress bar must clamp.
pub fn goal_percentage(completed: usize, daily_goal: i64) -> i64 {
    if daily_goal <= 0 {
        return 0;
    }
    (completed as f64 / daily_goal as f64 * 100.0).round() as i64
}

/// Derived productivity metrics for the dashboard. Pure and recomputed
/// from scratch on every task list snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub completed: usize,
    pub total: usize,
    pub daily_goal: Option<i64>,
    pub completion_percentage: i64,
    pub goal_percentage: i64,
}

impl GoalProgress {
    pub fn from_tasks(tasks: &[Task], daily_goal: Option<i64>) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            completed,
            total,
            daily_goal,
            completion_percentage: completion_percentage(completed, total),
            goal_percentage: daily_goal.map_or(0, |goal| goal_percentage(completed, goal)),
        }
    }

    pub fn goal_reached(&self) -> bool {
        match self.daily_goal {
            Some(goal) if goal > 0 => self.completed as i64 >= goal,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_percentage_is_zero_without_tasks() {
        assert_eq!(completion_percentage(0, 0), 0);
    }

    #[test]
    fn completion_percentage_rounds_to_nearest_integer() {
        assert_eq!(completion_percentage(3, 4), 75);
        assert_eq!(completion_percentage(1, 3), 33);
        assert_eq!(completion_percentage(2, 3), 67);
        assert_eq!(completion_percentage(5, 5), 100);
    }

    #[test]
    fn goal_percentage_is_zero_for_missing_or_invalid_goal() {
        assert_eq!(goal_percentage(5, 0), 0);
        assert_eq!(goal_percentage(5, -2), 0);
    }

    #[test]
    fn goal_percentage_is_not_capped() {
        assert_eq!(goal_percentage(7, 5), 140);
    }

    #[test]
    fn progress_from_task_snapshot() {
        let owner = Default::default();
        let mut tasks = vec![
            Task::new(owner, "a"),
            Task::new(Default::default(), "b"),
            Task::new(Default::default(), "c"),
            Task::new(Default::default(), "d"),
        ];
        tasks[0].completed = true;
        tasks[1].completed = true;
        tasks[2].completed = true;

        let progress = GoalProgress::from_tasks(&tasks, Some(2));
        assert_eq!(progress.completed, 3);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.completion_percentage, 75);
        assert_eq!(progress.goal_percentage, 150);
        assert!(progress.goal_reached());

        let progress = GoalProgress::from_tasks(&tasks, None);
        assert_eq!(progress.goal_percentage, 0);
        assert!(!progress.goal_reached());
    }
}

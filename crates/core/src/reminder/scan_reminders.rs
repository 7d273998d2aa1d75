use super::fired::FiredReminders;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::format_reminder_time;
use taskzen_infra::{Notice, NotificationPermission, SystemNotification, TaskZenContext};
use tracing::{error, warn};

/// Runs a single reminder scan over the current task snapshot. Returns
/// how many notices fired. Never fails, a failing backend fetch
/// degrades to an empty scan.
pub async fn scan_due_reminders(ctx: &TaskZenContext, focus_mode_enabled: bool) -> usize {
    let usecase = ScanDueRemindersUseCase { focus_mode_enabled };

    match execute(usecase, ctx).await {
        Ok(outcome) => outcome.fired,
        // UseCaseErrors is uninhabited
        Err(_) => 0,
    }
}

#[derive(Debug)]
pub struct ScanDueRemindersUseCase {
    /// Whether system-level notifications should be attempted on top
    /// of the in-app notices
    pub focus_mode_enabled: bool,
}

#[derive(Debug)]
pub struct ScanOutcome {
    /// Number of reminders that fired during this scan
    pub fired: usize,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait]
impl UseCase for ScanDueRemindersUseCase {
    type Response = ScanOutcome;

    type Errors = UseCaseErrors;

    /// This runs once on startup and then every scan interval
    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        let tasks = match ctx.backend.tasks.get_all_tasks().await {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!("Unable to fetch tasks for reminder scan: {:?}", e);
                return Ok(ScanOutcome { fired: 0 });
            }
        };

        let ledger = FiredReminders::new(ctx.stores.session.clone());
        let now = ctx.sys.get_timestamp_millis();
        let mut fired = 0;

        for task in &tasks {
            if !task.is_reminder_due(now) {
                continue;
            }
            // is_reminder_due implies a reminder timestamp is present
            let reminder_time = match task.reminder_time {
                Some(nanos) => nanos,
                None => continue,
            };
            let reminder_key = format!("{}-{}", task.id, reminder_time);
            if ledger.is_fired(&reminder_key) {
                continue;
            }

            // Record before dispatching so a re-entered scan cannot fire
            // the same reminder twice.
            ledger.mark_fired(&reminder_key);

            ctx.notifiers.in_app.notify(Notice {
                title: format!("Reminder: {}", task.title),
                description: format!("Due at {}", format_reminder_time(reminder_time)),
            });

            if self.focus_mode_enabled
                && ctx.notifiers.system.permission() == NotificationPermission::Granted
            {
                let notification = SystemNotification {
                    title: "TaskZen Reminder".to_string(),
                    body: task.title.clone(),
                    tag: reminder_key,
                };
                if let Err(e) = ctx.notifiers.system.send(&notification).await {
                    error!("Unable to deliver system notification: {:?}", e);
                }
            }

            fired += 1;
        }

        Ok(ScanOutcome { fired })
    }
}

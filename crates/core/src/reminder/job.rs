use super::scan_reminders::scan_due_reminders;
use crate::focus::is_focus_mode_enabled;
use std::time::Duration;
use taskzen_infra::TaskZenContext;
use tokio::task::JoinHandle;
use tracing::debug;

/// The repeating reminder scan. Scans once immediately on start and
/// then on a fixed interval until stopped. Stopping aborts the spawned
/// task so no timer outlives its owner.
pub struct ReminderJob {
    handle: JoinHandle<()>,
}

impl ReminderJob {
    pub fn start(ctx: TaskZenContext) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(ctx.config.scan_interval_secs));
            loop {
                // The first tick completes immediately
                interval.tick().await;

                let focus_mode_enabled = is_focus_mode_enabled(&ctx);
                let fired = scan_due_reminders(&ctx, focus_mode_enabled).await;
                debug!("Reminder scan complete, fired {} notifications", fired);
            }
        });
        Self { handle }
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for ReminderJob {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use taskzen_domain::millis_to_nanos;
    use taskzen_infra::{setup_context_inmemory, Notifiers, RecordingInAppNotifier};

    #[tokio::test(start_paused = true)]
    async fn scans_immediately_and_then_on_the_interval() {
        let in_app = Arc::new(RecordingInAppNotifier::new());
        let mut ctx = setup_context_inmemory();
        ctx.notifiers = Notifiers {
            in_app: in_app.clone(),
            system: ctx.notifiers.system.clone(),
        };

        // One reminder that is due right now
        let id = ctx.backend.tasks.add_task("Stretch your legs").await.unwrap();
        ctx.backend
            .tasks
            .set_task_reminder(&id, millis_to_nanos(ctx.sys.get_timestamp_millis()))
            .await
            .unwrap();

        let job = ReminderJob::start(ctx);
        // Let the immediate scan run
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(in_app.notices().len(), 1);

        // Later ticks do not re-fire the same reminder
        tokio::time::sleep(Duration::from_secs(65)).await;
        assert_eq!(in_app.notices().len(), 1);

        job.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_the_repeating_scan() {
        let ctx = setup_context_inmemory();
        let job = ReminderJob::start(ctx);
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(job.is_active());

        job.stop();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!job.is_active());
    }
}

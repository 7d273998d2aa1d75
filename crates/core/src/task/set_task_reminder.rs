use crate::error::TaskZenError;
use crate::shared::usecase::{execute, UseCase};
use taskzen_domain::{format_reminder_time, millis_to_nanos, ID};
use taskzen_infra::TaskZenContext;

/// `reminder_time` is nanoseconds since the epoch and must lie in the
/// future.
pub async fn set_task_reminder(
    ctx: &TaskZenContext,
    task_id: ID,
    reminder_time: i64,
) -> Result<(), TaskZenError> {
    let usecase = SetTaskReminderUseCase {
        task_id,
        reminder_time,
    };

    execute(usecase, ctx).await.map_err(handle_error)
}

fn handle_error(e: UseCaseErrors) -> TaskZenError {
    match e {
        UseCaseErrors::ReminderTimeNotInFuture(nanos) => TaskZenError::BadClientData(format!(
            "The reminder time: {} is not in the future",
            format_reminder_time(nanos)
        )),
        UseCaseErrors::StorageError(e) => TaskZenError::ServiceUnavailable(e.to_string()),
    }
}

#[derive(Debug)]
pub struct SetTaskReminderUseCase {
    pub task_id: ID,
    pub reminder_time: i64,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    ReminderTimeNotInFuture(i64),
    StorageError(anyhow::Error),
}

#[async_trait::async_trait]
impl UseCase for SetTaskReminderUseCase {
    type Response = ();

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &TaskZenContext) -> Result<Self::Response, Self::Errors> {
        let now_nanos = millis_to_nanos(ctx.sys.get_timestamp_millis());
        if self.reminder_time <= now_nanos {
            return Err(UseCaseErrors::ReminderTimeNotInFuture(self.reminder_time));
        }

        ctx.backend
            .tasks
            .set_task_reminder(&self.task_id, self.reminder_time)
            .await
            .map_err(UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use taskzen_infra::{setup_context_inmemory, ISys};

    pub struct StaticTimeSys;
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            1_613_862_000_000 // Sun Feb 21 2021 00:00:00 GMT+0100 (Central European Standard Time)
        }
    }

    #[tokio::test]
    async fn rejects_reminder_time_in_the_past() {
        let mut ctx = setup_context_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});

        let task_id = ctx.backend.tasks.add_task("Call the dentist").await.unwrap();
        let past = millis_to_nanos(ctx.sys.get_timestamp_millis() - 1000);

        assert!(matches!(
            set_task_reminder(&ctx, task_id, past).await,
            Err(TaskZenError::BadClientData(_))
        ));
        assert_eq!(
            ctx.backend.tasks.get_all_tasks().await.unwrap()[0].reminder_time,
            None
        );
    }

    #[tokio::test]
    async fn stores_future_reminder_time() {
        let mut ctx = setup_context_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});

        let task_id = ctx.backend.tasks.add_task("Call the dentist").await.unwrap();
        let future = millis_to_nanos(ctx.sys.get_timestamp_millis() + 60 * 1000);

        set_task_reminder(&ctx, task_id, future).await.unwrap();
        assert_eq!(
            ctx.backend.tasks.get_all_tasks().await.unwrap()[0].reminder_time,
            Some(future)
        );
    }
}

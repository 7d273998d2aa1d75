mod fired;
mod job;
mod scan_reminders;

pub use fired::FiredReminders;
pub use job::ReminderJob;
pub use scan_reminders::{scan_due_reminders, ScanDueRemindersUseCase, ScanOutcome};

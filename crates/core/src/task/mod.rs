mod add_task;
mod clear_task_reminder;
mod complete_task;
mod delete_task;
mod get_all_tasks;
mod set_task_reminder;

pub use add_task::add_task;
pub use clear_task_reminder::clear_task_reminder;
pub use complete_task::complete_task;
pub use delete_task::delete_task;
pub use get_all_tasks::get_all_tasks;
pub use set_task_reminder::set_task_reminder;

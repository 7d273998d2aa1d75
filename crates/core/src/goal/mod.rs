mod get_daily_goal;
mod get_progress_report;
mod set_daily_goal;

pub use get_daily_goal::get_daily_goal;
pub use get_progress_report::get_progress_report;
pub use set_daily_goal::set_daily_goal;

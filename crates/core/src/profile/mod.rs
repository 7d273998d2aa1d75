mod get_caller_user_profile;
mod save_caller_user_profile;

pub use get_caller_user_profile::get_caller_user_profile;
pub use save_caller_user_profile::save_caller_user_profile;

mod add_assignment;
mod complete_assignment;
mod create_subject;
mod delete_assignment;
mod get_assignments;
mod get_subjects;

pub use add_assignment::add_assignment;
pub use complete_assignment::complete_assignment;
pub use create_subject::create_subject;
pub use delete_assignment::delete_assignment;
pub use get_assignments::get_assignments;
pub use get_subjects::get_subjects;

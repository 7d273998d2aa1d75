mod error;
mod shared;

pub mod focus;
pub mod goal;
pub mod profile;
pub mod reminder;
pub mod study;
pub mod task;

pub use error::TaskZenError;

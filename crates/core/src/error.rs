use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskZenError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
    #[error("The backend service could not be reached. Error message: `{0}`")]
    ServiceUnavailable(String),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown output format `{0}`, expected `text` or `json`")]
    UnknownOutputFormat(String),
    #[error("Invalid log filter `{0}`")]
    LogFilter(String),
}

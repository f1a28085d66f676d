use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("stored question options are not a JSON list of strings")]
    Options(#[from] serde_json::Error),
}

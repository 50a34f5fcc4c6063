use thiserror::Error;

/// Everything a steamfront call can fail with. Not-found and misuse cases get
/// their own variants; transport and parse failures wrap the underlying error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("app `{0}` was not found on the steam store")]
    AppNotFound(String),
    #[error("no steam user matched `{0}`")]
    UserNotFound(String),
    #[error("missing arguments: {0}")]
    MissingArguments(&'static str),
    #[error("this call requires an api key")]
    ApiKeyRequired,
    #[error("an http error occurred fetching data from steam: {0}")]
    Http(#[from] ureq::Error),
    #[error("an IO error occurred fetching data from steam: {0}")]
    Io(#[from] std::io::Error),
    #[error("unexpected response shape from steam: {0}")]
    Json(#[from] serde_json::Error),
    #[error("bad xml in community response: {0}")]
    Xml(#[from] roxmltree::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

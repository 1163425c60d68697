use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("unsupported url {0}: {1}")]
  UnsupportedURL(String, &'static str),

  #[error("could not find YouTube data: {0}")]
  DataNotFound(&'static str),

  #[error("invalid embedded payload {0}: {1}")]
  InvalidPayload(&'static str, #[source] serde_json::Error),

  #[error("no search results found")]
  NoResults,

  #[error("invalid search entry #{0}: {1}")]
  InvalidSearchEntry(usize, &'static str),

  #[error("invalid config {0}: {1}")]
  Config(&'static str, String),

  #[error("http error: {0}")]
  Http(#[from] reqwest::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

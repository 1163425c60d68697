use std::time::Duration;

use crate::{Error, Result};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

const USER_AGENT_VAR: &str = "YOUTUBE_META_USER_AGENT";
const TIMEOUT_VAR: &str = "YOUTUBE_META_TIMEOUT_SECS";
const PROXY_VAR: &str = "YOUTUBE_META_PROXY";

/// Settings for the http client. The default issues a plain GET with no
/// timeout, matching what a bare http request would do.
#[derive(Clone, Debug)]
pub struct Config {
  pub user_agent: String,
  pub timeout: Option<Duration>,
  pub proxy: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      user_agent: DEFAULT_USER_AGENT.to_owned(),
      timeout: None,
      proxy: None,
    }
  }
}

impl Config {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let mut config = Self::default();

    if let Some(user_agent) = lookup(USER_AGENT_VAR) {
      config.user_agent = user_agent;
    }

    if let Some(secs) = lookup(TIMEOUT_VAR) {
      let secs = secs
        .trim()
        .parse::<u64>()
        .map_err(|_| Error::Config(TIMEOUT_VAR, secs))?;
      config.timeout = Some(Duration::from_secs(secs));
    }

    config.proxy = lookup(PROXY_VAR).filter(|p| !p.is_empty());

    Ok(config)
  }
}

use async_trait::async_trait;
use reqwest::header;
use tracing::debug;

use crate::{config::Config, Result};

/// Retrieves a page body. The http implementation is the only one used
/// outside of tests.
#[async_trait]
pub trait Fetcher {
  async fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
  client: reqwest::Client,
}

impl HttpFetcher {
  pub fn new(config: &Config) -> Result<Self> {
    let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }

    if let Some(proxy) = &config.proxy {
      builder = builder.proxy(reqwest::Proxy::all(proxy)?);
    }

    Ok(Self {
      client: builder.build()?,
    })
  }
}

#[async_trait]
impl Fetcher for HttpFetcher {
  async fn fetch(&self, url: &str) -> Result<String> {
    debug!("fetching {url}");
    let resp = self
      .client
      .get(url)
      .header(header::ACCEPT, "text/html")
      .send()
      .await?
      .error_for_status()?;

    let body = resp.text().await?;
    debug!("fetched {} bytes from {url}", body.len());
    Ok(body)
  }
}

use http_types::Url;
use tracing::info;

use crate::{
  config::Config,
  fetcher::{Fetcher, HttpFetcher},
  payload::{require_payload, INITIAL_DATA, PLAYER_RESPONSE},
  search::{search_results, SearchResultItem},
  util::video_id_from_url,
  video::VideoRecord,
  watch_url, Error, Result, YOUTUBE_ORIGIN,
};

/// Entry point for both lookups. Holds nothing but the fetcher, so one
/// instance can serve any number of concurrent calls.
pub struct Scraper<F = HttpFetcher> {
  fetcher: F,
}

impl Scraper<HttpFetcher> {
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self::with_fetcher(HttpFetcher::new(config)?))
  }
}

impl<F: Fetcher + Send + Sync> Scraper<F> {
  pub fn with_fetcher(fetcher: F) -> Self {
    Self { fetcher }
  }

  pub async fn fetch_video_by_url(&self, url: &str) -> Result<VideoRecord> {
    let video_id = video_id_from_url(url).ok_or_else(|| {
      Error::UnsupportedURL(url.into(), "v parameter not found")
    })?;

    let html = self.fetcher.fetch(&watch_url(video_id)).await?;
    let data = require_payload(&html, INITIAL_DATA)?;
    let player = require_payload(&html, PLAYER_RESPONSE)?;

    let video = VideoRecord::from_payloads(video_id, &data, &player);
    info!("fetched metadata for video {video_id}");
    Ok(video)
  }

  pub async fn search_videos(
    &self,
    query: &str,
    limit: usize,
  ) -> Result<Vec<SearchResultItem>> {
    let html = self.fetcher.fetch(search_url(query).as_str()).await?;
    let data = require_payload(&html, INITIAL_DATA)?;

    let items = search_results(&data, limit)?;
    info!("search {query:?} returned {} videos", items.len());
    Ok(items)
  }
}

fn search_url(query: &str) -> Url {
  let base = format!("{YOUTUBE_ORIGIN}/results");
  Url::parse_with_params(&base, &[("search_query", query)])
    .expect("search url base is hard-coded, thus must be valid")
}

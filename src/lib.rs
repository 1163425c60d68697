//! Video metadata scraped from public YouTube pages.
//!
//! Both lookups fetch a single html page, pull the JSON the page embeds for
//! its own rendering, and map a fixed set of fields out of it.

pub mod config;
mod error;
pub mod fetcher;
pub mod payload;
pub mod scraper;
pub mod search;
mod util;
pub mod video;

pub use config::Config;
pub use error::{Error, Result};
pub use scraper::Scraper;
pub use search::SearchResultItem;
pub use util::W;
pub use video::{Channel, VideoRecord};

pub const YOUTUBE_ORIGIN: &str = "https://www.youtube.com";

pub(crate) const UNKNOWN: &str = "Unknown";

pub fn watch_url(video_id: &str) -> String {
  format!("{YOUTUBE_ORIGIN}/watch?v={video_id}")
}

/// Looks up one video by its watch url, using a default http client.
pub async fn fetch_video_by_url(url: &str) -> Result<VideoRecord> {
  Scraper::new(&Config::default())?
    .fetch_video_by_url(url)
    .await
}

/// Keyword search returning at most `limit` videos, using a default http
/// client.
pub async fn search_videos(
  query: &str,
  limit: usize,
) -> Result<Vec<SearchResultItem>> {
  Scraper::new(&Config::default())?
    .search_videos(query, limit)
    .await
}

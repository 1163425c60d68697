use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::{
  video::Channel, watch_url, Error, Result, W, UNKNOWN, YOUTUBE_ORIGIN,
};

const SECTION_CONTENTS: &str = concat!(
  "/contents/twoColumnSearchResultsRenderer/primaryContents",
  "/sectionListRenderer/contents/0/itemSectionRenderer/contents",
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultItem {
  pub title: String,
  pub url: String,
  pub video_id: String,
  pub duration: String,
  pub views: String,
  pub uploaded: String,
  pub thumbnail: String,
  pub channel: Channel,
  pub likes: String,
}

/// Maps the video entries of the first item section, in page order, up to
/// `limit` of them. Channel cards, playlists, ads and the like are skipped.
pub fn search_results(
  data: &Value,
  limit: usize,
) -> Result<Vec<SearchResultItem>> {
  let Some(contents) = W(data).array_at(SECTION_CONTENTS) else {
    warn!("search page has no item section contents");
    return Err(Error::NoResults);
  };

  contents
    .iter()
    .filter_map(|entry| entry.get("videoRenderer"))
    .filter(|video| !video.is_null())
    .take(limit)
    .enumerate()
    .map(|(i, video)| SearchResultItem::from_renderer(i, video))
    .collect()
}

impl SearchResultItem {
  fn from_renderer(index: usize, video: &Value) -> Result<Self> {
    let video = W(video);
    let owner = video.at("/ownerText/runs/0");

    // title and thumbnail are expected on every video entry; unlike the
    // other fields they have no fallback, but an empty value is kept.
    let title = video
      .node("/title/runs/0/text")
      .and_then(Value::as_str)
      .ok_or(Error::InvalidSearchEntry(index, "title text not found"))?;
    let video_id = video
      .str_at("/videoId")
      .ok_or(Error::InvalidSearchEntry(index, "videoId not found"))?;
    let thumbnail = video
      .node("/thumbnail/thumbnails/0/url")
      .and_then(Value::as_str)
      .ok_or(Error::InvalidSearchEntry(index, "thumbnail not found"))?;

    let channel_url = owner
      .str_at("/navigationEndpoint/commandMetadata/webCommandMetadata/url")
      .map(|path| format!("{YOUTUBE_ORIGIN}{path}"))
      .unwrap_or_default();

    Ok(Self {
      title: title.to_owned(),
      url: watch_url(video_id),
      video_id: video_id.to_owned(),
      duration: video.text_or("/lengthText/simpleText", "Live"),
      views: video.text_or("/viewCountText/simpleText", "0 views"),
      uploaded: video.text_or("/publishedTimeText/simpleText", UNKNOWN),
      thumbnail: thumbnail.to_owned(),
      channel: Channel {
        name: owner.text_or("/text", UNKNOWN),
        url: channel_url,
      },
      likes: video.text_or("/shortViewCountText/simpleText", UNKNOWN),
    })
  }
}

use serde::Serialize;
use serde_json::Value;

use crate::{
  util::format_duration, watch_url, W, YOUTUBE_ORIGIN, UNKNOWN,
};

const WATCH_CONTENTS: &str =
  "/contents/twoColumnWatchNextResults/results/results/contents";
const PRIMARY_INFO: &str = "/0/videoPrimaryInfoRenderer";
const SECONDARY_INFO: &str = "/1/videoSecondaryInfoRenderer";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Channel {
  pub name: String,
  pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
  pub title: String,
  pub url: String,
  pub video_id: String,
  pub duration: String,
  pub views: String,
  pub uploaded: String,
  pub thumbnail: String,
  pub channel: Channel,
}

pub fn thumbnail_url(video_id: &str) -> String {
  format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg")
}

impl VideoRecord {
  /// Builds the record from the watch page's two payloads. Every field
  /// falls back to its default when the page lacks it.
  pub fn from_payloads(video_id: &str, data: &Value, player: &Value) -> Self {
    let details = W(player).at("/videoDetails");
    let contents = W(data).at(WATCH_CONTENTS);
    let primary = contents.at(PRIMARY_INFO);
    let owner = contents.at(SECONDARY_INFO).at("/owner/videoOwnerRenderer");

    let duration = details
      .seconds_at("/lengthSeconds")
      .map(format_duration)
      .unwrap_or_else(|| UNKNOWN.to_owned());

    let channel_url = owner
      .str_at("/navigationEndpoint/browseEndpoint/browseId")
      .map(|id| format!("{YOUTUBE_ORIGIN}/channel/{id}"))
      .unwrap_or_default();

    Self {
      title: details.text_or("/title", UNKNOWN),
      url: watch_url(video_id),
      video_id: video_id.to_owned(),
      duration,
      views: primary.text_or(
        "/viewCount/videoViewCountRenderer/viewCount/simpleText",
        "0 views",
      ),
      uploaded: primary.text_or("/dateText/simpleText", UNKNOWN),
      thumbnail: thumbnail_url(video_id),
      channel: Channel {
        name: owner.text_or("/title/runs/0/text", UNKNOWN),
        url: channel_url,
      },
    }
  }
}

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Deserializer, Value};
use tracing::debug;

use crate::{Error, Result};

/// Page-render data, present on both the watch and the results page.
pub const INITIAL_DATA: &str = "ytInitialData";
/// Player data, watch page only.
pub const PLAYER_RESPONSE: &str = "ytInitialPlayerResponse";

static INITIAL_DATA_REGEX: LazyLock<Regex> =
  LazyLock::new(|| assignment_regex(INITIAL_DATA));
static PLAYER_RESPONSE_REGEX: LazyLock<Regex> =
  LazyLock::new(|| assignment_regex(PLAYER_RESPONSE));

fn assignment_regex(name: &str) -> Regex {
  Regex::new(&format!(r"var {}\s*=\s*\{{", regex::escape(name)))
    .expect("assignment pattern is hard-coded, thus must be valid")
}

/// Finds `var <name> = {...};` in the page and parses the object.
///
/// Only a single JSON value is consumed after the `=`, so a `};` inside a
/// string literal does not cut the payload short. Returns `Ok(None)` when
/// the assignment is not in the page at all.
pub fn extract_payload(
  html: &str,
  name: &'static str,
) -> Result<Option<Value>> {
  let regex = match name {
    INITIAL_DATA => &*INITIAL_DATA_REGEX,
    PLAYER_RESPONSE => &*PLAYER_RESPONSE_REGEX,
    _ => return extract_with(&assignment_regex(name), html, name),
  };

  extract_with(regex, html, name)
}

fn extract_with(
  regex: &Regex,
  html: &str,
  name: &'static str,
) -> Result<Option<Value>> {
  let Some(m) = regex.find(html) else {
    debug!("{name} not found in page");
    return Ok(None);
  };

  // the match ends right after the opening brace
  let start = m.end() - 1;
  let value = Deserializer::from_str(&html[start..])
    .into_iter::<Value>()
    .next()
    .transpose()
    .map_err(|e| Error::InvalidPayload(name, e))?;

  debug!("{name} found at offset {start}");
  Ok(value)
}

/// Same as [`extract_payload`], but absence is an error.
pub fn require_payload(html: &str, name: &'static str) -> Result<Value> {
  extract_payload(html, name)?.ok_or(Error::DataNotFound(name))
}

#[cfg(test)]
mod test {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_extract_payload() {
    let html = concat!(
      r#"<html><script nonce="x">var ytInitialData = "#,
      r#"{"a": {"b": [1, 2]}, "s": "};</script>"};</script>"#,
      r#"<script>var ytInitialPlayerResponse="#,
      r#"{"videoDetails":{"title":"t"}};var meta = 1;</script></html>"#,
    );

    let data = extract_payload(html, INITIAL_DATA).unwrap().unwrap();
    assert_eq!(data, json!({"a": {"b": [1, 2]}, "s": "};</script>"}));

    let player = extract_payload(html, PLAYER_RESPONSE).unwrap().unwrap();
    assert_eq!(player, json!({"videoDetails": {"title": "t"}}));
  }

  #[test]
  fn test_missing_payload() {
    let html = "<html><script>window.ytInitialData = {};</script></html>";
    assert!(extract_payload(html, INITIAL_DATA).unwrap().is_none());
    assert!(matches!(
      require_payload(html, PLAYER_RESPONSE),
      Err(Error::DataNotFound(PLAYER_RESPONSE))
    ));
  }

  #[test]
  fn test_malformed_payload() {
    let html = "<script>var ytInitialData = {\"a\": oops};</script>";
    assert!(matches!(
      extract_payload(html, INITIAL_DATA),
      Err(Error::InvalidPayload(INITIAL_DATA, _))
    ));
  }
}

mod json_ext;

#[derive(Default)]
pub struct W<T>(pub T);

// the `&` separated `v` parameter, taken the same loose way as the
// browser would: the first "v=" anywhere in the string wins.
pub fn video_id_from_url(url: &str) -> Option<&str> {
  let (_, rest) = url.split_once("v=")?;
  let id = rest.split('&').next().unwrap_or_default();
  (!id.is_empty()).then_some(id)
}

// seconds are intentionally left unpadded: 65 renders as "1:5".
pub fn format_duration(secs: u64) -> String {
  format!("{}:{}", secs / 60, secs % 60)
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn test_video_id_from_url() {
    let cases = [
      ("https://www.youtube.com/watch?v=dQw4w9WgXcQ", Some("dQw4w9WgXcQ")),
      ("https://www.youtube.com/watch?v=abc&t=42s", Some("abc")),
      ("https://www.youtube.com/watch?list=PL1&v=xyz", Some("xyz")),
      ("https://www.youtube.com/watch?v=abc/?v=def", Some("abc/?v=def")),
      ("https://youtu.be/dQw4w9WgXcQ", None),
      ("https://www.youtube.com/watch?v=", None),
      ("https://www.youtube.com/watch?v=&t=1", None),
      ("", None),
    ];

    for (url, expected) in cases {
      assert_eq!(video_id_from_url(url), expected, "url: {url}");
    }
  }

  #[test]
  fn test_format_duration() {
    assert_eq!(format_duration(125), "2:5");
    assert_eq!(format_duration(65), "1:5");
    assert_eq!(format_duration(59), "0:59");
    assert_eq!(format_duration(0), "0:0");
    assert_eq!(format_duration(3600), "60:0");
  }
}

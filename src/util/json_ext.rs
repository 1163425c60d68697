use serde_json::Value;

use crate::W;

static NULL: Value = Value::Null;

// Every lookup into the YouTube page trees goes through here. Paths are
// JSON pointers ("/contents/0/videoRenderer"), and an absent step anywhere
// along the path yields None rather than an error.
impl<'a> W<&'a Value> {
  pub fn node(&self, pointer: &str) -> Option<&'a Value> {
    self.0.pointer(pointer)
  }

  pub fn at(&self, pointer: &str) -> W<&'a Value> {
    W(self.node(pointer).unwrap_or(&NULL))
  }

  /// Non-empty string at `pointer`.
  pub fn str_at(&self, pointer: &str) -> Option<&'a str> {
    self
      .node(pointer)
      .and_then(Value::as_str)
      .filter(|s| !s.is_empty())
  }

  pub fn text_or(&self, pointer: &str, default: &str) -> String {
    self.str_at(pointer).unwrap_or(default).to_owned()
  }

  /// A second count, stored either as a JSON number or as a numeric
  /// string (the player response uses the latter).
  pub fn seconds_at(&self, pointer: &str) -> Option<u64> {
    match self.node(pointer)? {
      Value::Number(n) => n.as_u64(),
      Value::String(s) => s.trim().parse().ok(),
      _ => None,
    }
  }

  pub fn array_at(&self, pointer: &str) -> Option<&'a Vec<Value>> {
    self.node(pointer).and_then(Value::as_array)
  }
}

#[cfg(test)]
mod test {
  use serde_json::json;

  use crate::W;

  #[test]
  fn test_walk_with_defaults() {
    let tree = json!({
      "a": { "b": [{ "c": "hello" }, { "c": "" }] },
      "n": 42,
      "s": "125",
      "bad": "12x",
    });
    let w = W(&tree);

    assert_eq!(w.str_at("/a/b/0/c"), Some("hello"));
    assert_eq!(w.str_at("/a/b/1/c"), None);
    assert_eq!(w.str_at("/a/b/5/c"), None);
    assert_eq!(w.str_at("/missing/deeply/nested"), None);
    assert_eq!(w.text_or("/a/b/1/c", "Unknown"), "Unknown");
    assert_eq!(w.text_or("/a/x", "Unknown"), "Unknown");
    assert_eq!(w.at("/a/b").str_at("/0/c"), Some("hello"));
    assert_eq!(w.at("/nope").str_at("/0/c"), None);

    assert_eq!(w.seconds_at("/n"), Some(42));
    assert_eq!(w.seconds_at("/s"), Some(125));
    assert_eq!(w.seconds_at("/bad"), None);
    assert_eq!(w.seconds_at("/a"), None);

    assert_eq!(w.array_at("/a/b").map(Vec::len), Some(2));
    assert_eq!(w.array_at("/n"), None);
  }
}

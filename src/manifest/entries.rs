//! Per-asset manifest lines and the heuristic source path lookup.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use indexmap::IndexSet;

/// One line of the file list describing a single output asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
  /// Output-relative asset name.
  pub name: String,
  /// Size rendered by [`super::format_size`].
  pub size: String,
  /// Matched source path, or empty when nothing matched.
  pub source_path: String,
}

impl fmt::Display for ManifestEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "  filename: {}    size: {}    sourcepath: {}",
      self.name, self.size, self.source_path
    )
  }
}

/// Find the first tracked path whose textual form contains `asset_name`.
///
/// This is plain substring containment, so `a.js` also matches `/src/ba.js`.
pub fn match_source_path<'a>(
  asset_name: &str,
  file_dependencies: &'a IndexSet<PathBuf>,
) -> Option<Cow<'a, str>> {
  file_dependencies
    .iter()
    .map(|path| path.to_string_lossy())
    .find(|path| path.contains(asset_name))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn deps(paths: &[&str]) -> IndexSet<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
  }

  #[test]
  fn returns_first_containing_path() {
    let deps = deps(&["/src/util.js", "/src/main.js", "/lib/main.js"]);
    let found = match_source_path("main.js", &deps);
    assert_eq!(found.as_deref(), Some("/src/main.js"));
  }

  #[test]
  fn returns_none_without_match() {
    let deps = deps(&["/src/util.js"]);
    assert!(match_source_path("main.js", &deps).is_none());
  }

  #[test]
  fn substring_matching_allows_partial_names() {
    let deps = deps(&["/src/ab.js", "/src/b.js"]);
    let found = match_source_path("b.js", &deps);
    assert_eq!(found.as_deref(), Some("/src/ab.js"));
  }

  #[test]
  fn renders_fixed_line_layout() {
    let entry = ManifestEntry {
      name: "main.js".into(),
      size: "500/bytes".into(),
      source_path: String::new(),
    };
    assert_eq!(
      entry.to_string(),
      "  filename: main.js    size: 500/bytes    sourcepath: "
    );
  }
}

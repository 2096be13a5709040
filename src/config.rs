//! Project configuration loader for the command-line host.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

/// File name searched for when no explicit configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "filelist.config.json";

/// Discoverable configuration describing where the build output lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
  /// Output directory holding the finalised build assets.
  pub output_dir: String,
  /// Source files that contributed to the build, in tracking order.
  pub dependencies: Vec<PathBuf>,
  /// Opaque options forwarded to the plugin constructor.
  pub options: Value,
}

impl Default for ProjectConfig {
  fn default() -> Self {
    Self {
      output_dir: "dist".into(),
      dependencies: Vec::new(),
      options: Value::Null,
    }
  }
}

impl ProjectConfig {
  /// Attempt to load configuration from the provided directory.
  ///
  /// A missing or unparsable file yields the defaults. Every field has a usable
  /// default and command-line flags can override the output directory and add
  /// dependencies, so the host still runs without a configuration file.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    Self::from_path(&candidate).unwrap_or_default()
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: &Path) -> Option<Self> {
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
  }

  /// Output directory resolved against `base`.
  pub fn output_dir_path(&self, base: &Path) -> PathBuf {
    base.join(&self.output_dir)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn falls_back_to_defaults_when_missing() {
    let dir = tempdir().unwrap();
    let config = ProjectConfig::discover(dir.path());

    assert_eq!(config.output_dir, "dist");
    assert!(config.dependencies.is_empty());
    assert!(config.options.is_null());
  }

  #[test]
  fn falls_back_to_defaults_when_malformed() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();

    let config = ProjectConfig::discover(dir.path());
    assert_eq!(config.output_dir, "dist");
  }

  #[test]
  fn reads_partial_configuration() {
    let dir = tempdir().unwrap();
    fs::write(
      dir.path().join(DEFAULT_CONFIG_FILE),
      r#"{"output_dir": "build", "options": {"verbose": true}}"#,
    )
    .unwrap();

    let config = ProjectConfig::discover(dir.path());
    assert_eq!(config.output_dir, "build");
    assert!(config.dependencies.is_empty());
    assert_eq!(config.options["verbose"], true);
    assert_eq!(config.output_dir_path(dir.path()), dir.path().join("build"));
  }
}

//! Errors surfaced to the host while running the emit hook.

use thiserror::Error;

/// Result type returned by emit hooks.
pub type EmitResult<T> = Result<T, EmitError>;

/// Failures raised while a plugin reads or produces assets.
#[derive(Debug, Error)]
pub enum EmitError {
  /// Reading an asset's content failed.
  #[error("failed to read content of asset `{name}`")]
  Content {
    /// Name of the asset whose content could not be read.
    name: String,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
  /// Determining an asset's size failed.
  #[error("failed to determine size of asset `{name}`")]
  Size {
    /// Name of the asset whose size could not be determined.
    name: String,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
  /// A registered plugin aborted the emit pass.
  #[error("plugin `{plugin}` failed during emit")]
  Plugin {
    /// Name the plugin was registered under.
    plugin: &'static str,
    /// Error returned by the plugin.
    #[source]
    source: Box<EmitError>,
  },
}

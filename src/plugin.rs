//! Emit-phase plugin that writes `fileList.txt` next to the build output.

use serde_json::Value;
use tracing::{debug, info};

use crate::compilation::Compilation;
use crate::compiler::Plugin;
use crate::error::EmitResult;
use crate::manifest::{FILE_LIST_NAME, generate_file_list};

/// Generates a text manifest of every emitted asset and adds it as `fileList.txt`.
#[derive(Debug, Clone, Default)]
pub struct FileListPlugin {
  options: Value,
}

impl FileListPlugin {
  /// Plugin name used when tapping the emit hook.
  pub const NAME: &'static str = "FileListPlugin";

  /// Create the plugin. Options are only logged; none are recognised.
  pub fn new(options: Value) -> Self {
    debug!(%options, "constructed {}", Self::NAME);
    Self { options }
  }

  /// Options supplied at construction.
  pub fn options(&self) -> &Value {
    &self.options
  }
}

impl Plugin for FileListPlugin {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn emit(&self, compilation: &mut Compilation) -> EmitResult<()> {
    let manifest = generate_file_list(compilation.assets(), compilation.file_dependencies())?;
    info!(
      assets = compilation.assets().len(),
      bytes = manifest.size(),
      "emitting {FILE_LIST_NAME}"
    );
    compilation.emit_asset(FILE_LIST_NAME, manifest.into_asset());
    Ok(())
  }
}

//! Per-build-pass context handed to emit hooks.

use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};

use crate::asset::Asset;

/// Output assets keyed by output-relative name, in insertion order.
pub type AssetMap = IndexMap<String, Box<dyn Asset>>;

/// Host-owned state of one build pass: finalised assets plus tracked source files.
#[derive(Debug, Default)]
pub struct Compilation {
  assets: AssetMap,
  file_dependencies: IndexSet<PathBuf>,
}

impl Compilation {
  /// Create an empty compilation.
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a compilation from an existing asset map and dependency set.
  pub fn from_parts(assets: AssetMap, file_dependencies: IndexSet<PathBuf>) -> Self {
    Self {
      assets,
      file_dependencies,
    }
  }

  /// All assets in emission order.
  pub fn assets(&self) -> &AssetMap {
    &self.assets
  }

  /// Look up a single asset by name.
  pub fn asset(&self, name: &str) -> Option<&dyn Asset> {
    self.assets.get(name).map(|asset| asset.as_ref())
  }

  /// Asset names in emission order.
  pub fn asset_names(&self) -> impl Iterator<Item = &str> {
    self.assets.keys().map(String::as_str)
  }

  /// Insert an asset, replacing any previous asset of the same name in place.
  ///
  /// Returns the replaced asset, if any.
  pub fn emit_asset(
    &mut self,
    name: impl Into<String>,
    asset: impl Asset + 'static,
  ) -> Option<Box<dyn Asset>> {
    self.assets.insert(name.into(), Box::new(asset))
  }

  /// Remove an asset, keeping the order of the remaining ones.
  pub fn remove_asset(&mut self, name: &str) -> Option<Box<dyn Asset>> {
    self.assets.shift_remove(name)
  }

  /// Source files that contributed to this build pass.
  pub fn file_dependencies(&self) -> &IndexSet<PathBuf> {
    &self.file_dependencies
  }

  /// Track a source file. Duplicates keep their first position.
  pub fn add_file_dependency(&mut self, path: impl Into<PathBuf>) -> bool {
    self.file_dependencies.insert(path.into())
  }
}

//! Assemble the file list text from the finalised asset map.

use std::path::PathBuf;

use indexmap::IndexSet;
use tracing::debug;

use crate::asset::{Asset, RawSource};
use crate::compilation::AssetMap;
use crate::error::{EmitError, EmitResult};
use crate::manifest::entries::{ManifestEntry, match_source_path};
use crate::manifest::format::format_size;

/// Reserved asset name the file list is emitted under.
pub const FILE_LIST_NAME: &str = "fileList.txt";

/// Rendered file list ready to be emitted as an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
  content: String,
}

impl Manifest {
  /// Text of the manifest.
  pub fn content(&self) -> &str {
    &self.content
  }

  /// UTF-8 byte length of the manifest text.
  pub fn size(&self) -> usize {
    self.content.len()
  }

  /// Convert into an in-memory asset.
  pub fn into_asset(self) -> RawSource {
    RawSource::from(self.content)
  }
}

/// Summarise every asset in `assets`, in map order, into a file list.
///
/// Each asset's content and size are read; the first failure aborts generation.
pub fn generate_file_list(
  assets: &AssetMap,
  file_dependencies: &IndexSet<PathBuf>,
) -> EmitResult<Manifest> {
  let mut lines = Vec::with_capacity(assets.len() + 2);
  lines.push(format!("文件数量：{}", assets.len()));
  lines.push("文件列表：".to_string());

  for (name, asset) in assets {
    asset.source().map_err(|source| EmitError::Content {
      name: name.clone(),
      source,
    })?;
    let size = asset.size().map_err(|source| EmitError::Size {
      name: name.clone(),
      source,
    })?;

    let entry = ManifestEntry {
      name: name.clone(),
      size: format_size(size),
      source_path: match_source_path(name, file_dependencies)
        .map(|path| path.into_owned())
        .unwrap_or_default(),
    };
    debug!(asset = %entry.name, size = %entry.size, source = %entry.source_path, "listed asset");
    lines.push(entry.to_string());
  }

  Ok(Manifest {
    content: lines.join("\n"),
  })
}

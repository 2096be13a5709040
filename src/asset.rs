//! Output assets exposed by the host to emit-phase plugins.

use std::borrow::Cow;
use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A named build output exposing its content and byte size.
///
/// Both accessors are fallible so hosts can back assets by files or other lazily
/// materialised storage.
pub trait Asset: Debug {
  /// Content payload of the asset.
  fn source(&self) -> io::Result<Cow<'_, [u8]>>;

  /// Size of the asset in bytes.
  fn size(&self) -> io::Result<usize>;
}

/// Asset held entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSource {
  content: Vec<u8>,
}

impl RawSource {
  /// Wrap the provided bytes.
  pub fn new(content: impl Into<Vec<u8>>) -> Self {
    Self {
      content: content.into(),
    }
  }

  /// Borrow the underlying bytes.
  pub fn as_bytes(&self) -> &[u8] {
    &self.content
  }
}

impl From<String> for RawSource {
  fn from(value: String) -> Self {
    Self::new(value)
  }
}

impl From<&str> for RawSource {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

impl Asset for RawSource {
  fn source(&self) -> io::Result<Cow<'_, [u8]>> {
    Ok(Cow::Borrowed(&self.content))
  }

  fn size(&self) -> io::Result<usize> {
    Ok(self.content.len())
  }
}

/// Asset backed by a file that is only read on demand.
#[derive(Debug, Clone)]
pub struct FileSource {
  path: PathBuf,
}

impl FileSource {
  /// Reference the file at `path`.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Location of the backing file.
  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl Asset for FileSource {
  fn source(&self) -> io::Result<Cow<'_, [u8]>> {
    fs::read(&self.path).map(Cow::Owned)
  }

  fn size(&self) -> io::Result<usize> {
    let len = fs::metadata(&self.path)?.len();
    usize::try_from(len).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn raw_source_reports_utf8_byte_length() {
    let source = RawSource::from("文件");
    assert_eq!(source.size().unwrap(), 6);
    assert_eq!(source.source().unwrap().as_ref(), "文件".as_bytes());
  }

  #[test]
  fn file_source_reads_lazily_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("main.js");
    let source = FileSource::new(&path);

    assert!(source.size().is_err());

    fs::write(&path, b"console.log(1)").unwrap();
    assert_eq!(source.size().unwrap(), 14);
    assert_eq!(source.source().unwrap().as_ref(), b"console.log(1)");
  }
}

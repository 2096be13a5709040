//! Filesystem host: load a built output directory and write emitted assets back.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexSet;
use serde_json::Value;
use tracing::{debug, info};

use crate::asset::{Asset, FileSource};
use crate::compilation::{AssetMap, Compilation};
use crate::compiler::Compiler;
use crate::manifest::FILE_LIST_NAME;
use crate::plugin::FileListPlugin;

/// Result of running the emit hook over an output directory.
#[derive(Debug)]
pub struct EmitPass {
  output_dir: PathBuf,
  compilation: Compilation,
  emitted: Vec<String>,
}

impl EmitPass {
  /// Compilation after every plugin has run.
  pub fn compilation(&self) -> &Compilation {
    &self.compilation
  }

  /// Names of assets that were not on disk before the pass.
  pub fn emitted(&self) -> impl Iterator<Item = &str> {
    self.emitted.iter().map(String::as_str)
  }

  /// Text of the generated file list.
  pub fn file_list(&self) -> Result<String> {
    let asset = self
      .compilation
      .asset(FILE_LIST_NAME)
      .with_context(|| format!("{FILE_LIST_NAME} was not emitted"))?;
    let content = asset
      .source()
      .with_context(|| format!("failed to read {FILE_LIST_NAME}"))?;
    String::from_utf8(content.into_owned())
      .with_context(|| format!("{FILE_LIST_NAME} is not valid UTF-8"))
  }

  /// Write the newly emitted assets back into the output directory.
  pub fn write(&self) -> Result<Vec<PathBuf>> {
    let written = write_assets(&self.compilation, self.emitted(), &self.output_dir)?;
    info!(files = written.len(), dir = %self.output_dir.display(), "wrote emitted assets");
    Ok(written)
  }
}

/// Run the file list plugin over the files already in `output_dir`.
///
/// A `fileList.txt` left by a previous run is dropped before the emit hook fires,
/// so it is neither listed nor counted. Nothing is written to disk.
pub fn run_pass(
  output_dir: &Path,
  file_dependencies: impl IntoIterator<Item = PathBuf>,
  options: Value,
) -> Result<EmitPass> {
  let mut compilation = load_output_dir(output_dir, file_dependencies)?;
  if compilation.remove_asset(FILE_LIST_NAME).is_some() {
    debug!("discarded {FILE_LIST_NAME} left by a previous run");
  }
  let before: BTreeSet<String> = compilation.asset_names().map(str::to_owned).collect();

  let mut compiler = Compiler::new();
  compiler.apply(FileListPlugin::new(options));
  compiler.emit(&mut compilation)?;

  let emitted = compilation
    .asset_names()
    .filter(|name| !before.contains(*name))
    .map(str::to_owned)
    .collect();

  Ok(EmitPass {
    output_dir: output_dir.to_path_buf(),
    compilation,
    emitted,
  })
}

/// Combine tracked source paths: configured ones, then the list file, then extras.
pub fn merge_dependencies(
  configured: &[PathBuf],
  list_file: Option<&Path>,
  extra: &[PathBuf],
) -> Result<Vec<PathBuf>> {
  let mut dependencies = configured.to_vec();
  if let Some(path) = list_file {
    dependencies.extend(read_dependency_list(path)?);
  }
  dependencies.extend(extra.iter().cloned());
  Ok(dependencies)
}

/// Build a compilation from the files under `output_dir`.
///
/// Assets are named by their forward-slash path relative to `output_dir` and
/// inserted in sorted order. Hidden files and directories are skipped.
pub fn load_output_dir(
  output_dir: &Path,
  file_dependencies: impl IntoIterator<Item = PathBuf>,
) -> Result<Compilation> {
  let mut found = BTreeMap::new();
  collect_files(output_dir, Path::new(""), &mut found)?;

  let assets: AssetMap = found
    .into_iter()
    .map(|(name, path)| (name, Box::new(FileSource::new(path)) as Box<dyn Asset>))
    .collect();
  let file_dependencies: IndexSet<PathBuf> = file_dependencies.into_iter().collect();
  debug!(
    dir = %output_dir.display(),
    assets = assets.len(),
    dependencies = file_dependencies.len(),
    "loaded output directory"
  );

  Ok(Compilation::from_parts(assets, file_dependencies))
}

fn collect_files(
  root: &Path,
  relative: &Path,
  found: &mut BTreeMap<String, PathBuf>,
) -> Result<()> {
  let current = root.join(relative);
  let entries =
    fs::read_dir(&current).with_context(|| format!("failed to read {}", current.display()))?;

  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read {}", current.display()))?;
    let file_name = entry.file_name();
    if file_name.to_string_lossy().starts_with('.') {
      continue;
    }

    let child_relative = relative.join(&file_name);
    let file_type = entry
      .file_type()
      .with_context(|| format!("failed to inspect {}", entry.path().display()))?;
    if file_type.is_dir() {
      collect_files(root, &child_relative, found)?;
    } else if file_type.is_file() {
      let name = child_relative.to_string_lossy().replace('\\', "/");
      found.insert(name, entry.path());
    } else {
      debug!(path = %entry.path().display(), "skipped entry that is neither file nor directory");
    }
  }

  Ok(())
}

/// Read a newline separated list of dependency paths, ignoring blank lines.
pub fn read_dependency_list(path: &Path) -> Result<Vec<PathBuf>> {
  let content =
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  Ok(
    content
      .lines()
      .map(str::trim)
      .filter(|line| !line.is_empty())
      .map(PathBuf::from)
      .collect(),
  )
}

/// Write the named assets of `compilation` into `output_dir`.
pub fn write_assets<'a>(
  compilation: &Compilation,
  names: impl IntoIterator<Item = &'a str>,
  output_dir: &Path,
) -> Result<Vec<PathBuf>> {
  let mut written = Vec::new();
  for name in names {
    let Some(asset) = compilation.asset(name) else {
      continue;
    };
    let destination = output_dir.join(name);
    if let Some(parent) = destination.parent() {
      fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let content = asset
      .source()
      .with_context(|| format!("failed to read asset {name}"))?;
    fs::write(&destination, &*content)
      .with_context(|| format!("failed to write {}", destination.display()))?;
    debug!(path = %destination.display(), "wrote asset");
    written.push(destination);
  }
  Ok(written)
}

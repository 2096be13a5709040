//! File list manifest generation split into formatting, matching and assembly.

mod entries;
mod format;
mod generation;

pub use entries::{ManifestEntry, match_source_path};
pub use format::format_size;
pub use generation::{FILE_LIST_NAME, Manifest, generate_file_list};

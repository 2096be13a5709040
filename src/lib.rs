#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset;
pub mod compilation;
pub mod compiler;
pub mod config;
pub mod error;
pub mod manifest;
pub mod output;
pub mod plugin;

pub use asset::{Asset, FileSource, RawSource};
pub use compilation::{AssetMap, Compilation};
pub use compiler::{Compiler, Plugin};
pub use error::{EmitError, EmitResult};
pub use manifest::{FILE_LIST_NAME, Manifest, generate_file_list};
pub use plugin::FileListPlugin;

//! Command-line host that runs the file list plugin over a built output directory.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use filelist_manifest::config::ProjectConfig;
use filelist_manifest::output::{merge_dependencies, run_pass};

#[derive(Debug, Parser)]
#[command(name = "filelist-manifest", version, about)]
struct Cli {
  /// Output directory to summarise.
  #[arg(long)]
  dist: Option<PathBuf>,
  /// Tracked source path; may be repeated.
  #[arg(long = "dependency", value_name = "PATH")]
  dependencies: Vec<PathBuf>,
  /// File listing tracked source paths, one per line.
  #[arg(long, value_name = "FILE")]
  dependencies_file: Option<PathBuf>,
  /// Configuration file; defaults to `filelist.config.json` in the working directory.
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,
  /// Print the manifest instead of writing it.
  #[arg(long)]
  dry_run: bool,
  /// Enable debug logging.
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let cwd = std::env::current_dir().context("failed to resolve working directory")?;
  let config = match &cli.config {
    Some(path) => ProjectConfig::from_path(path)
      .with_context(|| format!("failed to load config from {}", path.display()))?,
    None => ProjectConfig::discover(&cwd),
  };

  let output_dir = cli
    .dist
    .clone()
    .unwrap_or_else(|| config.output_dir_path(&cwd));

  let dependencies = merge_dependencies(
    &config.dependencies,
    cli.dependencies_file.as_deref(),
    &cli.dependencies,
  )?;
  let pass = run_pass(&output_dir, dependencies, config.options.clone())?;

  if cli.dry_run {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", pass.file_list()?)?;
    return Ok(());
  }

  pass.write()?;
  Ok(())
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

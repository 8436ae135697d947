use std::path::PathBuf;

use clap::Args;

use crate::types::output_format::OutputFormat;

#[derive(Args)]
pub struct InputArgs {
  /// Configuration file whose grandparent directory is the project root.
  #[clap(long, short = 'c', conflicts_with = "root")]
  pub config: Option<PathBuf>,

  /// Project root, used in place of `--config`.
  #[clap(long)]
  pub root: Option<PathBuf>,

  /// Manifest to load instead of the `packconf.toml` next to the configuration file.
  #[clap(long, short = 'm')]
  pub manifest: Option<PathBuf>,

  #[clap(long, short = 'i')]
  pub input: Option<String>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'o')]
  pub file: Option<String>,

  #[clap(long, short = 'f')]
  pub format: Option<OutputFormat>,

  /// Print the descriptor on a single line.
  #[clap(long)]
  pub compact: bool,
}

#[derive(Args)]
pub struct PluginArgs {
  /// Preset of the babel plugin. Repeat to pass several.
  #[clap(long = "preset", action = clap::ArgAction::Append)]
  pub presets: Option<Vec<String>>,
}

use std::path::Path;

use packconf_common::{BuildConfig, BuildConfigOptions};
use packconf_error::BuildResult;

use crate::{PathResolver, normalize_options};

/// The canonical descriptor: `src/index.js` bundled to `dist/index.js` as UMD, transpiled by babel
/// with `@babel/preset-env`.
///
/// Built fresh on every call. Nothing is read from disk.
pub fn define_config(resolver: &PathResolver) -> BuildResult<BuildConfig> {
  normalize_options(BuildConfigOptions::default(), resolver)
}

/// Shorthand for resolving the project root from the configuration file's own location and
/// assembling the descriptor with `options` applied.
pub fn define_config_from_file(
  config_file: impl AsRef<Path>,
  options: BuildConfigOptions,
) -> BuildResult<BuildConfig> {
  let resolver = PathResolver::from_config_file(config_file)?;
  normalize_options(options, &resolver)
}

mod define_config;
mod manifest;
mod path_resolver;
mod utils;

pub use crate::{
  define_config::{define_config, define_config_from_file},
  manifest::{MANIFEST_FILE_NAME, find_manifest, load_options, parse_options},
  path_resolver::PathResolver,
  utils::normalize_options::normalize_options,
};
pub use packconf_common::*;
pub use packconf_error::{BuildError, BuildResult};

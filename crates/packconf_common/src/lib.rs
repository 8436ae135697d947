mod bundler_options;

pub use bundler_options::{
  build_config::{BuildConfig, OutputOptions},
  output_format::OutputFormat,
  plugin_descriptor::{BABEL_PLUGIN_NAME, PluginDescriptor, PluginOptions, RawPluginDescriptor},
  BuildConfigOptions, RawOutputOptions, DEFAULT_FORMAT, DEFAULT_INPUT, DEFAULT_OUTPUT_FILE,
  DEFAULT_PRESETS,
};

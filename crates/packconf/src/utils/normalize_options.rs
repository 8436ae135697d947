use anyhow::{Context, anyhow};

use packconf_common::{
  BuildConfig, BuildConfigOptions, DEFAULT_INPUT, DEFAULT_OUTPUT_FILE, DEFAULT_PRESETS,
  OutputOptions, PluginDescriptor,
};
use packconf_error::BuildResult;

use crate::PathResolver;

/// Fills every unset option with its canonical value and resolves both paths against the project
/// root. Problems are collected, so a bad `input` does not hide a bad `output.file`.
pub fn normalize_options(
  raw_options: BuildConfigOptions,
  resolver: &PathResolver,
) -> BuildResult<BuildConfig> {
  let mut errors = vec![];
  let format = raw_options.resolved_format();

  let input = resolver
    .resolve(raw_options.input.as_deref().unwrap_or(DEFAULT_INPUT))
    .context("Invalid `input` option")
    .map_err(|err| errors.push(err))
    .ok();

  let file = resolver
    .resolve(raw_options.output.file.as_deref().unwrap_or(DEFAULT_OUTPUT_FILE))
    .context("Invalid `output.file` option")
    .map_err(|err| errors.push(err))
    .ok();

  let plugins = match raw_options.plugins {
    Some(plugins) => plugins.into_iter().map(PluginDescriptor::from).collect::<Vec<_>>(),
    None => vec![PluginDescriptor::babel(
      raw_options.presets.unwrap_or_else(|| DEFAULT_PRESETS.map(String::from).to_vec()),
    )],
  };

  for (index, plugin) in plugins.iter().enumerate() {
    if plugin.name.trim().is_empty() {
      errors.push(anyhow!("Plugin at index {index} has an empty name"));
    }
  }

  match (input, file) {
    (Some(input), Some(file)) if errors.is_empty() => {
      let config = BuildConfig { input, output: OutputOptions { file, format }, plugins };
      log::debug!("Normalized build config: {config:?}");
      Ok(config)
    }
    _ => Err(errors.into()),
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use packconf_common::{OutputFormat, RawOutputOptions, RawPluginDescriptor};

  use super::*;

  fn resolver() -> PathResolver {
    PathResolver::from_root("/project").unwrap()
  }

  #[test]
  fn unset_options_take_canonical_values() {
    let config = normalize_options(BuildConfigOptions::default(), &resolver()).unwrap();
    assert_eq!(config.input, Path::new("/project/src/index.js"));
    assert_eq!(config.output.file, Path::new("/project/dist/index.js"));
    assert_eq!(config.output.format, OutputFormat::Umd);
    assert_eq!(config.plugins, vec![PluginDescriptor::babel(["@babel/preset-env"])]);
  }

  #[test]
  fn explicit_plugins_replace_default_babel() {
    let options = BuildConfigOptions {
      presets: Some(vec!["ignored".to_string()]),
      plugins: Some(vec![
        RawPluginDescriptor { name: "babel".to_string(), presets: vec!["a".to_string()] },
        RawPluginDescriptor { name: "terser".to_string(), presets: vec![] },
      ]),
      ..Default::default()
    };
    let config = normalize_options(options, &resolver()).unwrap();
    assert_eq!(
      config.plugins,
      vec![PluginDescriptor::babel(["a"]), PluginDescriptor::new("terser", vec![])]
    );
  }

  #[test]
  fn empty_preset_list_is_kept() {
    let options = BuildConfigOptions { presets: Some(vec![]), ..Default::default() };
    let config = normalize_options(options, &resolver()).unwrap();
    assert_eq!(config.plugins, vec![PluginDescriptor::babel(Vec::<String>::new())]);
  }

  #[test]
  fn every_invalid_option_is_reported() {
    let options = BuildConfigOptions {
      input: Some("/abs/entry.js".to_string()),
      output: RawOutputOptions { file: Some("/abs/out.js".to_string()), format: None },
      plugins: Some(vec![RawPluginDescriptor { name: " ".to_string(), presets: vec![] }]),
      ..Default::default()
    };
    let errors = normalize_options(options, &resolver()).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].to_string(), "Invalid `input` option");
    assert_eq!(errors[1].to_string(), "Invalid `output.file` option");
    assert_eq!(errors[2].to_string(), "Plugin at index 0 has an empty name");
  }
}

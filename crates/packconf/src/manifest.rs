use std::path::{Path, PathBuf};

use anyhow::Context;

use packconf_common::BuildConfigOptions;

pub const MANIFEST_FILE_NAME: &str = "packconf.toml";

pub fn parse_options(source: &str) -> anyhow::Result<BuildConfigOptions> {
  Ok(toml::from_str(source)?)
}

pub fn load_options(path: &Path) -> anyhow::Result<BuildConfigOptions> {
  let source = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read manifest {}", path.display()))?;
  let options =
    parse_options(&source).with_context(|| format!("Failed to parse manifest {}", path.display()))?;
  log::debug!("Loaded manifest {}", path.display());
  Ok(options)
}

/// The manifest sitting next to `config_file`, if there is one.
pub fn find_manifest(config_file: &Path) -> Option<PathBuf> {
  let manifest = config_file.parent()?.join(MANIFEST_FILE_NAME);
  manifest.is_file().then_some(manifest)
}

#[cfg(test)]
mod tests {
  use packconf_common::{OutputFormat, RawPluginDescriptor};

  use super::*;

  #[test]
  fn parse_full_manifest() {
    let options = parse_options(
      r#"
input = "src/main.js"
format = "esm"
presets = ["@babel/preset-env", "@babel/preset-react"]

[output]
file = "build/bundle.js"
format = "iife"

[[plugins]]
name = "babel"
presets = ["@babel/preset-env"]
"#,
    )
    .unwrap();

    assert_eq!(options.input.as_deref(), Some("src/main.js"));
    assert_eq!(options.format, Some(OutputFormat::Es));
    assert_eq!(options.output.file.as_deref(), Some("build/bundle.js"));
    assert_eq!(options.resolved_format(), OutputFormat::Iife);
    assert_eq!(
      options.plugins,
      Some(vec![RawPluginDescriptor {
        name: "babel".to_string(),
        presets: vec!["@babel/preset-env".to_string()]
      }])
    );
  }

  #[test]
  fn empty_manifest_sets_nothing() {
    assert_eq!(parse_options("").unwrap(), BuildConfigOptions::default());
  }

  #[test]
  fn unknown_keys_are_rejected() {
    assert!(parse_options("entry = \"src/index.js\"").is_err());
    assert!(parse_options("[output]\ndir = \"dist\"").is_err());
  }

  #[test]
  fn format_aliases() {
    assert_eq!(parse_options("format = \"module\"").unwrap().resolved_format(), OutputFormat::Es);
    assert_eq!(parse_options("format = \"commonjs\"").unwrap().resolved_format(), OutputFormat::Cjs);
  }

  #[test]
  fn unknown_format_is_rejected() {
    assert!(parse_options("format = \"amd\"").is_err());
  }
}

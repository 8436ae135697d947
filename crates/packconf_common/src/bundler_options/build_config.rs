use std::path::PathBuf;

use serde::{Serialize, Serializer};

use packconf_utils::path_ext::PathExt;

use crate::{OutputFormat, PluginDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputOptions {
  #[serde(serialize_with = "serialize_slash_path")]
  pub file: PathBuf,
  pub format: OutputFormat,
}

/// The record handed to the bundler. Both paths are absolute.
///
/// Field order is also the serialized key order, so re-serializing an equal record always yields
/// the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
  #[serde(serialize_with = "serialize_slash_path")]
  pub input: PathBuf,
  pub output: OutputOptions,
  pub plugins: Vec<PluginDescriptor>,
}

impl BuildConfig {
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }

  pub fn to_json_pretty(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

#[allow(clippy::ptr_arg)] // `serialize_with` hands over the field type as is
fn serialize_slash_path<S: Serializer>(path: &PathBuf, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&path.to_slash_string())
}

#[test]
fn test_to_json_shape() {
  let config = BuildConfig {
    input: PathBuf::from("/p/src/index.js"),
    output: OutputOptions { file: PathBuf::from("/p/dist/index.js"), format: OutputFormat::Umd },
    plugins: vec![PluginDescriptor::babel(["@babel/preset-env"])],
  };

  assert_eq!(
    config.to_json().unwrap(),
    r#"{"input":"/p/src/index.js","output":{"file":"/p/dist/index.js","format":"umd"},"plugins":[{"name":"babel","options":{"presets":["@babel/preset-env"]}}]}"#
  );
}

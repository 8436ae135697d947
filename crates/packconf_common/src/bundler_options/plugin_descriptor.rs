use serde::{Deserialize, Serialize};

pub const BABEL_PLUGIN_NAME: &str = "babel";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PluginOptions {
  /// Preset names handed to the plugin, in application order.
  pub presets: Vec<String>,
}

/// One entry of the plugin pipeline: which transform to invoke and with what options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginDescriptor {
  pub name: String,
  pub options: PluginOptions,
}

impl PluginDescriptor {
  pub fn new(name: impl Into<String>, presets: Vec<String>) -> Self {
    Self { name: name.into(), options: PluginOptions { presets } }
  }

  pub fn babel<I, S>(presets: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::new(BABEL_PLUGIN_NAME, presets.into_iter().map(Into::into).collect())
  }
}

/// A plugin as written in a manifest: the presets sit next to the name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPluginDescriptor {
  pub name: String,
  #[serde(default)]
  pub presets: Vec<String>,
}

impl From<RawPluginDescriptor> for PluginDescriptor {
  fn from(raw: RawPluginDescriptor) -> Self {
    Self::new(raw.name, raw.presets)
  }
}

#[test]
fn test_babel_descriptor() {
  let plugin = PluginDescriptor::babel(["@babel/preset-env"]);
  assert_eq!(plugin.name, "babel");
  assert_eq!(plugin.options.presets, vec!["@babel/preset-env".to_string()]);
}

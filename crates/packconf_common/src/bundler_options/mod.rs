pub mod build_config;
pub mod output_format;
pub mod plugin_descriptor;

use serde::Deserialize;

use crate::{OutputFormat, RawPluginDescriptor};

pub const DEFAULT_INPUT: &str = "src/index.js";
pub const DEFAULT_OUTPUT_FILE: &str = "dist/index.js";
pub const DEFAULT_FORMAT: OutputFormat = OutputFormat::Umd;
pub const DEFAULT_PRESETS: [&str; 1] = ["@babel/preset-env"];

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawOutputOptions {
  pub file: Option<String>,
  pub format: Option<OutputFormat>,
}

/// Unresolved options. Every `None` falls back to the canonical descriptor value.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfigOptions {
  // --- Input
  pub input: Option<String>,

  // --- Output
  #[serde(default)]
  pub output: RawOutputOptions,
  /// Shorthand for `output.format`, which wins when both are set.
  pub format: Option<OutputFormat>,

  // --- Plugins
  /// Presets of the default babel plugin. Ignored when `plugins` is set.
  pub presets: Option<Vec<String>>,
  pub plugins: Option<Vec<RawPluginDescriptor>>,
}

impl BuildConfigOptions {
  /// Field-wise merge where every value set in `overrides` replaces the one in `self`.
  pub fn with_overrides(self, overrides: Self) -> Self {
    Self {
      input: overrides.input.or(self.input),
      output: RawOutputOptions {
        file: overrides.output.file.or(self.output.file),
        format: overrides.output.format.or(self.output.format),
      },
      format: overrides.format.or(self.format),
      presets: overrides.presets.or(self.presets),
      plugins: overrides.plugins.or(self.plugins),
    }
  }

  pub fn resolved_format(&self) -> OutputFormat {
    self.output.format.or(self.format).unwrap_or(DEFAULT_FORMAT)
  }
}

#[test]
fn test_with_overrides() {
  let base = BuildConfigOptions {
    input: Some("lib/main.js".to_string()),
    format: Some(OutputFormat::Es),
    presets: Some(vec!["a".to_string()]),
    ..Default::default()
  };
  let overrides = BuildConfigOptions {
    output: RawOutputOptions { file: Some("out.js".to_string()), format: None },
    presets: Some(vec!["b".to_string()]),
    ..Default::default()
  };

  let merged = base.with_overrides(overrides);
  assert_eq!(merged.input.as_deref(), Some("lib/main.js"));
  assert_eq!(merged.output.file.as_deref(), Some("out.js"));
  assert_eq!(merged.presets, Some(vec!["b".to_string()]));
  assert_eq!(merged.resolved_format(), OutputFormat::Es);
}

#[test]
fn test_resolved_format_precedence() {
  let options = BuildConfigOptions {
    format: Some(OutputFormat::Es),
    output: RawOutputOptions { file: None, format: Some(OutputFormat::Iife) },
    ..Default::default()
  };
  assert_eq!(options.resolved_format(), OutputFormat::Iife);
  assert_eq!(BuildConfigOptions::default().resolved_format(), OutputFormat::Umd);
}

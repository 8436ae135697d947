use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Module format of the emitted bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// Universal module definition: works as a script-tag global, with `require` and with AMD.
  #[default]
  Umd,
  #[serde(alias = "esm", alias = "module")]
  Es,
  #[serde(alias = "commonjs")]
  Cjs,
  Iife,
}

impl OutputFormat {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Umd => "umd",
      Self::Es => "es",
      Self::Cjs => "cjs",
      Self::Iife => "iife",
    }
  }
}

impl FromStr for OutputFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "umd" => Ok(Self::Umd),
      "es" | "esm" | "module" => Ok(Self::Es),
      "cjs" | "commonjs" => Ok(Self::Cjs),
      "iife" => Ok(Self::Iife),
      _ => Err(format!("Invalid format \"{s}\".")),
    }
  }
}

impl Display for OutputFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[test]
fn test_output_format_from_str() {
  assert_eq!("umd".parse(), Ok(OutputFormat::Umd));
  assert_eq!("esm".parse(), Ok(OutputFormat::Es));
  assert_eq!("commonjs".parse(), Ok(OutputFormat::Cjs));
  assert_eq!("amd".parse::<OutputFormat>(), Err("Invalid format \"amd\".".to_string()));

  for format in [OutputFormat::Umd, OutputFormat::Es, OutputFormat::Cjs, OutputFormat::Iife] {
    assert_eq!(format.to_string().parse(), Ok(format));
  }
}

#[test]
fn test_output_format_default() {
  assert_eq!(OutputFormat::default(), OutputFormat::Umd);
}

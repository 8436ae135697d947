use clap::ValueEnum;

#[derive(Debug, PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OutputFormat {
  Umd,
  #[value(alias = "esm", alias = "module")]
  Es,
  #[value(alias = "commonjs")]
  Cjs,
  Iife,
}

impl From<OutputFormat> for packconf::OutputFormat {
  fn from(value: OutputFormat) -> Self {
    match value {
      OutputFormat::Umd => packconf::OutputFormat::Umd,
      OutputFormat::Es => packconf::OutputFormat::Es,
      OutputFormat::Cjs => packconf::OutputFormat::Cjs,
      OutputFormat::Iife => packconf::OutputFormat::Iife,
    }
  }
}

mod args;
mod types;

use std::{path::PathBuf, process::ExitCode};

use ansi_term::Colour;
use args::{InputArgs, OutputArgs, PluginArgs};
use clap::Parser;

use packconf::{
  BuildConfigOptions, BuildResult, RawOutputOptions, define_config_from_file, find_manifest,
  load_options,
};

const DEFAULT_CONFIG_FILE: &str = "build/packconf.config";

#[derive(Parser)]
#[command(version, about = "Print the build descriptor handed to the bundler", long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  plugins: PluginArgs,

  /// Log resolution details to stderr. `RUST_LOG` takes precedence.
  #[clap(long, short = 'v')]
  verbose: bool,
}

impl Commands {
  fn config_file(&self) -> PathBuf {
    match (&self.input.root, &self.input.config) {
      (Some(root), _) => root.join(DEFAULT_CONFIG_FILE),
      (None, Some(config)) => config.clone(),
      (None, None) => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
  }

  fn flag_options(&self) -> BuildConfigOptions {
    BuildConfigOptions {
      input: self.input.input.clone(),
      output: RawOutputOptions {
        file: self.output.file.clone(),
        format: self.output.format.clone().map(Into::into),
      },
      presets: self.plugins.presets.clone(),
      ..Default::default()
    }
  }
}

fn run(args: &Commands) -> BuildResult<String> {
  let config_file = args.config_file();

  let manifest = args.input.manifest.clone().or_else(|| find_manifest(&config_file));
  let manifest_options = match manifest {
    Some(path) => {
      log::info!("Using manifest {}", path.display());
      load_options(&path)?
    }
    None => BuildConfigOptions::default(),
  };

  let config =
    define_config_from_file(&config_file, manifest_options.with_overrides(args.flag_options()))?;

  let json = if args.output.compact { config.to_json() } else { config.to_json_pretty() };
  json.map_err(|err| anyhow::Error::from(err).into())
}

fn main() -> ExitCode {
  let args = Commands::parse();

  let default_filter = if args.verbose { "debug" } else { "warn" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
    .init();

  match run(&args) {
    Ok(json) => {
      println!("{json}");
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}

#[test]
fn test_config_file_selection() {
  let args = Commands::try_parse_from(["packconf"]).unwrap();
  assert_eq!(args.config_file(), PathBuf::from(DEFAULT_CONFIG_FILE));

  let args = Commands::try_parse_from(["packconf", "--root", "/project"]).unwrap();
  assert_eq!(args.config_file(), PathBuf::from("/project/build/packconf.config"));

  let args = Commands::try_parse_from(["packconf", "-c", "/p/cfg/rollup.config"]).unwrap();
  assert_eq!(args.config_file(), PathBuf::from("/p/cfg/rollup.config"));

  assert!(Commands::try_parse_from(["packconf", "--root", "/p", "--config", "/q/c"]).is_err());
}

#[test]
fn test_flag_options() {
  let args = Commands::try_parse_from([
    "packconf", "--format", "esm", "-o", "out.js", "--preset", "a", "--preset", "b",
  ])
  .unwrap();
  let options = args.flag_options();

  assert_eq!(options.input, None);
  assert_eq!(options.output.file.as_deref(), Some("out.js"));
  assert_eq!(options.resolved_format(), packconf::OutputFormat::Es);
  assert_eq!(options.presets, Some(vec!["a".to_string(), "b".to_string()]));

  let args = Commands::try_parse_from(["packconf", "--format", "module"]).unwrap();
  assert_eq!(args.flag_options().resolved_format(), packconf::OutputFormat::Es);

  let args = Commands::try_parse_from(["packconf", "--format", "commonjs"]).unwrap();
  assert_eq!(args.flag_options().resolved_format(), packconf::OutputFormat::Cjs);
}

#[test]
fn test_run_with_root() {
  let args = Commands::try_parse_from(["packconf", "--root", "/project", "--compact"]).unwrap();
  assert_eq!(
    run(&args).unwrap(),
    r#"{"input":"/project/src/index.js","output":{"file":"/project/dist/index.js","format":"umd"},"plugins":[{"name":"babel","options":{"presets":["@babel/preset-env"]}}]}"#
  );
}

#[test]
fn test_run_reports_invalid_flags() {
  let args =
    Commands::try_parse_from(["packconf", "--root", "/project", "--input", "/abs.js"]).unwrap();
  let errors = run(&args).unwrap_err();
  assert_eq!(errors.len(), 1);
  assert_eq!(errors[0].to_string(), "Invalid `input` option");

  let args = Commands::try_parse_from([
    "packconf", "--root", "/project", "--input", "/abs.js", "--file", "/abs/out.js",
  ])
  .unwrap();
  let errors = run(&args).unwrap_err();
  assert_eq!(errors.len(), 2);
  assert_eq!(errors[1].to_string(), "Invalid `output.file` option");
  assert_eq!(
    errors.to_string(),
    "Invalid `input` option: Expected a path relative to the project root, got \"/abs.js\"\n\
     Invalid `output.file` option: Expected a path relative to the project root, got \"/abs/out.js\""
  );
}

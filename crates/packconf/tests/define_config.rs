use std::path::Path;

use packconf::{
  BuildConfigOptions, OutputFormat, PathResolver, PluginDescriptor, RawOutputOptions,
  define_config, define_config_from_file, find_manifest, load_options, normalize_options,
};
use pretty_assertions::assert_eq;

#[test]
fn canonical_descriptor() {
  for root in ["/project", "/home/user/work/app", "/a/b/../c"] {
    let resolver = PathResolver::from_root(root).unwrap();
    let config = define_config(&resolver).unwrap();

    assert_eq!(config.input, resolver.root().join("src").join("index.js"));
    assert_eq!(config.output.file, resolver.root().join("dist").join("index.js"));
    assert_eq!(config.output.format, OutputFormat::Umd);
    assert_eq!(config.plugins.len(), 1);
    assert_eq!(config.plugins[0].options.presets, vec!["@babel/preset-env".to_string()]);
  }
}

#[test]
fn root_is_parent_of_config_directory() {
  let config = define_config_from_file("/repo/build/packconf.config", BuildConfigOptions::default())
    .unwrap();
  assert_eq!(config.input, Path::new("/repo/src/index.js"));
  assert_eq!(config.output.file, Path::new("/repo/dist/index.js"));
}

#[test]
fn repeated_construction_is_byte_identical() {
  let resolver = PathResolver::from_root("/project").unwrap();
  let first = define_config(&resolver).unwrap();
  let second = define_config(&resolver).unwrap();

  assert_eq!(first, second);
  assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
  assert_eq!(first.to_json_pretty().unwrap(), second.to_json_pretty().unwrap());
}

#[test]
fn emitted_json_matches_bundler_shape() {
  let resolver = PathResolver::from_root("/project").unwrap();
  let json = define_config(&resolver).unwrap().to_json_pretty().unwrap();
  let value: serde_json::Value = serde_json::from_str(&json).unwrap();

  assert_eq!(
    value,
    serde_json::json!({
      "input": "/project/src/index.js",
      "output": { "file": "/project/dist/index.js", "format": "umd" },
      "plugins": [{ "name": "babel", "options": { "presets": ["@babel/preset-env"] } }],
    })
  );
}

#[test]
fn manifest_next_to_config_overrides_defaults() {
  let dir = tempfile::tempdir().unwrap();
  let build_dir = dir.path().join("build");
  std::fs::create_dir_all(&build_dir).unwrap();
  let config_file = build_dir.join("packconf.config");
  std::fs::write(
    build_dir.join("packconf.toml"),
    "input = \"lib/main.js\"\n\n[output]\nformat = \"cjs\"\n",
  )
  .unwrap();

  let manifest = find_manifest(&config_file).unwrap();
  let options = load_options(&manifest).unwrap();
  let config = define_config_from_file(&config_file, options).unwrap();

  let root = PathResolver::from_config_file(&config_file).unwrap().root().to_path_buf();
  assert_eq!(config.input, root.join("lib").join("main.js"));
  assert_eq!(config.output.file, root.join("dist").join("index.js"));
  assert_eq!(config.output.format, OutputFormat::Cjs);
  assert_eq!(config.plugins, vec![PluginDescriptor::babel(["@babel/preset-env"])]);
}

#[test]
fn missing_manifest() {
  let dir = tempfile::tempdir().unwrap();
  let config_file = dir.path().join("build").join("packconf.config");

  assert_eq!(find_manifest(&config_file), None);

  let err = load_options(&dir.path().join("packconf.toml")).unwrap_err();
  assert!(err.to_string().starts_with("Failed to read manifest"));
}

#[test]
fn malformed_manifest_names_the_file() {
  let dir = tempfile::tempdir().unwrap();
  let manifest = dir.path().join("packconf.toml");
  std::fs::write(&manifest, "input = [").unwrap();

  let err = load_options(&manifest).unwrap_err();
  assert_eq!(err.to_string(), format!("Failed to parse manifest {}", manifest.display()));
}

#[test]
fn cli_style_overrides_win_over_manifest() {
  let manifest = packconf::parse_options("format = \"es\"\npresets = [\"x\"]\n").unwrap();
  let flags = BuildConfigOptions {
    output: RawOutputOptions { file: Some("out/bundle.js".to_string()), format: None },
    presets: Some(vec!["y".to_string()]),
    ..Default::default()
  };

  let resolver = PathResolver::from_root("/project").unwrap();
  let config = normalize_options(manifest.with_overrides(flags), &resolver).unwrap();

  assert_eq!(config.output.file, Path::new("/project/out/bundle.js"));
  assert_eq!(config.output.format, OutputFormat::Es);
  assert_eq!(config.plugins, vec![PluginDescriptor::babel(["y"])]);
}

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

use packconf_utils::path_ext::PathExt;

/// Turns fragments relative to the project root into absolute paths.
///
/// The project root is the directory one level above the one holding the configuration file. It
/// is fixed at construction; `resolve` never looks at the current directory or the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
  root: PathBuf,
}

impl PathResolver {
  /// A relative `config_file` is taken relative to the current directory, once, here.
  pub fn from_config_file(config_file: impl AsRef<Path>) -> anyhow::Result<Self> {
    let config_file = absolutize(config_file.as_ref())?;
    let Some(config_dir) = config_file.parent() else {
      bail!("Cannot determine the directory of config file {:?}", config_file.display());
    };
    Self::from_config_dir(config_dir)
  }

  pub fn from_config_dir(config_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
    let config_dir = absolutize(config_dir.as_ref())?;
    let Some(root) = config_dir.parent() else {
      bail!("Cannot determine project root: {:?} has no parent directory", config_dir.display());
    };
    log::debug!("Project root resolved to {}", root.display());
    Ok(Self { root: root.to_path_buf() })
  }

  pub fn from_root(root: impl AsRef<Path>) -> anyhow::Result<Self> {
    Ok(Self { root: absolutize(root.as_ref())? })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn resolve(&self, fragment: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
    let fragment = fragment.as_ref();
    if fragment.is_absolute() || fragment.has_root() {
      bail!("Expected a path relative to the project root, got {:?}", fragment.display());
    }
    Ok(self.root.lexical_join(fragment))
  }
}

fn absolutize(path: &Path) -> anyhow::Result<PathBuf> {
  if path.is_absolute() {
    return Ok(path.absolutize_from(Path::new("")));
  }
  let cwd = std::env::current_dir().context("Failed to get current dir")?;
  Ok(path.absolutize_from(&cwd))
}

#[test]
fn test_resolve_against_parent_of_config_dir() {
  let resolver = PathResolver::from_config_file("/project/build/packconf.config").unwrap();
  assert_eq!(resolver.root(), Path::new("/project"));
  assert_eq!(resolver.resolve("src/index.js").unwrap(), Path::new("/project/src/index.js"));
  assert_eq!(resolver.resolve("dist/index.js").unwrap(), Path::new("/project/dist/index.js"));
}

#[test]
fn test_resolve_normalizes_segments() {
  let resolver = PathResolver::from_config_dir("/project/build/").unwrap();
  assert_eq!(resolver.resolve("./src/../lib/a.js").unwrap(), Path::new("/project/lib/a.js"));
  assert_eq!(resolver.resolve("").unwrap(), Path::new("/project"));
}

#[test]
fn test_resolve_rejects_absolute_fragment() {
  let resolver = PathResolver::from_root("/project").unwrap();
  let err = resolver.resolve("/etc/passwd").unwrap_err();
  assert!(err.to_string().contains("relative to the project root"));
}

#[test]
fn test_rootless_config() {
  assert!(PathResolver::from_config_file("/packconf.config").is_err());
  assert!(PathResolver::from_config_dir("/").is_err());
}

use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

pub trait PathExt {
  fn to_slash_string(&self) -> String;

  fn absolutize_from(&self, base: &Path) -> PathBuf;

  fn lexical_join(&self, fragment: &Path) -> PathBuf;
}

impl PathExt for Path {
  /// Forward-slash rendering. Non UTF-8 segments are replaced, so only use it for display and
  /// serialization.
  fn to_slash_string(&self) -> String {
    self.to_slash_lossy().into_owned()
  }

  /// Resolves `self` against `base` when it is relative. The result is lexically normalized and
  /// never carries a Windows verbatim (`\\?\`) prefix.
  fn absolutize_from(&self, base: &Path) -> PathBuf {
    let joined = if self.is_absolute() { self.normalize() } else { base.join(self).normalize() };
    dunce::simplified(&joined).to_path_buf()
  }

  /// `Path::join` followed by collapsing `.` and `..`, without touching the file system.
  fn lexical_join(&self, fragment: &Path) -> PathBuf {
    self.join(fragment).normalize()
  }
}

#[test]
fn test_lexical_join() {
  let root = Path::new("/project");
  assert_eq!(root.lexical_join(Path::new("src/index.js")), Path::new("/project/src/index.js"));
  assert_eq!(root.lexical_join(Path::new("./dist/../dist/index.js")), Path::new("/project/dist/index.js"));
  assert_eq!(
    Path::new("/project/build").lexical_join(Path::new("../src/index.js")),
    Path::new("/project/src/index.js")
  );
}

#[test]
fn test_absolutize_from() {
  let base = Path::new("/work");
  assert_eq!(Path::new("app/build/cfg").absolutize_from(base), Path::new("/work/app/build/cfg"));
  assert_eq!(Path::new("/elsewhere/./cfg").absolutize_from(base), Path::new("/elsewhere/cfg"));
}

#[test]
fn test_to_slash_string() {
  let path = Path::new("/project").join("dist").join("index.js");
  assert_eq!(path.to_slash_string(), "/project/dist/index.js");
}

use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

/// Every problem found while assembling a descriptor, in the order it was found.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (i, error) in self.0.iter().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "{error:#}")?;
    }
    Ok(())
  }
}

impl std::error::Error for BuildError {}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_display_lists_every_error() {
  let error = BuildError::from(vec![anyhow::anyhow!("a"), anyhow::anyhow!("b").context("c")]);
  assert_eq!(error.len(), 2);
  assert_eq!(error.to_string(), "a\nc: b");
}

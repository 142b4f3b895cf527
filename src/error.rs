
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  /// A normalized word has no pronunciation.
  #[error("no pronunciation for word {word:?}")]
  WordNotFound {
    word: String
  },

  #[error("poem has {lines} lines but the pattern describes {expected}")]
  ShapeMismatch {
    lines: usize,
    expected: usize
  },

  #[error("pattern has {syllables} syllable counts but {rhymes} rhyme labels")]
  PatternShape {
    syllables: usize,
    rhymes: usize
  },

  #[error("malformed pronunciation entry on line {line_number}: {line:?}")]
  MalformedPronunciation {
    line_number: usize,
    line: String
  },

  #[error("malformed poetry form line {line:?}: {reason}")]
  MalformedForm {
    line: String,
    reason: &'static str
  },

  #[error("unknown poetry form {0:?}")]
  UnknownForm(String),

  #[error("IO error at {path:?}: {source}")]
  Io {
    source: std::io::Error,
    path: Option<PathBuf>
  },

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for Error {
  fn from(source: std::io::Error) -> Self {
    Error::Io { source, path: None }
  }
}

impl Error {
  pub fn io_at(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
    let path = path.into();
    move |source| Error::Io { source, path: Some(path) }
  }
}

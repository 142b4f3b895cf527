
use std::{env, path::PathBuf};

use crate::dictionary::{load_pronunciation, PronunciationDictionary};
use crate::error::Result;
use crate::forms::{load_forms, FormCatalog};

pub const DEFAULT_DICTIONARY_PATH: &str = "res/cmudict.dict";
pub const DEFAULT_FORMS_PATH: &str = "res/poetry_forms.txt";

pub const DICTIONARY_ENV: &str = "POETRY_DICTIONARY";
pub const FORMS_ENV: &str = "POETRY_FORMS";

/// Where the pronunciation dictionary and form catalog live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub dictionary_path: PathBuf,
  pub forms_path: PathBuf
}

impl Default for Config {
  fn default() -> Self {
    Config {
      dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
      forms_path: PathBuf::from(DEFAULT_FORMS_PATH)
    }
  }
}

impl Config {
  /// Defaults, overridden by `POETRY_DICTIONARY` and `POETRY_FORMS` when set.
  pub fn from_env() -> Config {
    Config::default().with_overrides(
      env::var_os(DICTIONARY_ENV).map(PathBuf::from),
      env::var_os(FORMS_ENV).map(PathBuf::from)
    )
  }

  pub fn with_overrides(self, dictionary_path: Option<PathBuf>, forms_path: Option<PathBuf>) -> Config {
    Config {
      dictionary_path: dictionary_path.unwrap_or(self.dictionary_path),
      forms_path: forms_path.unwrap_or(self.forms_path)
    }
  }

  pub fn load_dictionary(&self) -> Result<PronunciationDictionary> {
    load_pronunciation(&self.dictionary_path)
  }

  pub fn load_forms(&self) -> Result<FormCatalog> {
    load_forms(&self.forms_path)
  }
}

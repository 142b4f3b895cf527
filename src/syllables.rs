
use tracing::debug;

use crate::dictionary::PronunciationDictionary;
use crate::error::{Error, Result};
use crate::forms::PoetryPattern;
use crate::phonemes::count_syllables;
use crate::text::clean_up;

pub fn line_syllables(line: &str, dictionary: &PronunciationDictionary) -> Result<u32> {
  let mut syllables = 0;
  for word in line.split_whitespace() {
    syllables += count_syllables(dictionary.lookup(&clean_up(word))?);
  }
  Ok(syllables)
}

/// Returns the lines whose syllable count differs from the pattern, in poem
/// order. A required count of 0 accepts any line.
pub fn check_syllables<S: AsRef<str>>(
  poem_lines: &[S],
  pattern: &PoetryPattern,
  dictionary: &PronunciationDictionary
) -> Result<Vec<String>> {
  let required = pattern.syllables();

  if required.len() == 1 && required[0] == 0 {
    return Ok(vec![]);
  }

  if poem_lines.len() != required.len() {
    return Err(Error::ShapeMismatch { lines: poem_lines.len(), expected: required.len() });
  }

  let mut violations = vec![];

  for (line, &expected) in poem_lines.iter().zip(required) {
    let line = line.as_ref();
    let syllables = line_syllables(line, dictionary)?;
    if expected != 0 && syllables != expected {
      debug!("{:?} has {} syllables, expected {}", line, syllables, expected);
      violations.push(line.to_owned());
    }
  }

  Ok(violations)
}

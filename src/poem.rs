
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::dictionary::PronunciationDictionary;
use crate::error::Result;
use crate::forms::PoetryPattern;
use crate::rhyme::check_rhyme_scheme;
use crate::syllables::check_syllables;
use crate::text::get_poem_lines;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PoemReport {
  pub syllable_violations: Vec<String>,
  pub rhyme_violations: Vec<Vec<String>>
}

impl PoemReport {
  pub fn is_valid(&self) -> bool {
    self.syllable_violations.is_empty() && self.rhyme_violations.is_empty()
  }
}

pub fn check_poem(poem: &str, pattern: &PoetryPattern, dictionary: &PronunciationDictionary) -> Result<PoemReport> {
  let lines = get_poem_lines(poem);
  debug!("Checking a poem of {} lines against a pattern of {}", lines.len(), pattern.len());

  Ok(PoemReport {
    syllable_violations: check_syllables(&lines, pattern, dictionary)?,
    rhyme_violations: check_rhyme_scheme(&lines, pattern, dictionary)?
  })
}

/// Checks independent poems in parallel. Results line up with `poems`.
pub fn check_poems<S>(poems: &[S], pattern: &PoetryPattern, dictionary: &PronunciationDictionary) -> Vec<Result<PoemReport>>
where
  S: AsRef<str> + Sync
{
  poems.par_iter()
    .map(|poem| check_poem(poem.as_ref(), pattern, dictionary))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::Error;
  use crate::syllables::tests::{word_to_phonemes, POEM};

  #[test]
  fn test_end_to_end() {
    let d = word_to_phonemes();
    let poem = POEM.join("\n\n");

    let report = check_poem(&poem, &PoetryPattern::new(vec![5, 7, 5], vec!["A", "B", "A"]).unwrap(), &d).unwrap();
    assert!(report.syllable_violations.is_empty());
    assert_eq!(report.rhyme_violations, vec![vec![POEM[0], POEM[2]]]);
    assert!(!report.is_valid());

    let report = check_poem(&poem, &PoetryPattern::new(vec![5, 5, 4], vec!["*", "*", "*"]).unwrap(), &d).unwrap();
    assert_eq!(report.syllable_violations, vec![POEM[1], POEM[2]]);
    assert!(report.rhyme_violations.is_empty());
  }

  #[test]
  fn test_valid_poem() {
    let report = check_poem(&POEM.join("\n"), &PoetryPattern::new(vec![5, 7, 0], vec!["*", "A", "*"]).unwrap(), &word_to_phonemes()).unwrap();
    assert!(report.is_valid());
    assert_eq!(report, PoemReport::default());
  }

  #[test]
  fn test_check_poems() {
    let d = word_to_phonemes();
    let pattern = PoetryPattern::new(vec![5, 7, 5], vec!["*", "*", "*"]).unwrap();
    let poems = [
      POEM.join("\n"),
      "The first line\nWith a gap\nThen the end.".to_owned(),
      "Two lines only\nThe next".to_owned()
    ];
    let results = check_poems(&poems, &pattern, &d);
    assert_eq!(results.len(), 3);
    assert!(results[0].as_ref().unwrap().is_valid());
    assert!(matches!(results[1], Err(Error::WordNotFound { .. })));
    assert!(matches!(results[2], Err(Error::ShapeMismatch { lines: 2, expected: 3 })));
  }

  #[test]
  fn test_report_json() {
    let report = PoemReport {
      syllable_violations: vec!["a".to_owned()],
      rhyme_violations: vec![]
    };
    assert_eq!(
      serde_json::to_string(&report).unwrap(),
      r#"{"syllable_violations":["a"],"rhyme_violations":[]}"#
    );
  }
}

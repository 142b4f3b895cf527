
use std::collections::BTreeMap;
use itertools::Itertools;
use tracing::{debug, warn};

use crate::dictionary::PronunciationDictionary;
use crate::error::{Error, Result};
use crate::forms::{PoetryPattern, WILDCARD};
use crate::phonemes::rhyme_tail;
use crate::text::{clean_up, last_word};

/// Line positions for each rhyme label, ascending. Every label appears,
/// including the wildcard and labels used only once.
pub fn group_by_rhyme(pattern: &PoetryPattern) -> BTreeMap<String, Vec<usize>> {
  let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
  for (i, label) in pattern.rhymes().iter().enumerate() {
    groups.entry(label.clone()).or_default().push(i);
  }
  groups
}

/// Rhyme tail of the last word of `line`. A line without words, or whose last
/// word has no stressed vowel, has an empty tail.
pub fn line_rhyme_tail<'d>(line: &str, dictionary: &'d PronunciationDictionary) -> Result<&'d [String]> {
  let Some(word) = last_word(line) else {
    return Ok(&[]);
  };
  let word = clean_up(word);
  let tail = rhyme_tail(dictionary.lookup(&word)?);
  if tail.is_empty() {
    warn!("{} has no stressed vowel to rhyme on", word);
  }
  Ok(tail)
}

/// Returns, in label order, the groups of lines that share a rhyme label but
/// do not all rhyme. Each group lists its lines in poem order.
pub fn check_rhyme_scheme<S: AsRef<str>>(
  poem_lines: &[S],
  pattern: &PoetryPattern,
  dictionary: &PronunciationDictionary
) -> Result<Vec<Vec<String>>> {
  if poem_lines.len() != pattern.rhymes().len() {
    return Err(Error::ShapeMismatch { lines: poem_lines.len(), expected: pattern.rhymes().len() });
  }

  let mut violations: Vec<Vec<String>> = vec![];

  for (label, positions) in group_by_rhyme(pattern) {
    if label == WILDCARD || positions.len() < 2 {
      continue;
    }

    let tails = positions.iter()
      .map(|&p| line_rhyme_tail(poem_lines[p].as_ref(), dictionary))
      .collect::<Result<Vec<_>>>()?;

    if tails.iter().tuple_windows().any(|(a, b)| a != b) {
      debug!("rhyme group {} does not rhyme: {:?}", label, tails);
      violations.push(positions.iter().map(|&p| poem_lines[p].as_ref().to_owned()).collect());
    }
  }

  Ok(violations)
}

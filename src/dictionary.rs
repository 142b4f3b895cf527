
use std::{collections::HashMap, io::{BufRead, BufReader}, fs::File, path::Path};
use nom::bytes::complete::{tag, take_until};
use nom::combinator::rest;
use nom::IResult;
use tracing::info;

use crate::error::{Error, Result};

/// Marker found in the CMU dictionary's header and comment lines.
pub const COMMENT_MARKER: &str = ";;;";

/// Word to phoneme mapping. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PronunciationDictionary {
  entries: HashMap<String, Vec<String>>
}

impl PronunciationDictionary {
  /// Looks up a normalized (uppercase, edge-punctuation-free) word.
  pub fn lookup(&self, word: &str) -> Result<&[String]> {
    self.entries.get(word)
      .map(|phonemes| phonemes.as_slice())
      .ok_or_else(|| Error::WordNotFound { word: word.to_owned() })
  }

  pub fn contains(&self, word: &str) -> bool {
    self.entries.contains_key(word)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<W, P, S> FromIterator<(W, P)> for PronunciationDictionary
where
  W: Into<String>,
  P: IntoIterator<Item = S>,
  S: Into<String>
{
  fn from_iter<I: IntoIterator<Item = (W, P)>>(iter: I) -> Self {
    PronunciationDictionary {
      entries: iter.into_iter()
        .map(|(w, p)| (w.into(), p.into_iter().map(|s| s.into()).collect()))
        .collect()
    }
  }
}

// WORD  PH0 PH1 ...
fn parse_entry(i: &str) -> IResult<&str, (&str, Vec<String>)> {
  let (i, word) = take_until("  ")(i)?;
  let (i, _) = tag("  ")(i)?;
  let (i, pronunciation) = rest(i)?;
  let phonemes = pronunciation.trim_end().split_whitespace().map(|p| p.to_owned()).collect();
  Ok((i, (word, phonemes)))
}

/// Reads a dictionary in the CMU Pronouncing Dictionary format. Leading lines
/// containing `;;;` are skipped; a later duplicate word replaces the earlier one.
pub fn read_pronunciation<R: BufRead>(reader: R) -> Result<PronunciationDictionary> {
  let mut entries: HashMap<String, Vec<String>> = HashMap::new();
  let mut in_header = true;

  for (n, line) in reader.lines().enumerate() {
    let line = line?;
    if in_header && line.contains(COMMENT_MARKER) {
      continue;
    }
    in_header = false;

    let (_, (word, phonemes)) = parse_entry(&line).map_err(|_| Error::MalformedPronunciation {
      line_number: n + 1,
      line: line.clone()
    })?;
    entries.insert(word.to_owned(), phonemes);
  }

  Ok(PronunciationDictionary { entries })
}

pub fn load_pronunciation(path: &Path) -> Result<PronunciationDictionary> {
  let file = File::open(path).map_err(Error::io_at(path))?;
  let dictionary = read_pronunciation(BufReader::new(file))?;
  info!("Loaded {} pronunciations from {}", dictionary.len(), path.display());
  Ok(dictionary)
}

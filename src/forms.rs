
use std::{collections::BTreeMap, io::{self, BufRead, BufReader}, fs::File, path::Path};
use nom::bytes::complete::tag;
use nom::character::complete::digit1;
use nom::combinator::{map_res, rest};
use nom::IResult;
use serde::{Serialize, Deserialize};
use tracing::info;

use crate::error::{Error, Result};

/// Rhyme label meaning "this line is not checked".
pub const WILDCARD: &str = "*";

/// Per-line syllable requirements (0 means any count) paired with per-line
/// rhyme labels. Both always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredPattern")]
pub struct PoetryPattern {
  syllables: Vec<u32>,
  rhymes: Vec<String>
}

// Deserialized shape, checked by `PoetryPattern::new` before use.
#[derive(Deserialize)]
struct StoredPattern {
  syllables: Vec<u32>,
  rhymes: Vec<String>
}

impl TryFrom<StoredPattern> for PoetryPattern {
  type Error = Error;

  fn try_from(stored: StoredPattern) -> Result<PoetryPattern> {
    PoetryPattern::new(stored.syllables, stored.rhymes)
  }
}

impl PoetryPattern {
  pub fn new<S: Into<String>>(syllables: Vec<u32>, rhymes: Vec<S>) -> Result<PoetryPattern> {
    if syllables.len() != rhymes.len() {
      return Err(Error::PatternShape { syllables: syllables.len(), rhymes: rhymes.len() });
    }
    Ok(PoetryPattern {
      syllables,
      rhymes: rhymes.into_iter().map(|r| r.into()).collect()
    })
  }

  pub fn syllables(&self) -> &[u32] {
    &self.syllables
  }

  pub fn rhymes(&self) -> &[String] {
    &self.rhymes
  }

  pub fn len(&self) -> usize {
    self.syllables.len()
  }

  pub fn is_empty(&self) -> bool {
    self.syllables.is_empty()
  }
}

pub type FormCatalog = BTreeMap<String, PoetryPattern>;

// <syllables> <label>
fn parse_pattern_line(i: &str) -> IResult<&str, (u32, &str)> {
  let (i, syllables) = map_res(digit1, |d: &str| d.parse::<u32>())(i)?;
  let (i, _) = tag(" ")(i)?;
  let (i, label) = rest(i)?;
  Ok((i, (syllables, label.trim_end())))
}

/// Reads one pattern from a source positioned just after a form name. Stops
/// at (and consumes) a blank line, or at the end of the source.
pub fn read_poetry_form_description<I>(lines: &mut I) -> Result<PoetryPattern>
where
  I: Iterator<Item = io::Result<String>>
{
  let mut syllables_per_line = vec![];
  let mut rhymes_per_line = vec![];

  for line in lines {
    let line = line?;
    if line.is_empty() {
      break;
    }
    let (_, (syllables, rhyme)) = parse_pattern_line(&line).map_err(|_| Error::MalformedForm {
      line: line.clone(),
      reason: "expected <syllables> <rhyme label>"
    })?;
    syllables_per_line.push(syllables);
    rhymes_per_line.push(rhyme.to_owned());
  }

  PoetryPattern::new(syllables_per_line, rhymes_per_line)
}

/// Reads every form in the source. Blank lines where a form name is expected
/// are skipped; a repeated name replaces the earlier form.
pub fn read_poetry_form_descriptions<I>(lines: &mut I) -> Result<FormCatalog>
where
  I: Iterator<Item = io::Result<String>>
{
  let mut catalog = FormCatalog::new();

  while let Some(line) = lines.next() {
    let name = line?.trim_end().to_owned();
    if name.is_empty() {
      continue;
    }
    let pattern = read_poetry_form_description(lines)?;
    catalog.insert(name, pattern);
  }

  Ok(catalog)
}

pub fn read_forms<R: BufRead>(reader: R) -> Result<FormCatalog> {
  read_poetry_form_descriptions(&mut reader.lines())
}

pub fn load_forms(path: &Path) -> Result<FormCatalog> {
  let file = File::open(path).map_err(Error::io_at(path))?;
  let catalog = read_forms(BufReader::new(file))?;
  info!("Loaded {} poetry forms from {}", catalog.len(), path.display());
  Ok(catalog)
}

pub fn find_form<'a>(catalog: &'a FormCatalog, name: &str) -> Result<&'a PoetryPattern> {
  catalog.get(name).ok_or_else(|| Error::UnknownForm(name.to_owned()))
}

pub fn catalog_to_json(catalog: &FormCatalog) -> Result<String> {
  Ok(serde_json::to_string_pretty(catalog)?)
}


// Phoneme tokens as they appear in the CMU dictionary: AH0, K, EY1, ...
// A trailing digit marks a vowel nucleus and carries its stress.

#[derive(Debug, PartialEq, PartialOrd, Ord, Eq, Copy, Clone)]
pub enum Stress {
  Primary,
  Secondary,
  Unstressed
}

impl Stress {
  pub fn from_digit(d: char) -> Option<Stress> {
    use Stress::*;
    Some(match d {
      '0' => Unstressed,
      '1' => Primary,
      '2' => Secondary,
      _ => None?
    })
  }
}

pub fn is_syllable_nucleus(token: &str) -> bool {
  token.chars().last().map_or(false, |c| c.is_ascii_digit())
}

pub fn stress_of(token: &str) -> Option<Stress> {
  token.chars().last().and_then(Stress::from_digit)
}

pub fn count_syllables<S: AsRef<str>>(phonemes: &[S]) -> u32 {
  phonemes.iter().filter(|p| is_syllable_nucleus(p.as_ref())).count() as u32
}

/// The phonemes from the last nucleus to the end of the word. Empty when the
/// word has no nucleus at all.
pub fn rhyme_tail<S: AsRef<str>>(phonemes: &[S]) -> &[S] {
  match phonemes.iter().rposition(|p| is_syllable_nucleus(p.as_ref())) {
    Some(i) => &phonemes[i ..],
    None => &phonemes[phonemes.len() ..]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_nucleus() {
    assert!(is_syllable_nucleus("AH0"));
    assert!(is_syllable_nucleus("EY1"));
    assert!(!is_syllable_nucleus("K"));
    assert!(!is_syllable_nucleus(""));
  }

  #[test]
  fn test_stress() {
    assert_eq!(stress_of("AO1"), Some(Stress::Primary));
    assert_eq!(stress_of("IH0"), Some(Stress::Unstressed));
    assert_eq!(stress_of("EH2"), Some(Stress::Secondary));
    assert_eq!(stress_of("AE7"), None);
    assert_eq!(stress_of("DH"), None);
  }

  #[test]
  fn test_count_syllables() {
    assert_eq!(count_syllables(&["B", "IH0", "F", "AO1", "R"]), 2);
    assert_eq!(count_syllables(&["P", "OW1", "AH0", "M"]), 2);
    assert_eq!(count_syllables::<&str>(&[]), 0);
  }

  #[test]
  fn test_rhyme_tail() {
    assert_eq!(rhyme_tail(&["N", "EH1", "K", "S", "T"]), &["EH1", "K", "S", "T"]);
    assert_eq!(rhyme_tail(&["P", "OW1", "AH0", "M"]), &["AH0", "M"]);
    assert_eq!(rhyme_tail(&["AO1", "F"]), &["AO1", "F"]);
    assert!(rhyme_tail(&["HH", "M"]).is_empty());
  }
}

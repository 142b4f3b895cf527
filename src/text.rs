
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
  static ref EDGE_PUNCTUATION_RE: Regex =
    Regex::new(r#"^[ \t\n\r!"'`@$%^&_\-+={}|\\/,;:.?)(\[\]<>*#]+|[ \t\n\r!"'`@$%^&_\-+={}|\\/,;:.?)(\[\]<>*#]+$"#).unwrap();
}

/// Uppercases `s` and strips punctuation from both ends. Inner punctuation,
/// like the apostrophe in a contraction, is kept.
pub fn clean_up(s: &str) -> String {
  EDGE_PUNCTUATION_RE.replace_all(&s.to_uppercase(), "").into_owned()
}

/// Splits `original` on each separator in turn, re-splitting every fragment
/// of the previous pass. Fragments that are empty or a lone space are dropped
/// and the rest are trimmed.
pub fn split_on_separators(original: &str, separators: &str) -> Vec<String> {
  let mut result = vec![original.to_owned()];

  for separator in separators.chars() {
    let mut split_words = vec![];
    for fragment in &result {
      for piece in fragment.split(separator) {
        if piece == "" || piece == " " {
          continue;
        }
        let piece = piece.trim();
        if !piece.is_empty() {
          split_words.push(piece.to_owned());
        }
      }
    }
    result = split_words;
  }

  result
}

pub fn get_poem_lines(poem: &str) -> Vec<String> {
  split_on_separators(poem, "\n")
}

/// Number of lines that still have content after cleaning.
pub fn count_lines<S: AsRef<str>>(lines: &[S]) -> usize {
  lines.iter()
    .filter(|line| !clean_up(line.as_ref()).trim().is_empty())
    .count()
}

pub fn last_word(line: &str) -> Option<&str> {
  line.split_whitespace().last()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_clean_up() {
    assert_eq!(clean_up("Birthday!!!"), "BIRTHDAY");
    assert_eq!(clean_up("\"Quoted?\""), "QUOTED");
    assert_eq!(clean_up("Don't!"), "DON'T");
    assert_eq!(clean_up("off,\n"), "OFF");
    assert_eq!(clean_up("(well-known)"), "WELL-KNOWN");
    assert_eq!(clean_up("[#*]"), "");
  }

  #[test]
  fn test_clean_up_strips_only_plain_whitespace() {
    assert_eq!(clean_up(" \tword\r\n"), "WORD");
    assert_eq!(clean_up("\u{a0}word\u{2003}"), "\u{a0}WORD\u{2003}");
  }

  #[test]
  fn test_clean_up_idempotent() {
    for s in ["Hello,", "--ok--", "Don't!", "\\back/slash\\", "plain", "'tis"] {
      let once = clean_up(s);
      assert_eq!(clean_up(&once), once);
    }
  }

  #[test]
  fn test_split_on_separators() {
    assert_eq!(
      split_on_separators("Hooray! Finally, we're done.", "!,"),
      vec!["Hooray", "Finally", "we're done."]
    );
    assert_eq!(
      split_on_separators("Row, Row, Row your boat", ".!,"),
      vec!["Row", "Row", "Row your boat"]
    );
  }

  #[test]
  fn test_split_never_returns_blank() {
    let result = split_on_separators("a,, ,  ,b", ",");
    assert_eq!(result, vec!["a", "b"]);
  }

  #[test]
  fn test_get_poem_lines() {
    assert_eq!(
      get_poem_lines("The first line leads off,\n\n\nWith a gap before the next.\nThen the poem ends.\n"),
      vec!["The first line leads off,", "With a gap before the next.", "Then the poem ends."]
    );
    assert_eq!(
      get_poem_lines("   First line,\n\n\nPoems are fun!\n\n \nSecond line.\nThird line.\n"),
      vec!["First line,", "Poems are fun!", "Second line.", "Third line."]
    );
  }

  #[test]
  fn test_get_poem_lines_recovers_joined_lines() {
    let lines = vec!["An old silent pond", "A frog jumps into the pond", "Splash! Silence again."];
    assert_eq!(get_poem_lines(&lines.join("\n")), lines);
  }

  #[test]
  fn test_count_lines() {
    assert_eq!(count_lines(&["a\n", "\n", "  \n", "b\n"]), 2);
    assert_eq!(count_lines(&["\n", "  \n"]), 0);
    assert_eq!(count_lines(&[
      "The first line leads off,\n", "\n", "  \n",
      "With a gap before the next.\n", "Then the poem doesn't ends.\n",
      "The poem continues with the next line,\n", "Then ends here.\n"
    ]), 5);
  }

  #[test]
  fn test_last_word() {
    assert_eq!(last_word("Then the poem ends."), Some("ends."));
    assert_eq!(last_word("   "), None);
  }
}

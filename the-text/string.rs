//! Combinators over text treated as newline-delimited records.
//!
//! Every function here is total: any input produces an output and nothing
//! panics. `lines` and `unlines` only round-trip in one direction, because
//! splitting forgets which terminator separated two lines.
//!
//! # Example
//!
//! ```
//! use the_text::{lines, unlines, surround};
//!
//! assert_eq!(lines("a\r\nb\rc"), ["a", "b", "c"]);
//! assert_eq!(unlines(["a", "b", "c"]), "a\nb\nc");
//! assert_eq!(surround("*", "bold"), "*bold*");
//! ```
use std::iter::FusedIterator;

use crate::line_ending::{
  LineEnding,
  find_line_ending,
};

/// Lazy iterator over the lines of a string. See [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
  rest: Option<&'a str>,
}

impl<'a> Iterator for Lines<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    let rest = self.rest?;
    match find_line_ending(rest) {
      Some((idx, ending)) => {
        self.rest = Some(&rest[idx + ending.len_bytes()..]);
        Some(&rest[..idx])
      },
      None => {
        self.rest = None;
        Some(rest)
      },
    }
  }
}

impl FusedIterator for Lines<'_> {}

/// Splits `text` on `"\r\n"`, `"\r"` and `"\n"`, checked in that order.
///
/// Always yields at least one item, and exactly one more than the number of
/// terminators, so leading and trailing empty lines are kept.
pub fn split_lines(text: &str) -> Lines<'_> {
  Lines { rest: Some(text) }
}

/// Collects [`split_lines`].
///
/// ```
/// use the_text::lines;
///
/// assert_eq!(lines(""), [""]);
/// assert_eq!(lines("\n"), ["", ""]);
/// assert_eq!(lines("a\r\nb"), ["a", "b"]);
/// ```
pub fn lines(text: &str) -> Vec<&str> {
  let lines: Vec<_> = split_lines(text).collect();
  tracing::trace!(bytes = text.len(), lines = lines.len(), "split text into lines");
  lines
}

/// Joins `lines` with `"\n"`. No terminator is added after the last line.
pub fn unlines<I, S>(lines: I) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  unlines_with(lines, LineEnding::LF)
}

/// Joins `lines` with `ending` as the separator.
pub fn unlines_with<I, S>(lines: I, ending: LineEnding) -> String
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut out = String::new();
  for (i, line) in lines.into_iter().enumerate() {
    if i > 0 {
      out.push_str(ending.as_str());
    }
    out.push_str(line.as_ref());
  }
  out
}

/// Returns `x ++ y ++ x`.
pub fn surround(x: &str, y: &str) -> String {
  let mut out = String::with_capacity(2 * x.len() + y.len());
  out.push_str(x);
  out.push_str(y);
  out.push_str(x);
  out
}

/// True iff `s` begins with `prefix`. An empty prefix always matches.
#[inline]
pub fn starts_with(prefix: &str, s: &str) -> bool {
  s.starts_with(prefix)
}

/// True iff `s` ends with `suffix`. An empty suffix always matches.
#[inline]
pub fn ends_with(suffix: &str, s: &str) -> bool {
  s.ends_with(suffix)
}

/// One-argument-at-a-time forms of the combinators above, for building
/// pipelines. Argument order matches the multi-argument versions.
pub mod curried {
  pub fn surround(x: &str) -> impl Fn(&str) -> String + '_ {
    move |y| super::surround(x, y)
  }

  pub fn starts_with(prefix: &str) -> impl Fn(&str) -> bool + '_ {
    move |s| super::starts_with(prefix, s)
  }

  pub fn ends_with(suffix: &str) -> impl Fn(&str) -> bool + '_ {
    move |s| super::ends_with(suffix, s)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn splits_on_lf() {
    assert_eq!(lines(""), [""]);
    assert_eq!(lines("\n"), ["", ""]);
    assert_eq!(lines("\n\n"), ["", "", ""]);
    assert_eq!(lines("\na"), ["", "a"]);
    assert_eq!(lines("a\n"), ["a", ""]);
    assert_eq!(lines("a\nb"), ["a", "b"]);
  }

  #[test]
  fn splits_on_cr() {
    assert_eq!(lines("\r"), ["", ""]);
    assert_eq!(lines("\r\r"), ["", "", ""]);
    assert_eq!(lines("\ra"), ["", "a"]);
    assert_eq!(lines("a\r"), ["a", ""]);
    assert_eq!(lines("a\rb"), ["a", "b"]);
  }

  #[test]
  fn splits_on_crlf() {
    assert_eq!(lines("\r\n"), ["", ""]);
    assert_eq!(lines("\r\n\r\n"), ["", "", ""]);
    assert_eq!(lines("\r\na"), ["", "a"]);
    assert_eq!(lines("a\r\n"), ["a", ""]);
    assert_eq!(lines("a\r\nb"), ["a", "b"]);
  }

  #[test]
  fn mixed_terminators() {
    assert_eq!(lines("a\rb\nc\r\nd"), ["a", "b", "c", "d"]);
    // "\n\r" is two terminators, "\r\r\n" is a CR then a CRLF.
    assert_eq!(lines("\n\r"), ["", "", ""]);
    assert_eq!(lines("\r\r\n"), ["", "", ""]);
    assert_eq!(lines("ünï\r\ncødé"), ["ünï", "cødé"]);
  }

  #[test]
  fn other_separators_stay_inside_a_line() {
    assert_eq!(lines("a\u{0085}b"), ["a\u{0085}b"]);
    assert_eq!(lines("a\u{2028}b\u{2029}c"), ["a\u{2028}b\u{2029}c"]);
    assert_eq!(lines("a\u{000B}b\u{000C}\nc"), ["a\u{000B}b\u{000C}", "c"]);
  }

  #[test]
  fn split_lines_is_fused() {
    let mut it = split_lines("a\nb");
    assert_eq!(it.next(), Some("a"));
    assert_eq!(it.next(), Some("b"));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
  }

  #[test]
  fn unlines_joins_without_trailing_terminator() {
    assert_eq!(unlines(Vec::<&str>::new()), "");
    assert_eq!(unlines(["a"]), "a");
    assert_eq!(unlines(["a", "b", "c"]), "a\nb\nc");
    assert_eq!(unlines(vec![String::from("a"), String::new()]), "a\n");
  }

  #[test]
  fn unlines_with_custom_ending() {
    assert_eq!(unlines_with(["a", "b"], LineEnding::Crlf), "a\r\nb");
    assert_eq!(unlines_with(["a", "b"], LineEnding::CR), "a\rb");
    assert_eq!(unlines_with(["a"], LineEnding::Crlf), "a");
  }

  #[test]
  fn lines_does_not_round_trip_terminators() {
    assert_eq!(unlines(lines("a\r\nb\r")), "a\nb\n");
  }

  #[test]
  fn surround_concatenates() {
    assert_eq!(surround("", ""), "");
    assert_eq!(surround("x", ""), "xx");
    assert_eq!(surround("", "x"), "x");
    assert_eq!(surround("x", "y"), "xyx");
  }

  #[test]
  fn prefix_and_suffix() {
    assert!(starts_with("x", "xyz"));
    assert!(!starts_with("a", "xyz"));
    assert!(!starts_with("xyzw", "xyz"));
    assert!(ends_with("z", "xyz"));
    assert!(!ends_with("a", "xyz"));
    assert!(!ends_with("wxyz", "xyz"));
  }

  #[test]
  fn curried_forms_match() {
    let quote = curried::surround("\"");
    assert_eq!(quote("hi"), "\"hi\"");

    let is_comment = curried::starts_with("//");
    assert!(is_comment("// note"));
    assert!(!is_comment("code"));

    let is_rust = curried::ends_with(".rs");
    let files = ["lib.rs", "Cargo.toml", "main.rs"];
    assert_eq!(files.into_iter().filter(|&f| is_rust(f)).count(), 2);
  }

  quickcheck::quickcheck! {
      fn empty_prefix_always_matches(x: String) -> bool {
          starts_with("", &x) && curried::starts_with("")(&x)
      }

      fn empty_suffix_always_matches(x: String) -> bool {
          ends_with("", &x) && curried::ends_with("")(&x)
      }

      fn prefix_of_concatenation(x: String, y: String) -> bool {
          starts_with(&x, &(x.clone() + &y))
      }

      fn suffix_of_concatenation(x: String, y: String) -> bool {
          ends_with(&x, &(y + &x))
      }

      fn one_more_line_than_terminators(s: String) -> bool {
          let terminators =
            s.matches('\r').count() + s.matches('\n').count() - s.matches("\r\n").count();
          lines(&s).len() == terminators + 1
      }

      fn lf_only_text_round_trips(s: String) -> bool {
          let s = s.replace('\r', "");
          unlines(lines(&s)) == s
      }

      fn lines_never_contain_terminators(s: String) -> bool {
          split_lines(&s).all(|line| !line.contains(['\r', '\n']))
      }
  }
}

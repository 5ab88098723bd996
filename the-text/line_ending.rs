use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("not a line ending: {0:?}")]
  UnknownLineEnding(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The three record terminators. Anything else, including the Unicode line
/// and paragraph separators, is ordinary text.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum LineEnding {
  /// CarriageReturn followed by LineFeed.
  Crlf,

  /// U+000A -- LineFeed
  LF,

  /// U+000D -- CarriageReturn
  CR,
}

impl LineEnding {
  #[inline]
  pub const fn len_bytes(&self) -> usize {
    self.as_str().len()
  }

  #[inline]
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Crlf => "\u{000D}\u{000A}",
      Self::LF => "\u{000A}",
      Self::CR => "\u{000D}",
    }
  }

  /// Single-character terminators only. A lone `'\r'` maps to
  /// [`LineEnding::CR`]; pairing it with a following `'\n'` is left to
  /// [`find_line_ending`].
  #[inline]
  pub const fn from_char(ch: char) -> Option<LineEnding> {
    match ch {
      '\u{000A}' => Some(LineEnding::LF),
      '\u{000D}' => Some(LineEnding::CR),
      _ => None,
    }
  }

  // Normally we'd want to implement the FromStr trait, but in this case
  // that would force us into a different return type than from_char.
  // `TryFrom<&str>` covers the fallible conversion.
  #[allow(clippy::should_implement_trait)]
  #[inline]
  pub fn from_str(g: &str) -> Option<LineEnding> {
    match g {
      "\u{000D}\u{000A}" => Some(LineEnding::Crlf),
      "\u{000A}" => Some(LineEnding::LF),
      "\u{000D}" => Some(LineEnding::CR),
      _ => None,
    }
  }
}

impl TryFrom<&str> for LineEnding {
  type Error = Error;

  fn try_from(s: &str) -> Result<Self> {
    LineEnding::from_str(s).ok_or_else(|| Error::UnknownLineEnding(s.to_owned()))
  }
}

impl TryFrom<char> for LineEnding {
  type Error = Error;

  fn try_from(ch: char) -> Result<Self> {
    LineEnding::from_char(ch).ok_or_else(|| Error::UnknownLineEnding(ch.to_string()))
  }
}

/// Returns the byte index and kind of the first line ending in `text`.
///
/// `"\r\n"` always wins over a bare `'\r'`, so the pair is reported once as
/// [`LineEnding::Crlf`] at the index of the `'\r'`.
pub fn find_line_ending(text: &str) -> Option<(usize, LineEnding)> {
  // Both terminators are ASCII, so a byte scan never lands inside a char.
  let idx = text.bytes().position(|b| b == b'\r' || b == b'\n')?;

  let ending = match &text.as_bytes()[idx..] {
    [b'\r', b'\n', ..] => LineEnding::Crlf,
    [b'\r', ..] => LineEnding::CR,
    _ => LineEnding::LF,
  };

  Some((idx, ending))
}

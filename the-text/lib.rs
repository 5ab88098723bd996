//! Text treated as newline-delimited records.
//!
//! [`string`] holds the record combinators ([`lines`], [`unlines`],
//! [`surround`], [`starts_with`], [`ends_with`]) and [`line_ending`] the
//! terminator rules they split on: `"\r\n"` first, then a bare `"\r"` or
//! `"\n"`.

pub mod line_ending;
pub mod string;

pub use line_ending::LineEnding;
pub use string::{
  Lines,
  ends_with,
  lines,
  split_lines,
  starts_with,
  surround,
  unlines,
  unlines_with,
};

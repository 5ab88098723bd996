#![no_main]

use libfuzzer_sys::fuzz_target;
use the_text::{
  LineEnding,
  lines,
  split_lines,
  unlines,
  unlines_with,
};

fuzz_target!(|data: &[u8]| {
  let Ok(text) = std::str::from_utf8(data) else {
    return;
  };

  let split = lines(text);
  assert!(!split.is_empty());
  assert_eq!(split.len(), split_lines(text).count());

  let total: usize = split.iter().map(|line| line.len()).sum();
  assert!(total <= text.len());

  for line in &split {
    assert!(!line.contains(['\r', '\n']));
  }

  // Rejoining with "\n" only reproduces text that used "\n" alone.
  if !text.contains('\r') {
    assert_eq!(unlines(&split), text);
  }
  if !text.contains('\n') {
    assert_eq!(unlines_with(&split, LineEnding::CR), text);
  }
});

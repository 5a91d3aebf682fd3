/// Rounds a byte count up to the next multiple of 8.
///
/// The arena aligns everything to 8 bytes — every block size, and
/// therefore every payload pointer, lands on an 8-byte boundary regardless
/// of the host's pointer width. Unlike a generic word-alignment macro this
/// does not vary with `mem::size_of::<usize>()`.
///
/// # Examples
///
/// ```rust
/// use arenalloc::align_up_8;
///
/// assert_eq!(align_up_8!(13), 16);
/// assert_eq!(align_up_8!(8), 8);
/// assert_eq!(align_up_8!(9), 16);
/// ```
#[macro_export]
macro_rules! align_up_8 {
  ($value:expr) => {
    (($value) + 7) & !7
  };
}

pub use align_up_8;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rounds_up_to_next_multiple_of_eight() {
    let cases = [
      (0, 0),
      (1, 8),
      (7, 8),
      (8, 8),
      (9, 16),
      (63, 64),
      (64, 64),
      (65, 72),
      (1023, 1024),
      (1024, 1024),
      (1025, 1032),
    ];

    for (input, expected) in cases {
      assert_eq!(align_up_8!(input), expected);
    }
  }

  #[test]
  fn never_rounds_down() {
    for value in 0..512usize {
      assert!(align_up_8!(value) >= value);
    }
  }
}

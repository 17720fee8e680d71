//! Encodes sequences of Unicode codepoints into the equivalent UTF-8 bytes,
//! for storage or transmission across any interface that accepts a sequence
//! of bytes.

mod internal;

pub use internal::utf8::{encode_codepoint, REPLACEMENT_CHARACTER_BYTES};

use internal::utf8;

/// A single Unicode codepoint stored as a 32-bit integer value.
///
/// Values in the surrogate range 0xD800-0xDFFF and values greater than
/// [`MAX_CODEPOINT`] are not valid codepoints and have no UTF-8 encoding.
///
pub type Codepoint = u32;

/// The codepoint of the replacement character '�' that is emitted in place
/// of codepoints that can't be encoded. Its UTF-8 encoding is
/// [`REPLACEMENT_CHARACTER_BYTES`].
///
pub const REPLACEMENT_CHARACTER: Codepoint = 0xFFFD;

/// The greatest codepoint defined by Unicode.
///
pub const MAX_CODEPOINT: Codepoint = 0x10FFFF;

/// Encodes a sequence of Unicode codepoints into UTF-8 bytes.
///
/// Each codepoint contributes its own one to four byte UTF-8 encoding to the
/// output, in input order. Codepoints that have no UTF-8 encoding are
/// replaced with the U+FFFD replacement character rather than being dropped
/// or causing an error, so encoding never fails and one bad codepoint never
/// aborts the rest of the sequence.
///
pub fn encode(codepoints: &[Codepoint]) -> Vec<u8> {
  let mut bytes = Vec::with_capacity(codepoints.len());

  for codepoint in codepoints {
    utf8::encode_codepoint(*codepoint, &mut bytes);
  }

  bytes
}

/// Converts an ASCII string into its equivalent sequence of Unicode
/// codepoints by widening each byte to a 32-bit value unchanged.
///
/// The result can be passed to [`encode`] the same as any other codepoint
/// sequence.
///
pub fn ascii_to_codepoints(ascii: &str) -> Vec<Codepoint> {
  ascii.bytes().map(Codepoint::from).collect()
}

/// Creates a codepoint from a string in `U+XXXX` notation, e.g. `"U+1F600"`.
/// A bare hexadecimal value without the `U+` prefix is also accepted.
///
/// Values that aren't valid codepoints, such as surrogates, are not
/// rejected, because [`encode`] accepts them and substitutes the replacement
/// character.
///
pub fn codepoint_from_string(s: &str) -> Result<Codepoint, String> {
  let digits = s
    .strip_prefix("U+")
    .or_else(|| s.strip_prefix("u+"))
    .unwrap_or(s);

  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
    return Err(format!("Invalid codepoint: {}", s));
  }

  Codepoint::from_str_radix(digits, 16)
    .map_err(|_| format!("Invalid codepoint: {}", s))
}

#[cfg(test)]
mod tests {
  use super::*;

  use rand::rngs::SmallRng;
  use rand::{Rng, SeedableRng};

  const RNG_SEED: u64 = 1023;

  #[test]
  fn encode_ascii_test() {
    assert_eq!(encode(&[]), []);

    assert_eq!(
      encode(&ascii_to_codepoints("Hello")),
      [0x48, 0x65, 0x6C, 0x6C, 0x6F]
    );
  }

  #[test]
  fn encode_symbols_test() {
    // "A≢Α."
    assert_eq!(
      encode(&[0x0041, 0x2262, 0x0391, 0x002E]),
      [0x41, 0xE2, 0x89, 0xA2, 0xCE, 0x91, 0x2E]
    );

    // "€"
    assert_eq!(encode(&[0x20AC]), [0xE2, 0x82, 0xAC]);
  }

  #[test]
  fn encode_japanese_test() {
    // "日本語"
    assert_eq!(
      encode(&[0x65E5, 0x672C, 0x8A9E]),
      [0xE6, 0x97, 0xA5, 0xE6, 0x9C, 0xAC, 0xE8, 0xAA, 0x9E]
    );
  }

  #[test]
  fn encode_supplementary_plane_test() {
    // "𣎴", a plane 2 character that needs four bytes
    assert_eq!(encode(&[0x233B4]), [0xF0, 0xA3, 0x8E, 0xB4]);
  }

  #[test]
  fn encode_beyond_last_valid_range_test() {
    assert_eq!(encode(&[0x110000]), REPLACEMENT_CHARACTER_BYTES);
    assert_eq!(encode(&[0x200000]), REPLACEMENT_CHARACTER_BYTES);
  }

  #[test]
  fn encode_surrogate_halves_test() {
    // The codepoints either side of the surrogate range encode normally
    assert_eq!(encode(&[0xD7FF]), [0xED, 0x9F, 0xBF]);
    assert_eq!(encode(&[0xE000]), [0xEE, 0x80, 0x80]);

    for codepoint in [0xD800, 0xD801, 0xD803, 0xDFEF, 0xDFFE, 0xDFFF] {
      assert_eq!(encode(&[codepoint]), REPLACEMENT_CHARACTER_BYTES);
    }
  }

  #[test]
  fn encode_substitutes_rather_than_drops_test() {
    // An invalid codepoint in the middle of a sequence is replaced and the
    // codepoints following it still encode
    assert_eq!(
      encode(&[0x41, 0xD800, 0x42]),
      [0x41, 0xEF, 0xBF, 0xBD, 0x42]
    );
  }

  #[test]
  fn encode_is_concatenative_test() {
    let a = [0x48, 0x2262, 0xD800, 0x233B4];
    let b = [0x65E5, 0x7F, 0x110000];

    let mut concatenated = a.to_vec();
    concatenated.extend_from_slice(&b);

    assert_eq!(encode(&concatenated), [encode(&a), encode(&b)].concat());
  }

  /// Checks the encoding of random valid codepoints against the standard
  /// library's own UTF-8 encoding.
  ///
  #[test]
  fn encode_matches_std_test() {
    let mut rng = SmallRng::seed_from_u64(RNG_SEED);

    for _ in 0..10_000 {
      let char: char = rng.gen();

      let mut buffer = [0u8; 4];
      let expected = char.encode_utf8(&mut buffer).as_bytes();

      assert_eq!(encode(&[char as Codepoint]), expected);
    }
  }

  #[test]
  fn ascii_to_codepoints_test() {
    assert_eq!(ascii_to_codepoints(""), []);

    assert_eq!(
      ascii_to_codepoints("Hello"),
      [0x48, 0x65, 0x6C, 0x6C, 0x6F]
    );
  }

  #[test]
  fn codepoint_from_string_test() {
    assert_eq!(codepoint_from_string("U+1F600"), Ok(0x1F600));
    assert_eq!(codepoint_from_string("u+41"), Ok(0x41));
    assert_eq!(codepoint_from_string("20AC"), Ok(0x20AC));
    assert_eq!(codepoint_from_string("U+D800"), Ok(0xD800));
    assert_eq!(codepoint_from_string("U+110000"), Ok(0x110000));

    assert_eq!(
      codepoint_from_string(""),
      Err("Invalid codepoint: ".to_string())
    );
    assert_eq!(
      codepoint_from_string("U+"),
      Err("Invalid codepoint: U+".to_string())
    );
    assert_eq!(
      codepoint_from_string("U+XYZ"),
      Err("Invalid codepoint: U+XYZ".to_string())
    );
    assert_eq!(
      codepoint_from_string("-41"),
      Err("Invalid codepoint: -41".to_string())
    );
    assert_eq!(
      codepoint_from_string("U+123456789"),
      Err("Invalid codepoint: U+123456789".to_string())
    );
  }
}

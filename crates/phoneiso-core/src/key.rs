// crates/phoneiso-core/src/key.rs

//! # Numeric Key Codec
//!
//! Turns the three accepted input forms (`u64`, ASCII-digit bytes, ASCII-digit
//! `&str`) into a [`DigitKey`]. Nothing here allocates: integers are rendered
//! into a [`DigitBuf`] on the stack, byte and string inputs are borrowed
//! verbatim, and [`append_u64`] writes into storage owned by the caller.

/// Longest number the E.164 plan allows.
pub const MAX_DIGITS: usize = 15;

/// `u64::MAX` has 20 decimal digits.
const U64_DIGITS: usize = 20;

/// A validated, borrowed sequence of 1 to [`MAX_DIGITS`] ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitKey<'a>(&'a [u8]);

impl<'a> DigitKey<'a> {
    /// Accepts `bytes` verbatim (leading zeros included) if every byte is an
    /// ASCII digit and the length is within `1..=MAX_DIGITS`.
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Option<Self> {
        if is_digit_key(bytes) {
            Some(DigitKey(bytes))
        } else {
            None
        }
    }

    #[inline]
    pub fn parse(s: &'a str) -> Option<Self> {
        Self::new(s.as_bytes())
    }

    /// The first `len` digits, or `None` if the key is shorter than `len`.
    #[inline]
    pub fn prefix(&self, len: usize) -> Option<&'a [u8]> {
        self.0.get(..len)
    }

    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// `true` when `bytes` is a non-empty run of at most [`MAX_DIGITS`] ASCII digits.
#[inline]
pub fn is_digit_key(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.len() <= MAX_DIGITS && bytes.iter().all(u8::is_ascii_digit)
}

/// Stack-rendered decimal form of a `u64`.
///
/// # Examples
/// ```rust
/// use phoneiso_core::key::DigitBuf;
///
/// let buf = DigitBuf::from_u64(4566118311);
/// assert_eq!(buf.as_bytes(), b"4566118311");
/// ```
#[derive(Clone, Copy)]
pub struct DigitBuf {
    buf: [u8; U64_DIGITS],
    start: usize,
}

impl DigitBuf {
    pub fn from_u64(mut n: u64) -> Self {
        let mut buf = [b'0'; U64_DIGITS];
        let mut start = U64_DIGITS;
        loop {
            start -= 1;
            buf[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        DigitBuf { buf, start }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }

    /// The rendered digits as a key; `None` once the value exceeds
    /// [`MAX_DIGITS`] digits.
    #[inline]
    pub fn key(&self) -> Option<DigitKey<'_>> {
        DigitKey::new(self.as_bytes())
    }
}

impl std::fmt::Debug for DigitBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DigitBuf")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

/// Appends the decimal digits of `n` to `buf` and returns the rendered slice.
///
/// Existing contents of `buf` are kept; only the newly written digits are
/// returned. When `buf` already has room for 20 more bytes this never
/// reallocates, so a single buffer can be cleared and reused across lookups.
///
/// ```rust
/// use phoneiso_core::key::append_u64;
///
/// let mut buf = Vec::with_capacity(16);
/// assert_eq!(append_u64(&mut buf, 4512345678), b"4512345678");
/// buf.clear();
/// assert_eq!(append_u64(&mut buf, 45), b"45");
/// ```
pub fn append_u64(buf: &mut Vec<u8>, n: u64) -> &[u8] {
    let start = buf.len();
    buf.extend_from_slice(DigitBuf::from_u64(n).as_bytes());
    &buf[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero_and_extremes() {
        assert_eq!(DigitBuf::from_u64(0).as_bytes(), b"0");
        assert_eq!(DigitBuf::from_u64(7).as_bytes(), b"7");
        assert_eq!(
            DigitBuf::from_u64(u64::MAX).as_bytes(),
            b"18446744073709551615"
        );
    }

    #[test]
    fn rejects_non_digits_and_bad_lengths() {
        assert!(DigitKey::new(b"").is_none());
        assert!(DigitKey::parse("+4566118311").is_none());
        assert!(DigitKey::parse("45 66").is_none());
        assert!(DigitKey::parse("1234567890123456").is_none());
        assert!(DigitKey::parse("123456789012345").is_some());
    }

    #[test]
    fn integers_past_fifteen_digits_have_no_key() {
        assert!(DigitBuf::from_u64(999_999_999_999_999).key().is_some());
        assert!(DigitBuf::from_u64(1_000_000_000_000_000).key().is_none());
    }

    #[test]
    fn string_input_keeps_leading_zeros() {
        let key = DigitKey::parse("0045").expect("digits");
        assert_eq!(key.as_bytes(), b"0045");
        assert_eq!(key.prefix(2), Some(&b"00"[..]));
        assert_eq!(key.prefix(5), None);
    }

    #[test]
    fn append_reuses_preallocated_buffer() {
        let mut buf = Vec::with_capacity(32);
        let ptr = buf.as_ptr();

        assert_eq!(append_u64(&mut buf, 4566118311), b"4566118311");
        buf.clear();
        assert_eq!(append_u64(&mut buf, 4512345678), b"4512345678");

        assert_eq!(buf.as_ptr(), ptr);
    }

    #[test]
    fn append_keeps_existing_contents() {
        let mut buf = b"x".to_vec();
        assert_eq!(append_u64(&mut buf, 42), b"42");
        assert_eq!(buf, b"x42");
    }
}

// crates/phoneiso-core/src/e164.rs

//! # E.164 Prefix Index
//!
//! Longest-prefix match over calling-code prefixes of 1 to 4 digits, with the
//! [`ExceptionTable`] consulted first.
//!
//! ```rust
//! use phoneiso_core::E164;
//!
//! assert_eq!(E164.lookup(4566118311), "DK");
//! assert_eq!(E164.lookup_str("14412921234"), "BM");
//! assert_eq!(E164.lookup_bytes(b"1204"), "CA");
//! assert_eq!(E164.lookup(0), "");
//! ```

use crate::error::{PhoneIsoError, Result};
use crate::exceptions::ExceptionTable;
use crate::key::{append_u64, DigitBuf, DigitKey};
use crate::model::{is_country_code, ExceptionEntry, PrefixEntry};
use std::collections::HashMap;

/// Longest generic calling-code prefix.
pub const MAX_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct E164Index {
    exceptions: ExceptionTable,
    prefixes: HashMap<Box<[u8]>, Box<str>>,
}

impl E164Index {
    pub fn build(prefixes: &[PrefixEntry], exceptions: &[ExceptionEntry]) -> Result<Self> {
        let exceptions = ExceptionTable::build(exceptions)?;

        let mut map = HashMap::with_capacity(prefixes.len());
        for p in prefixes {
            let bytes = p.prefix.as_bytes();
            if bytes.is_empty()
                || bytes.len() > MAX_PREFIX_LEN
                || !bytes.iter().all(u8::is_ascii_digit)
            {
                return Err(PhoneIsoError::InvalidData(format!(
                    "prefix {:?} must be 1 to {MAX_PREFIX_LEN} ASCII digits",
                    p.prefix
                )));
            }
            if bytes[0] == b'0' {
                return Err(PhoneIsoError::InvalidData(format!(
                    "prefix {:?}: no calling code starts with 0",
                    p.prefix
                )));
            }
            if !is_country_code(&p.country) {
                return Err(PhoneIsoError::InvalidData(format!(
                    "prefix {}: invalid country code {:?}",
                    p.prefix, p.country
                )));
            }
            if map.insert(bytes.into(), p.country.as_str().into()).is_some() {
                return Err(PhoneIsoError::InvalidData(format!(
                    "duplicate prefix {}",
                    p.prefix
                )));
            }
        }

        log::debug!(
            "built E.164 index: {} prefixes, {} exceptions",
            map.len(),
            exceptions.len()
        );

        Ok(E164Index {
            exceptions,
            prefixes: map,
        })
    }

    /// Country for a validated key, or `""`.
    pub fn resolve(&self, key: DigitKey<'_>) -> &str {
        if let Some(country) = self.exceptions.find(key) {
            return country;
        }

        (1..=MAX_PREFIX_LEN.min(key.len()))
            .rev()
            .filter_map(|len| key.prefix(len))
            .find_map(|p| self.prefixes.get(p))
            .map_or("", |c| &**c)
    }

    /// Country for a number given as an integer, or `""`.
    ///
    /// The digits are rendered on the stack; nothing is allocated.
    #[inline]
    pub fn lookup(&self, number: u64) -> &str {
        let buf = DigitBuf::from_u64(number);
        match buf.key() {
            Some(key) => self.resolve(key),
            None => "",
        }
    }

    /// Country for a number given as ASCII digits, or `""` for anything that
    /// is not 1 to 15 digits.
    #[inline]
    pub fn lookup_bytes(&self, digits: &[u8]) -> &str {
        DigitKey::new(digits).map_or("", |key| self.resolve(key))
    }

    #[inline]
    pub fn lookup_str(&self, digits: &str) -> &str {
        self.lookup_bytes(digits.as_bytes())
    }

    /// Renders `number` into `buf` (after clearing it) and looks it up.
    ///
    /// Useful when the caller wants the rendered digits too; `buf` keeps its
    /// capacity between calls.
    pub fn lookup_with_buf(&self, buf: &mut Vec<u8>, number: u64) -> &str {
        buf.clear();
        let digits = append_u64(buf, number);
        self.lookup_bytes(digits)
    }

    /// Every generic prefix and exception owned by `country`
    /// (case-insensitive), sorted. Exceptions are flagged with `true`.
    pub fn prefixes_for_country(&self, country: &str) -> Vec<(&str, bool)> {
        let mut out: Vec<(&str, bool)> = self
            .prefixes
            .iter()
            .filter(|(_, c)| c.eq_ignore_ascii_case(country))
            .map(|(p, _)| (std::str::from_utf8(p).unwrap_or_default(), false))
            .chain(
                self.exceptions
                    .iter()
                    .filter(|(_, c)| c.eq_ignore_ascii_case(country))
                    .map(|(p, _)| (p, true)),
            )
            .collect();
        out.sort_unstable();
        out
    }

    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }
}

// crates/phoneiso-core/src/exceptions.rs

//! # Exception Table
//!
//! Exact-prefix overrides consulted before the generic longest-prefix layer.
//! An exception wins whenever its whole prefix equals the leading digits of
//! the key, no matter how long or short the generic prefixes around it are.

use crate::error::{PhoneIsoError, Result};
use crate::key::{is_digit_key, DigitKey};
use crate::model::{is_country_code, ExceptionEntry};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ExceptionTable {
    by_prefix: HashMap<Box<[u8]>, Box<str>>,
    /// Distinct prefix lengths present, longest first.
    lengths: Vec<usize>,
}

impl ExceptionTable {
    pub fn build(entries: &[ExceptionEntry]) -> Result<Self> {
        let mut by_prefix = HashMap::with_capacity(entries.len());
        let mut lengths = Vec::new();

        for e in entries {
            if !is_digit_key(e.prefix.as_bytes()) {
                return Err(PhoneIsoError::InvalidData(format!(
                    "exception prefix {:?} must be 1 to 15 ASCII digits",
                    e.prefix
                )));
            }
            if e.prefix.starts_with('0') {
                return Err(PhoneIsoError::InvalidData(format!(
                    "exception prefix {:?}: no calling code starts with 0",
                    e.prefix
                )));
            }
            if !is_country_code(&e.country) {
                return Err(PhoneIsoError::InvalidData(format!(
                    "exception {}: invalid country code {:?}",
                    e.prefix, e.country
                )));
            }
            let prefix: Box<[u8]> = e.prefix.as_bytes().into();
            if by_prefix.insert(prefix, e.country.as_str().into()).is_some() {
                return Err(PhoneIsoError::InvalidData(format!(
                    "duplicate exception prefix {}",
                    e.prefix
                )));
            }
            if !lengths.contains(&e.prefix.len()) {
                lengths.push(e.prefix.len());
            }
        }

        lengths.sort_unstable_by(|a, b| b.cmp(a));

        Ok(ExceptionTable { by_prefix, lengths })
    }

    /// The override for `key`, if any. Longer exceptions beat shorter ones.
    #[inline]
    pub fn find(&self, key: DigitKey<'_>) -> Option<&str> {
        self.lengths
            .iter()
            .filter_map(|&len| key.prefix(len))
            .find_map(|p| self.by_prefix.get(p))
            .map(|c| &**c)
    }

    pub(crate) fn len(&self) -> usize {
        self.by_prefix.len()
    }

    /// All `(prefix, country)` pairs, unordered.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.by_prefix
            .iter()
            .map(|(p, c)| (std::str::from_utf8(p).unwrap_or_default(), &**c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(prefix: &str, country: &str) -> ExceptionEntry {
        ExceptionEntry {
            prefix: prefix.into(),
            country: country.into(),
        }
    }

    fn key(s: &str) -> DigitKey<'_> {
        DigitKey::parse(s).expect("test keys are digits")
    }

    #[test]
    fn longest_matching_exception_wins() {
        let t = ExceptionTable::build(&[entry("44", "ZZ"), entry("441624", "IM")]).unwrap();
        assert_eq!(t.find(key("441624123456")), Some("IM"));
        assert_eq!(t.find(key("441625123456")), Some("ZZ"));
        assert_eq!(t.find(key("45")), None);
    }

    #[test]
    fn exception_must_match_its_whole_length() {
        let t = ExceptionTable::build(&[entry("3906698", "VA")]).unwrap();
        assert_eq!(t.find(key("390669")), None);
        assert_eq!(t.find(key("39066981234")), Some("VA"));
    }

    #[test]
    fn rejects_bad_rows() {
        assert!(ExceptionTable::build(&[entry("38a", "XK")]).is_err());
        assert!(ExceptionTable::build(&[entry("", "XK")]).is_err());
        assert!(ExceptionTable::build(&[entry("383", "xk")]).is_err());
        assert!(ExceptionTable::build(&[entry("383", "XK"), entry("383", "RS")]).is_err());
    }

    #[test]
    fn rejects_prefix_with_leading_zero() {
        let res = ExceptionTable::build(&[entry("0", "ZZ")]);
        assert!(matches!(res, Err(PhoneIsoError::InvalidData(_))));
        assert!(ExceptionTable::build(&[entry("00383", "XK")]).is_err());
    }
}

// crates/phoneiso-core/src/text.rs

/// Convert a string into a folded key suitable for operator-name comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Télécom` -> `Telecom`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use phoneiso_core::text::fold_key;
///
/// assert_eq!(fold_key("UTS Caraïbe"), "uts caraibe");
/// assert_eq!(fold_key("Telefónica"), "telefonica");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_key("Orange Caraïbe"), "orange caraibe");
        assert_ne!(fold_key("Telia"), fold_key("Telenor"));
    }
}

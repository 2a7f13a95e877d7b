// crates/volcano-core/src/text.rs

/// Convert a string into a folded key suitable for fuzzy comparison.
///
/// Transliterates Unicode to ASCII with `deunicode` and lowercases the
/// result, so `"Nevado del Ruíz"` and `"nevado del ruiz"` fold to the same key.
///
/// ```rust
/// use volcano_core::text::fold_key;
///
/// assert_eq!(fold_key("Ruíz"), "ruiz");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Case-insensitive equality without accent folding.
///
/// `"JAPAN"` equals `"Japan"`, but `"Mexico"` does not equal `"México"`.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

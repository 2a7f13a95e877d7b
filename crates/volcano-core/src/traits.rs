// crates/volcano-core/src/traits.rs
use crate::model::Volcano;
use crate::text::fold_key;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Comparisons go through [`fold_key`], so they ignore case and accents.
///
/// # Examples
/// ```rust
/// use volcano_core::traits::NameMatch;
///
/// struct Peak(&'static str);
/// impl NameMatch for Peak {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Peak("Öræfajökull").is_named("oraefajokull"));
/// assert!(Peak("Nevado del Ruíz").name_contains("RUIZ"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Accent-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        fold_key(self.name_str()) == fold_key(q)
    }

    /// Accent-insensitive and case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        fold_key(self.name_str()).contains(&fold_key(q))
    }
}

impl NameMatch for Volcano {
    fn name_str(&self) -> &str {
        self.name()
    }
}

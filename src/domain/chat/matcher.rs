//! Case-insensitive keyword matching.
//!
//! The single text predicate shared by emergency escalation and intent
//! classification. Both call sites must see identical case-folding and
//! substring semantics, so the fold happens in exactly one place.

/// Returns true if `text` contains any entry of `lexicon` as a substring.
///
/// Matching is case-insensitive via a locale-invariant Unicode lowercase
/// fold and stops at the first hit. An empty lexicon never matches.
pub fn matches_any(text: &str, lexicon: &[&str]) -> bool {
    let folded = text.to_lowercase();
    lexicon.iter().any(|word| folded.contains(word))
}

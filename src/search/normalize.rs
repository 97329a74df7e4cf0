//! Ingredient normalization.

/// Separator used to merge raw inputs before splitting them back into terms.
///
/// A single raw entry may itself hold several comma-separated ingredients
/// (`"eggs, bacon"`), so splitting on it after the join yields one term each.
const SEPARATOR: char = ',';

/// Turns raw ingredient strings into lower-cased, trimmed, non-empty terms.
///
/// Input order is preserved and duplicates are kept. The function is total and
/// idempotent: normalizing its own output returns the same sequence.
pub fn normalize_ingredients<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let joined = raw
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&SEPARATOR.to_string())
        .to_lowercase();

    joined
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

use std::collections::BTreeSet;

use shared::domain::Substance;

pub const KEY_SEPARATOR: &str = "+";

/// Builds the lookup key for a reactant combination.
///
/// Symbols are deduplicated and ordered by plain `str` ordering over the exact
/// symbol text (subscript glyphs included, no case folding), then joined with
/// `+`. Input order and repetition never change the key.
pub fn canonical_key<I, S>(symbols: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unique: BTreeSet<String> = symbols
        .into_iter()
        .map(|symbol| symbol.as_ref().to_owned())
        .collect();
    unique.into_iter().collect::<Vec<_>>().join(KEY_SEPARATOR)
}

pub fn canonical_key_for(substances: &[Substance]) -> String {
    canonical_key(substances.iter().map(|substance| substance.symbol.as_str()))
}

/// Number of distinct symbols a key was built from.
pub fn reactant_count(key: &str) -> usize {
    if key.is_empty() {
        0
    } else {
        key.split(KEY_SEPARATOR).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_order_and_repetition() {
        assert_eq!(canonical_key(["O₂", "H₂"]), "H₂+O₂");
        assert_eq!(canonical_key(["H₂", "O₂", "H₂"]), "H₂+O₂");
        assert_eq!(canonical_key(["H₂", "H₂"]), "H₂");
    }

    #[test]
    fn key_sorts_exact_symbol_text() {
        // Uppercase sorts before lowercase; nothing is transliterated.
        assert_eq!(canonical_key(["Ca(OH)₂", "CO₂"]), "CO₂+Ca(OH)₂");
        assert_eq!(canonical_key(["P", "O₂"]), "O₂+P");
        assert_ne!(canonical_key(["O2", "H2"]), canonical_key(["O₂", "H₂"]));
    }

    #[test]
    fn reactant_count_matches_distinct_symbols() {
        assert_eq!(reactant_count(""), 0);
        assert_eq!(reactant_count(&canonical_key(["Fe", "S", "Fe"])), 2);
    }
}

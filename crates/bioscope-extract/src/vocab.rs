//! Fixed extraction vocabularies.
//!
//! The vocabulary is declarative data, separate from the matching loop in
//! `extractor`, so it can be extended and tested on its own. Patterns are
//! compiled case-insensitively by the extractor.

/// Mission-name alternation: program identifiers, station names, lab names
/// and numbered flight designators.
pub const MISSION_PATTERN: &str =
    r"Bion-M\s?\d+|STS-\d+|ISS|International Space Station|Space Shuttle|Spacelab-?\d*|NeuroLab";

/// Organism alternation: species and common names.
pub const ORGANISM_PATTERN: &str = r"mice|mouse|Mus musculus|rats|human|Homo sapiens|C57BL/6J?";

/// Keyword phrases mapped to their canonical display labels.
///
/// Phrases are tested as lower-case substring containment, not whole-word
/// matches; short phrases like "bone" matching inside longer words is
/// accepted behavior.
pub const KEYWORD_PHRASES: &[(&str, &str)] = &[
    ("microgravity", "Microgravity"),
    ("bone", "Bone"),
    ("muscle", "Muscle"),
    ("cardiovascular", "Cardiovascular"),
    ("radiation", "Radiation"),
    ("oxidative stress", "Oxidative Stress"),
    ("cell cycle", "Cell Cycle"),
    ("stem cell", "Stem Cells"),
    ("osteoblast", "Osteoblasts"),
    ("spaceflight", "Spaceflight"),
    ("immune", "Immune System"),
    ("gene expression", "Gene Expression"),
];

/// Raw organism spellings (lower-cased) mapped to canonical labels.
/// Matches with no table entry pass through with their original casing.
pub const ORGANISM_CANON: &[(&str, &str)] = &[
    ("mice", "Mice"),
    ("mouse", "Mice"),
    ("mus musculus", "Mice"),
    ("rats", "Rats"),
    ("human", "Humans"),
    ("homo sapiens", "Humans"),
    ("c57bl/6j", "Mice"),
    ("c57bl/6", "Mice"),
];

/// Look up the canonical label for a raw organism mention.
pub fn canonical_organism(raw: &str) -> Option<&'static str> {
    let lower = raw.to_lowercase();
    ORGANISM_CANON
        .iter()
        .find(|(variant, _)| *variant == lower)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_size() {
        assert_eq!(KEYWORD_PHRASES.len(), 12);
    }

    #[test]
    fn test_keyword_phrases_are_lowercase() {
        for (phrase, _) in KEYWORD_PHRASES {
            assert_eq!(*phrase, phrase.to_lowercase());
        }
    }

    #[test]
    fn test_canonical_organism_variants() {
        assert_eq!(canonical_organism("Mus musculus"), Some("Mice"));
        assert_eq!(canonical_organism("MICE"), Some("Mice"));
        assert_eq!(canonical_organism("C57BL/6J"), Some("Mice"));
        assert_eq!(canonical_organism("Homo sapiens"), Some("Humans"));
        assert_eq!(canonical_organism("human"), Some("Humans"));
        assert_eq!(canonical_organism("rats"), Some("Rats"));
    }

    #[test]
    fn test_unmapped_organism_passes_through() {
        assert_eq!(canonical_organism("Arabidopsis"), None);
    }
}

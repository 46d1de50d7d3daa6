//! Entity extraction from publication text.

use regex::{Regex, RegexBuilder};

use bioscope_core::Document;

use crate::normalize::normalize;
use crate::vocab;

/// Entities extracted from one document, distinct and insertion-ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentEntities {
    /// Mission mentions, identified by exact trimmed matched text.
    pub missions: Vec<String>,
    /// Canonical keyword labels.
    pub keywords: Vec<String>,
    /// Canonical organism labels (unmapped mentions pass through).
    pub organisms: Vec<String>,
}

/// Extracts mission, keyword and organism mentions with pre-compiled
/// patterns from the fixed vocabulary.
pub struct EntityExtractor {
    mission_regex: Regex,
    organism_regex: Regex,
}

impl EntityExtractor {
    /// Create a new extractor. The vocabulary patterns are compile-time
    /// constants, so construction cannot fail at runtime.
    pub fn new() -> Self {
        Self {
            mission_regex: case_insensitive(vocab::MISSION_PATTERN),
            organism_regex: case_insensitive(vocab::ORGANISM_PATTERN),
        }
    }

    /// Extract all recognized entities from the given document.
    ///
    /// Missions match over the introduction; keywords over title +
    /// abstract; organisms over introduction + abstract. Unmatched text is
    /// absence of an entity, not an error.
    pub fn extract(&self, doc: &Document) -> DocumentEntities {
        let title = normalize(doc.title.as_deref());
        let abstract_text = normalize(doc.abstract_text.as_deref());
        let introduction = normalize(doc.introduction.as_deref());

        DocumentEntities {
            missions: self.extract_missions(&introduction),
            keywords: extract_keywords(&title, &abstract_text),
            organisms: self.extract_organisms(&introduction, &abstract_text),
        }
    }

    fn extract_missions(&self, introduction: &str) -> Vec<String> {
        let mut missions: Vec<String> = Vec::new();
        for m in self.mission_regex.find_iter(introduction) {
            let text = m.as_str().trim().to_string();
            // Identity is the exact trimmed matched text; casing is
            // preserved from the first occurrence.
            if !missions.contains(&text) {
                missions.push(text);
            }
        }
        missions
    }

    fn extract_organisms(&self, introduction: &str, abstract_text: &str) -> Vec<String> {
        let combined = format!("{} {}", introduction, abstract_text);
        let mut organisms: Vec<String> = Vec::new();
        for m in self.organism_regex.find_iter(&combined) {
            let raw = m.as_str().trim();
            let label = vocab::canonical_organism(raw)
                .map(str::to_string)
                .unwrap_or_else(|| raw.to_string());
            if !organisms.contains(&label) {
                organisms.push(label);
            }
        }
        organisms
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn extract_keywords(title: &str, abstract_text: &str) -> Vec<String> {
    let combined = format!("{} {}", title, abstract_text).to_lowercase();
    vocab::KEYWORD_PHRASES
        .iter()
        .filter(|(phrase, _)| combined.contains(phrase))
        .map(|(_, label)| label.to_string())
        .collect()
}

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid vocabulary pattern {:?}: {}", pattern, e))
}

//! Additive relevance scoring.

use serde::Serialize;

use bioscope_core::{Corpus, Document};
use bioscope_extract::normalize;

/// Field weights for an exact query-substring match.
const EXACT_TITLE: u32 = 10;
const EXACT_ABSTRACT: u32 = 5;
const EXACT_INTRODUCTION: u32 = 2;

/// Field weights per matching query word (words longer than 2 chars).
const WORD_TITLE: u32 = 3;
const WORD_ABSTRACT: u32 = 2;
const WORD_INTRODUCTION: u32 = 1;

/// One ranked match. Ephemeral; recomputed per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub document_id: String,
    pub relevance: u32,
}

/// Rank the corpus against a query.
///
/// The query is whitespace-trimmed and case-folded before scoring; an
/// empty or whitespace-only query yields an empty result, not an error.
/// Documents scoring zero are excluded. Results are sorted descending by
/// score with a stable sort, so ties keep corpus order and repeated
/// identical queries return identical output.
pub fn search(corpus: &Corpus, query: &str) -> Vec<SearchResult> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let words: Vec<&str> = query.split_whitespace().filter(|w| w.len() > 2).collect();

    let mut results: Vec<SearchResult> = corpus
        .iter()
        .filter_map(|(id, doc)| {
            let relevance = score(doc, &query, &words);
            (relevance > 0).then(|| SearchResult {
                document_id: id.to_string(),
                relevance,
            })
        })
        .collect();

    results.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    results
}

fn score(doc: &Document, query: &str, words: &[&str]) -> u32 {
    let title = normalize(doc.title.as_deref()).to_lowercase();
    let abstract_text = normalize(doc.abstract_text.as_deref()).to_lowercase();
    let introduction = normalize(doc.introduction.as_deref()).to_lowercase();

    let mut relevance = 0;

    if title.contains(query) {
        relevance += EXACT_TITLE;
    }
    if abstract_text.contains(query) {
        relevance += EXACT_ABSTRACT;
    }
    if introduction.contains(query) {
        relevance += EXACT_INTRODUCTION;
    }

    for word in words {
        if title.contains(word) {
            relevance += WORD_TITLE;
        }
        if abstract_text.contains(word) {
            relevance += WORD_ABSTRACT;
        }
        if introduction.contains(word) {
            relevance += WORD_INTRODUCTION;
        }
    }

    relevance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(json: &str) -> Corpus {
        Corpus::from_json_str(json).unwrap()
    }

    fn sample() -> Corpus {
        corpus(
            r#"{
                "1": {
                    "Title": "Microgravity Effects on Mouse Bone Density",
                    "Abstract": "bone loss in mice during spaceflight on the ISS",
                    "Introduction": "Long-duration flight causes bone remodeling."
                },
                "2": {
                    "Title": "Radiation shielding materials",
                    "Abstract": "Materials testing for deep space"
                },
                "3": {
                    "Title": "Muscle atrophy countermeasures",
                    "Abstract": "exercise protocols against muscle and bone loss"
                }
            }"#,
        )
    }

    #[test]
    fn test_empty_query_yields_no_results() {
        assert!(search(&sample(), "").is_empty());
        assert!(search(&sample(), "   \t ").is_empty());
    }

    #[test]
    fn test_no_match_excluded() {
        let results = search(&sample(), "plankton");
        assert!(results.is_empty());
    }

    #[test]
    fn test_spec_bone_scenario() {
        let results = search(&sample(), "bone");
        let top = &results[0];
        assert_eq!(top.document_id, "1");
        // Exact match in title (+10), abstract (+5), introduction (+2);
        // "bone" has length 4 so the word pass fires too (+3+2+1).
        assert_eq!(top.relevance, 23);
        assert!(top.relevance >= 15);
    }

    #[test]
    fn test_exact_and_word_scores_are_additive() {
        let c = corpus(r#"{"1": {"Title": "bone density", "Abstract": "density of bone"}}"#);
        let results = search(&c, "bone density");
        // Exact phrase in title (+10), not in abstract; words "bone" and
        // "density" each hit title (+3) and abstract (+2).
        assert_eq!(results[0].relevance, 10 + 2 * (3 + 2));
    }

    #[test]
    fn test_short_words_are_ignored() {
        let c = corpus(r#"{"1": {"Title": "An ox in orbit"}}"#);
        // "ox" (2 chars) is below the word-length threshold, and the full
        // query string does not appear verbatim.
        let results = search(&c, "ox zz");
        assert!(results.is_empty());
    }

    #[test]
    fn test_query_is_case_folded_and_trimmed() {
        let results = search(&sample(), "  BONE  ");
        assert!(!results.is_empty());
        assert_eq!(results[0].document_id, "1");
    }

    #[test]
    fn test_normalization_applies_to_fields() {
        let c = corpus(r#"{"1": {"Title": "Radiation study", "Abstract": "Abstract \"radiation dosimetry\""}}"#);
        let results = search(&c, "radiation dosimetry");
        // The label/quote wrapping must not block the exact abstract match.
        assert!(results[0].relevance >= 5);
    }

    #[test]
    fn test_descending_order_with_stable_ties() {
        let c = corpus(
            r#"{
                "a": {"Abstract": "muscle"},
                "b": {"Abstract": "muscle"},
                "c": {"Title": "muscle"}
            }"#,
        );
        let results = search(&c, "muscle");
        assert_eq!(results[0].document_id, "c");
        // Tied documents keep corpus order.
        assert_eq!(results[1].document_id, "a");
        assert_eq!(results[2].document_id, "b");
    }

    #[test]
    fn test_determinism_on_repeat() {
        let c = sample();
        let first = search(&c, "microgravity bone");
        let second = search(&c, "microgravity bone");
        assert_eq!(first, second);
    }

    #[test]
    fn test_adding_matching_word_never_decreases_score() {
        let c = corpus(r#"{"1": {"Title": "bone mice density study"}}"#);
        let base = search(&c, "bone mice");
        let extended = search(&c, "bone mice density");
        // Exact phrase still matches and the extra word adds its own
        // per-field weight on top.
        assert_eq!(base[0].relevance, 10 + 3 + 3);
        assert_eq!(extended[0].relevance, 10 + 3 + 3 + 3);
        assert!(extended[0].relevance >= base[0].relevance);
    }
}

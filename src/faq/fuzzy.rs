//! Token-set string similarity over the FAQ questions
//!
//! Independent from the TF-IDF signal: this score only gates whether a FAQ
//! answer may be returned, it never selects which one. The scan is O(corpus)
//! per turn and is the dominant cost when no rule short-circuits.

use std::collections::BTreeSet;

use strsim::normalized_levenshtein;

use crate::faq::FaqCorpus;
use crate::text;

/// Normalized edit-distance ratio between two rendered strings. An empty
/// side scores 0.0 so that an empty query cannot trivially match.
fn pairwise_ratio(a: &str, b: &str) -> f32 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    normalized_levenshtein(a, b) as f32
}

/// Token-set similarity ratio between two texts, in [0, 1]
///
/// Both sides are lowercased, stripped of punctuation, and split into token
/// sets. The shared tokens and each side's remainder are rendered back into
/// sorted strings, and the best pairwise ratio among the three combinations
/// is returned. Word order and repetition therefore do not matter.
pub fn token_set_ratio(a: &str, b: &str) -> f32 {
    let tokens_a: BTreeSet<String> =
        text::normalize(a).split_whitespace().map(str::to_string).collect();
    let tokens_b: BTreeSet<String> =
        text::normalize(b).split_whitespace().map(str::to_string).collect();

    let shared: Vec<&str> = tokens_a.intersection(&tokens_b).map(String::as_str).collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).map(String::as_str).collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).map(String::as_str).collect();

    let shared = shared.join(" ");
    let combined_a = join_nonempty(&shared, &only_a.join(" "));
    let combined_b = join_nonempty(&shared, &only_b.join(" "));

    pairwise_ratio(&shared, &combined_a)
        .max(pairwise_ratio(&shared, &combined_b))
        .max(pairwise_ratio(&combined_a, &combined_b))
}

fn join_nonempty(left: &str, right: &str) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{left} {right}"),
    }
}

/// Best token-set ratio between the raw query and any FAQ question,
/// or 0.0 for an empty corpus
pub fn best_score(corpus: &FaqCorpus, raw_query: &str) -> f32 {
    corpus
        .entries()
        .iter()
        .map(|e| token_set_ratio(raw_query, &e.question))
        .fold(0.0, f32::max)
}

//! TF-IDF similarity index over the FAQ question corpus

use std::collections::HashMap;

use crate::error::{HrdeskError, HrdeskResult};
use crate::faq::FaqCorpus;
use crate::text;

/// English stop words excluded from the vocabulary and from queries
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "cannot", "could", "did", "do", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further", "had",
    "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "of", "off", "on",
    "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out",
    "over", "own", "same", "she", "should", "so", "some", "such", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}

/// Normalize and split text into index terms: whitespace tokens of at
/// least two characters, stop words removed
fn tokenize(raw: &str) -> Vec<String> {
    text::normalize(raw)
        .split_whitespace()
        .filter(|t| t.len() >= 2 && !is_stop_word(t))
        .map(|t| t.to_string())
        .collect()
}

/// Term-weighted vector space fitted over the FAQ questions
///
/// One L2-normalized TF-IDF vector is stored per question, aligned with the
/// corpus row order. The index is built once at initialization and never
/// mutated afterwards, so it can be shared read-only across sessions.
pub struct TfidfIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    rows: Vec<Vec<(usize, f32)>>,
}

impl TfidfIndex {
    /// Fit the vocabulary, IDF weights, and per-question vectors
    ///
    /// Fails if the corpus is empty or no question yields a single index
    /// term.
    pub fn fit(corpus: &FaqCorpus) -> HrdeskResult<Self> {
        if corpus.is_empty() {
            return Err(HrdeskError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> = corpus
            .entries()
            .iter()
            .map(|e| tokenize(&e.question))
            .collect();

        // Vocabulary in first-seen order
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        for tokens in &tokenized {
            for token in tokens {
                let next = vocabulary.len();
                vocabulary.entry(token.clone()).or_insert(next);
            }
        }
        if vocabulary.is_empty() {
            return Err(HrdeskError::EmptyCorpus);
        }

        // Document frequency per term
        let mut df = vec![0u32; vocabulary.len()];
        for tokens in &tokenized {
            let mut seen = vec![false; vocabulary.len()];
            for token in tokens {
                let term = vocabulary[token];
                if !seen[term] {
                    seen[term] = true;
                    df[term] += 1;
                }
            }
        }

        // Smoothed inverse document frequency
        let n = corpus.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let rows = tokenized
            .iter()
            .map(|tokens| Self::weigh(tokens, &vocabulary, &idf))
            .collect();

        tracing::info!(
            "Fitted TF-IDF index: {} questions, {} terms",
            corpus.len(),
            vocabulary.len()
        );

        Ok(Self { vocabulary, idf, rows })
    }

    /// Project tokens into the fitted space as a sparse L2-normalized vector.
    /// Out-of-vocabulary tokens contribute nothing.
    fn weigh(tokens: &[String], vocabulary: &HashMap<String, usize>, idf: &[f32]) -> Vec<(usize, f32)> {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in tokens {
            if let Some(&term) = vocabulary.get(token) {
                *counts.entry(term).or_insert(0.0) += 1.0;
            }
        }

        let mut weights: Vec<(usize, f32)> =
            counts.into_iter().map(|(term, tf)| (term, tf * idf[term])).collect();
        let norm = weights.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut weights {
                *w /= norm;
            }
        }
        weights.sort_unstable_by_key(|&(term, _)| term);
        weights
    }

    /// Return the index of the best-matching question and its cosine
    /// similarity in [0, 1]. Ties break toward the first row.
    pub fn best_match(&self, raw_query: &str) -> (usize, f32) {
        let tokens = tokenize(raw_query);
        let query = Self::weigh(&tokens, &self.vocabulary, &self.idf);
        let query: HashMap<usize, f32> = query.into_iter().collect();

        let mut best_index = 0;
        let mut best_score = f32::MIN;
        for (index, row) in self.rows.iter().enumerate() {
            let score: f32 = row
                .iter()
                .filter_map(|(term, w)| query.get(term).map(|q| q * w))
                .sum();
            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }

        (best_index, best_score.clamp(0.0, 1.0))
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

//! TF-IDF feature extraction over a batch of normalized documents.
//!
//! The vocabulary is capped at the highest-scoring terms (summed TF-IDF
//! across the batch), with English stopwords and very short tokens removed.
//! Vectors are dense, L2-normalized, and deterministic for identical input.

use std::collections::HashMap;

use pulse_core::errors::ClusteringError;

/// Batch TF-IDF vectorizer with a fixed vocabulary cap.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    max_terms: usize,
}

impl TfIdfVectorizer {
    pub fn new(max_terms: usize) -> Self {
        Self { max_terms }
    }

    /// Build one feature vector per document. All vectors share the same
    /// dimensionality (the fitted vocabulary size).
    ///
    /// Fails when no document yields a single usable term — the caller
    /// degrades to its fallback cluster in that case.
    pub fn fit_transform(&self, documents: &[String]) -> Result<Vec<Vec<f32>>, ClusteringError> {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d)).collect();

        let vocabulary = self.fit_vocabulary(&tokenized);
        if vocabulary.is_empty() {
            return Err(ClusteringError::VectorizationFailed {
                reason: "no usable terms in any document".to_string(),
            });
        }

        // Document frequency over the fitted vocabulary.
        let n_docs = documents.len() as f32;
        let mut df: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: std::collections::HashSet<&str> =
                tokens.iter().map(String::as_str).collect();
            for term in unique {
                if vocabulary.contains_key(term) {
                    *df.entry(term).or_insert(0) += 1;
                }
            }
        }

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                let mut vec = vec![0.0f32; vocabulary.len()];
                if tokens.is_empty() {
                    return vec;
                }
                let total = tokens.len() as f32;
                let mut tf: HashMap<&str, f32> = HashMap::new();
                for tok in tokens {
                    *tf.entry(tok.as_str()).or_default() += 1.0;
                }
                for (term, count) in tf {
                    if let Some(&index) = vocabulary.get(term) {
                        let doc_freq = df.get(term).copied().unwrap_or(1) as f32;
                        let idf = (n_docs / doc_freq).ln() + 1.0;
                        vec[index] = (count / total) * idf;
                    }
                }
                l2_normalize(&mut vec);
                vec
            })
            .collect();

        Ok(vectors)
    }

    /// Select up to `max_terms` terms and assign each a stable column index.
    ///
    /// Terms are ranked by summed TF-IDF across the batch; ties break
    /// lexicographically so the vocabulary is deterministic.
    fn fit_vocabulary(&self, tokenized: &[Vec<String>]) -> HashMap<String, usize> {
        if self.max_terms == 0 {
            return HashMap::new();
        }

        let n_docs = tokenized.len() as f64;
        let mut df: HashMap<&str, usize> = HashMap::new();
        let mut tf: HashMap<&str, usize> = HashMap::new();
        for tokens in tokenized {
            let unique: std::collections::HashSet<&str> =
                tokens.iter().map(String::as_str).collect();
            for term in unique {
                *df.entry(term).or_insert(0) += 1;
            }
            for term in tokens {
                *tf.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let mut scored: Vec<(&str, f64)> = tf
            .iter()
            .filter_map(|(term, &count)| {
                let doc_freq = *df.get(term)? as f64;
                let idf = (n_docs / doc_freq).ln() + 1.0;
                Some((*term, count as f64 * idf))
            })
            .collect();
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        scored.truncate(self.max_terms);

        // Column indices in alphabetical order, independent of score order.
        let mut terms: Vec<&str> = scored.iter().map(|(t, _)| *t).collect();
        terms.sort_unstable();
        terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect()
    }
}

/// Whitespace tokenizer over already-normalized text; drops stopwords and
/// tokens shorter than 3 characters.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|w| w.len() > 2 && !is_stop_word(w))
        .map(str::to_string)
        .collect()
}

fn l2_normalize(vec: &mut [f32]) {
    let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in vec {
            *v /= norm;
        }
    }
}

fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "the"
            | "and"
            | "for"
            | "are"
            | "but"
            | "not"
            | "you"
            | "all"
            | "any"
            | "can"
            | "had"
            | "her"
            | "was"
            | "one"
            | "our"
            | "out"
            | "has"
            | "have"
            | "been"
            | "from"
            | "this"
            | "that"
            | "with"
            | "they"
            | "will"
            | "each"
            | "very"
            | "when"
            | "where"
            | "which"
            | "there"
            | "their"
            | "said"
            | "what"
            | "its"
            | "into"
            | "more"
            | "some"
            | "such"
            | "than"
            | "then"
            | "them"
            | "these"
            | "other"
            | "about"
            | "again"
            | "because"
            | "being"
            | "while"
            | "would"
            | "should"
            | "could"
    )
}

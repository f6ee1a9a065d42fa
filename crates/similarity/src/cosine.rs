use canonical::{ngrams, CanonicalError};
use hashbrown::HashMap;

use crate::Similarity;

/// Cosine similarity over character n-gram frequency vectors.
///
/// Each string becomes a sparse frequency vector of its grams (produced by
/// [`canonical::ngrams`], so the same sentinel padding the index sees
/// applies here), and the score is the cosine of the angle between the two
/// vectors: `dot / (norm_a * norm_b)`.
#[derive(Debug, Clone)]
pub struct NgramCosine {
    n: usize,
}

impl NgramCosine {
    /// Gram size used when none is specified.
    pub const DEFAULT_NGRAM_SIZE: usize = 3;

    /// Build a scorer over grams of length `n`.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalError::InvalidNgramSize`] when `n < 1`; the
    /// invalid size is reported, not corrected.
    pub fn new(n: usize) -> Result<Self, CanonicalError> {
        if n < 1 {
            return Err(CanonicalError::InvalidNgramSize(n));
        }
        Ok(Self { n })
    }

    /// Gram size this scorer operates at.
    pub fn size(&self) -> usize {
        self.n
    }

    fn frequencies(&self, text: &str) -> HashMap<String, u32> {
        let mut freq = HashMap::new();
        let grams = ngrams(text, self.n).expect("gram size validated at construction");
        for gram in grams {
            *freq.entry(gram).or_insert(0u32) += 1;
        }
        freq
    }
}

impl Default for NgramCosine {
    fn default() -> Self {
        Self {
            n: Self::DEFAULT_NGRAM_SIZE,
        }
    }
}

impl Similarity for NgramCosine {
    fn score(&self, a: &str, b: &str) -> f64 {
        let freq_a = self.frequencies(a);
        let freq_b = self.frequencies(b);

        // Strings too short to produce a single gram have no vector to
        // compare; identical inputs still count as a perfect match.
        if freq_a.is_empty() || freq_b.is_empty() {
            return if a == b { 1.0 } else { 0.0 };
        }

        let dot: u64 = freq_a
            .iter()
            .filter_map(|(gram, &count_a)| {
                freq_b
                    .get(gram)
                    .map(|&count_b| u64::from(count_a) * u64::from(count_b))
            })
            .sum();
        if dot == 0 {
            return 0.0;
        }

        let score = dot as f64 / (norm(&freq_a) * norm(&freq_b));
        score.min(1.0)
    }
}

fn norm(freq: &HashMap<String, u32>) -> f64 {
    let sum_of_squares: u64 = freq
        .values()
        .map(|&count| u64::from(count) * u64::from(count))
        .sum();
    (sum_of_squares as f64).sqrt()
}

//! Cosine similarity between bigram vectors.

use crate::vector::bigram::WordVector;

/// Cosine similarity of two word vectors, in `[0, 1]`.
///
/// The dot product only visits bigrams present in both vectors; the shorter
/// map is iterated and probed against the longer one. A zero norm on either
/// side yields 0.
///
/// # Examples
///
/// ```
/// use lexispell::vector::{cosine_similarity, vectorize};
///
/// let cat = vectorize("cat").unwrap();
/// let cats = vectorize("cats").unwrap();
///
/// assert_eq!(cosine_similarity(&cat, &cat), 1.0);
/// assert!(cosine_similarity(&cat, &cats) > 0.8);
/// ```
pub fn cosine_similarity(a: &WordVector, b: &WordVector) -> f64 {
    if a.squared_norm() == 0 || b.squared_norm() == 0 {
        return 0.0;
    }

    let dot = dot_product(a, b);
    if dot == 0 {
        return 0.0;
    }

    // sqrt(|a|^2 * |b|^2) == |a| * |b|, computed from exact integers so that
    // cosine_similarity(w, w) is exactly 1.
    let denominator = (a.squared_norm() as f64 * b.squared_norm() as f64).sqrt();
    dot as f64 / denominator
}

/// Sum of count products over the bigrams shared by both vectors.
pub fn dot_product(a: &WordVector, b: &WordVector) -> u64 {
    let (small, large) = if a.dimension() <= b.dimension() {
        (a, b)
    } else {
        (b, a)
    };

    small
        .bigrams()
        .iter()
        .filter_map(|(bigram, &count)| {
            large
                .bigrams()
                .get(bigram)
                .map(|&other| u64::from(count) * u64::from(other))
        })
        .sum()
}

//! Character-bigram vectors and the similarity measure between them.
//!
//! # Module Structure
//!
//! - `bigram`: word vectorization ([`WordVector`], [`vectorize`])
//! - `similarity`: cosine similarity between two word vectors

pub mod bigram;
pub mod similarity;

pub use self::bigram::{Bigram, WordVector, vectorize};
pub use self::similarity::cosine_similarity;

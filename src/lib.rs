//! # Lexispell
//!
//! A lightweight spell checker that ranks dictionary candidates by
//! character-bigram cosine similarity.
//!
//! ## Features
//!
//! - Pure Rust implementation, no language models
//! - Sparse bigram frequency vectors with cached norms
//! - Deterministic top-N suggestion ranking
//! - Per-line metadata (characters, words, mistakes) with first-occurrence tracking
//! - Text and JSON reports

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod spelling;
pub mod vector;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Corpus tooling: preprocessing, tokenization, and model training.

pub mod preprocess;
pub mod tokenizer;
pub mod trainer;

//! Animarkov — Markov-chain story telling with per-decision reporting.
//!
//! Samples successive token chunks from a trained Markov model and surfaces
//! each decision — the chunk taken plus the alternatives that were not — so
//! a rendering or narration layer can animate the choice. Also includes the
//! corpus tooling that builds models from plain-text stories.

pub mod core;
pub mod corpus;

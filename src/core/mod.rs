//! Core generation: the Markov model and the story tick loop.

pub mod driver;
pub mod markov;

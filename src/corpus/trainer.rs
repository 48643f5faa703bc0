/// Model training — records every state transition a story exhibits.

use crate::core::markov::{Followup, MarkovModel, Token, NEWLINE_TOKEN, WINDOW_MAX};
use crate::corpus::tokenizer::tokenize_story;

/// Trains story models from raw text.
pub struct StoryTrainer;

impl StoryTrainer {
    /// Tokenize `text` and record its transitions into a fresh model.
    pub fn train(text: &str) -> MarkovModel {
        let mut model = MarkovModel::new();
        Self::train_into(&mut model, text);
        model
    }

    /// Record the transitions of `text` into an existing model. Training is
    /// additive, so several stories can share one table.
    pub fn train_into(model: &mut MarkovModel, text: &str) {
        let tokens = tokenize_story(text);
        for (state, followup) in iter_states(&tokens, WINDOW_MAX) {
            model.add_sample(&state, followup);
        }
    }
}

/// The (state, followup) pairs a token stream exhibits.
///
/// The first transition goes from the sentinel start state to the leading
/// `state_size`-token chunk; every later token is a one-token followup of
/// the `state_size` tokens before it. The trailing empty followup marks the
/// end of the story.
fn iter_states(tokens: &[Token], state_size: usize) -> Vec<(Vec<Token>, Followup)> {
    let mut pairs = Vec::new();
    if tokens.is_empty() {
        return pairs;
    }

    let head: Vec<Token> = tokens.iter().take(state_size).cloned().collect();
    pairs.push((vec![NEWLINE_TOKEN.to_string()], head.clone()));

    let mut state = head;
    for token in tokens.iter().skip(state_size) {
        pairs.push((state.clone(), vec![token.clone()]));
        state.remove(0);
        state.push(token.clone());
    }

    pairs.push((state, Vec::new()));
    pairs
}

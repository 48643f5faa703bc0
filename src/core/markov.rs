/// Markov story model — transition table, state window, and JSON persistence.

use rand::Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkovError {
    #[error("no followups recorded for state {0:?}")]
    MissingState(String),
    #[error("empty followup list for state {0:?}")]
    EmptyOptions(String),
    #[error("next() called before start_iteration()")]
    Uninitialized,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sentinel token marking the start of the story and of each paragraph.
pub const NEWLINE_TOKEN: &str = "\n";

/// Maximum number of tokens retained in the state window.
pub const WINDOW_MAX: usize = 3;

/// One token: a word, a punctuation run, or the newline sentinel.
pub type Token = String;

/// A chunk of tokens recorded as having followed some state in training data.
pub type Followup = Vec<Token>;

/// The outcome of one sampling step.
///
/// `options` is the exact list the draw was made from, so callers can show
/// every alternative including the one taken. Duplicate entries are
/// meaningful: each occurrence is equally likely, which is how frequency
/// weighting is carried. Borrowed from the model; consume immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision<'a> {
    pub taken: &'a Followup,
    pub options: &'a [Followup],
}

/// A Markov story model: space-joined state keys mapped to the followup
/// chunks observed after them, plus the token window of the current session.
///
/// Serializes as the bare table — the same shape as `model.json` written by
/// [`save_model`] — with the runtime window left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkovModel {
    states: FxHashMap<String, Vec<Followup>>,
    #[serde(skip)]
    window: Option<Vec<Token>>,
}

impl MarkovModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `followup` as one more observation after `state`.
    ///
    /// Append-only; recording the same followup twice keeps both copies so
    /// sampling stays frequency-weighted. The window bound of [`WINDOW_MAX`]
    /// is not enforced here — callers that want the state reachable during
    /// generation keep `state` at most that long.
    pub fn add_sample(&mut self, state: &[Token], followup: Followup) {
        let key = state.join(" ");
        self.states.entry(key).or_default().push(followup);
    }

    /// Reset the window to the newline sentinel, ready for a fresh story.
    pub fn start_iteration(&mut self) {
        self.window = Some(vec![NEWLINE_TOKEN.to_string()]);
    }

    /// Draw the next followup for the current window.
    ///
    /// On success the drawn chunk is appended to the window, the window is
    /// trimmed from the front to at most [`WINDOW_MAX`] tokens, and the
    /// decision is returned. On any error the window is left untouched.
    ///
    /// The effective context length varies between 1 and [`WINDOW_MAX`]
    /// tokens depending on chunk sizes; trained tables rely on that, so the
    /// trimming rule must not be changed to a fixed order.
    pub fn next<R: Rng>(&mut self, rng: &mut R) -> Result<Decision<'_>, MarkovError> {
        let window = self.window.as_mut().ok_or(MarkovError::Uninitialized)?;
        let key = window.join(" ");

        let options = self
            .states
            .get(&key)
            .ok_or_else(|| MarkovError::MissingState(key.clone()))?;
        if options.is_empty() {
            return Err(MarkovError::EmptyOptions(key));
        }

        let taken = &options[rng.gen_range(0..options.len())];

        window.extend(taken.iter().cloned());
        while window.len() > WINDOW_MAX {
            window.remove(0);
        }

        log::debug!(
            "{:?} -> {:?}, now at {:?}",
            key,
            taken.join(" "),
            window.join(" ")
        );

        Ok(Decision {
            taken,
            options: options.as_slice(),
        })
    }

    /// The current token window, if a session has been started.
    pub fn window(&self) -> Option<&[Token]> {
        self.window.as_deref()
    }

    /// The space-joined lookup key for the current window.
    pub fn state_key(&self) -> Option<String> {
        self.window.as_ref().map(|w| w.join(" "))
    }

    /// Followups recorded for a state key, if any.
    pub fn options_for(&self, key: &str) -> Option<&[Followup]> {
        self.states.get(key).map(Vec::as_slice)
    }

    /// Number of distinct state keys in the table.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Total number of recorded followups across all states.
    pub fn followup_count(&self) -> usize {
        self.states.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Save a model to a JSON file in the `model.json` shape: an object mapping
/// state keys to arrays of token arrays.
pub fn save_model(model: &MarkovModel, path: &std::path::Path) -> Result<(), MarkovError> {
    let serialized = serde_json::to_string(model)?;
    std::fs::write(path, serialized)?;
    Ok(())
}

/// Load a model from a JSON file. The loaded model is uninitialized until
/// `start_iteration` is called.
pub fn load_model(path: &std::path::Path) -> Result<MarkovModel, MarkovError> {
    let contents = std::fs::read_to_string(path)?;
    let model: MarkovModel = serde_json::from_str(&contents)?;
    Ok(model)
}

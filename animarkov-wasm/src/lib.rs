//! WASM bindings for animarkov — powers the in-browser story page.
//!
//! The page owns the DOM, the timers, and the narration; this crate only
//! exposes the model and one tick step at a time across the boundary.
//! Decisions cross as JSON strings.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use animarkov::core::driver::TickTiming;
use animarkov::core::markov::{MarkovError, MarkovModel};
use animarkov::corpus::trainer::StoryTrainer;

/// One decision as it crosses the boundary. `delay_ms` is the suggested
/// wait before the next call, shorter when the continuation was forced.
#[derive(serde::Serialize)]
struct DecisionOutput {
    taken: Vec<String>,
    options: Vec<Vec<String>>,
    delay_ms: u64,
}

#[wasm_bindgen]
pub struct StoryTeller {
    model: MarkovModel,
    timing: TickTiming,
    rng: StdRng,
}

#[wasm_bindgen]
impl StoryTeller {
    /// Build a teller from model JSON (the `model.json` shape).
    #[wasm_bindgen(constructor)]
    pub fn new(model_json: &str) -> Result<StoryTeller, JsValue> {
        let model: MarkovModel =
            serde_json::from_str(model_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_model(model))
    }

    /// Build a teller by training on raw story text in the page.
    pub fn from_corpus(text: &str) -> StoryTeller {
        Self::from_model(StoryTrainer::train(text))
    }

    /// Begin a fresh story session.
    pub fn start(&mut self) {
        self.model.start_iteration();
    }

    /// One tick. Returns the decision as a JSON string, or `None` when the
    /// story has ended (end marker drawn or no continuation recorded).
    pub fn next_decision(&mut self) -> Result<Option<String>, JsValue> {
        match self.model.next(&mut self.rng) {
            Ok(decision) => {
                if decision.taken.is_empty() {
                    return Ok(None);
                }
                let output = DecisionOutput {
                    taken: decision.taken.clone(),
                    options: decision.options.to_vec(),
                    delay_ms: self.timing.delay_for(&decision).as_millis() as u64,
                };
                let json = serde_json::to_string(&output)
                    .map_err(|e| JsValue::from_str(&e.to_string()))?;
                Ok(Some(json))
            }
            Err(MarkovError::MissingState(_)) | Err(MarkovError::EmptyOptions(_)) => Ok(None),
            Err(e) => Err(JsValue::from_str(&e.to_string())),
        }
    }

    pub fn state_count(&self) -> usize {
        self.model.state_count()
    }
}

impl StoryTeller {
    fn from_model(model: MarkovModel) -> StoryTeller {
        StoryTeller {
            model,
            timing: TickTiming::default(),
            rng: StdRng::from_entropy(),
        }
    }
}

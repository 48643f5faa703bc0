/// Story driver — the tick loop that walks the model and feeds collaborators.
///
/// One tick draws a decision, hands it to the observer, and reports how long
/// to wait before the next tick. Forced continuations (a single recorded
/// option, typically mid-sentence punctuation) proceed faster than genuine
/// branch points.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;

use crate::core::markov::{Decision, MarkovError, MarkovModel, Token};
use crate::corpus::tokenizer::reassemble_tokens;

/// Delays between ticks, keyed on whether the decision was forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTiming {
    /// Delay after a decision with exactly one option.
    pub forced: Duration,
    /// Delay after a decision with multiple options.
    pub branch: Duration,
}

impl Default for TickTiming {
    fn default() -> Self {
        Self {
            forced: Duration::from_millis(400),
            branch: Duration::from_millis(1000),
        }
    }
}

impl TickTiming {
    /// No waiting at all. Used by tests and batch generation.
    pub fn immediate() -> Self {
        Self {
            forced: Duration::ZERO,
            branch: Duration::ZERO,
        }
    }

    pub fn delay_for(&self, decision: &Decision<'_>) -> Duration {
        if decision.options.len() == 1 {
            self.forced
        } else {
            self.branch
        }
    }
}

/// Cloneable handle that halts a running story loop between ticks.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Receives each decision and the end-of-story signal. Implemented by the
/// rendering / narration side.
pub trait StoryObserver {
    fn on_decision(&mut self, decision: &Decision<'_>);

    fn on_story_end(&mut self) {}
}

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A decision was made; wait this long before the next tick.
    Continue(Duration),
    /// The story is over.
    Finished,
}

/// Drives one story session over a model.
///
/// The driver owns the model for the duration of the session; there is no
/// shared global instance. Callers either run the blocking [`run`] loop or
/// schedule [`tick`] themselves (the WASM bindings do the latter, leaving
/// timers to the page).
///
/// [`run`]: StoryDriver::run
/// [`tick`]: StoryDriver::tick
pub struct StoryDriver {
    model: MarkovModel,
    timing: TickTiming,
}

impl StoryDriver {
    pub fn new(model: MarkovModel) -> Self {
        Self::with_timing(model, TickTiming::default())
    }

    pub fn with_timing(model: MarkovModel, timing: TickTiming) -> Self {
        Self { model, timing }
    }

    pub fn model(&self) -> &MarkovModel {
        &self.model
    }

    pub fn into_model(self) -> MarkovModel {
        self.model
    }

    /// Begin a fresh story session.
    pub fn start(&mut self) {
        self.model.start_iteration();
    }

    /// One tick: draw a decision, notify the observer, report the delay.
    ///
    /// A drawn empty followup is the trained end-of-story marker; it ends
    /// the story, as does running into a state with nothing recorded for
    /// it. Only `Uninitialized` (and persistence errors surfaced through
    /// the model) propagate as errors.
    pub fn tick<R: Rng>(
        &mut self,
        rng: &mut R,
        observer: &mut dyn StoryObserver,
    ) -> Result<TickOutcome, MarkovError> {
        match self.model.next(rng) {
            Ok(decision) => {
                if decision.taken.is_empty() {
                    observer.on_story_end();
                    return Ok(TickOutcome::Finished);
                }
                observer.on_decision(&decision);
                Ok(TickOutcome::Continue(self.timing.delay_for(&decision)))
            }
            Err(MarkovError::MissingState(key)) | Err(MarkovError::EmptyOptions(key)) => {
                log::debug!("story ended at state {:?}", key);
                observer.on_story_end();
                Ok(TickOutcome::Finished)
            }
            Err(e) => Err(e),
        }
    }

    /// Tell a whole story: start a session and tick until it ends or the
    /// stop token fires. Sleeps between ticks per the configured timing.
    pub fn run<R: Rng>(
        &mut self,
        rng: &mut R,
        observer: &mut dyn StoryObserver,
        stop: &StopToken,
    ) -> Result<(), MarkovError> {
        self.start();
        while !stop.is_stopped() {
            match self.tick(rng, observer)? {
                TickOutcome::Continue(delay) => {
                    if !delay.is_zero() {
                        std::thread::sleep(delay);
                    }
                }
                TickOutcome::Finished => break,
            }
        }
        Ok(())
    }
}

/// Observer that collects taken tokens and renders them as story text.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    tokens: Vec<Token>,
    decisions: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of decisions witnessed so far.
    pub fn decision_count(&self) -> usize {
        self.decisions
    }

    /// The story so far as readable text.
    pub fn render(&self) -> String {
        reassemble_tokens(&self.tokens)
    }
}

impl StoryObserver for Transcript {
    fn on_decision(&mut self, decision: &Decision<'_>) {
        self.decisions += 1;
        self.tokens.extend(decision.taken.iter().cloned());
    }
}

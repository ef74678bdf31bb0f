use crate::counter::{Counter, CounterAction};
use crate::facts::{FactError, FactProvider, FactResult};
use crate::history::{Clock, HistoryEntry, HistoryLedger};
use crate::ui::fact::{FactIntent, FactReducer, FactState, FACT_ERROR_MESSAGE};
use crate::ui::mvi::Reducer;
use std::fmt;
use std::sync::Arc;

/// Ticks the count stays highlighted after it changes.
pub const PULSE_TICKS: u8 = 2;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Read-only copy of everything the view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct AppSnapshot {
    pub count: i64,
    /// Newest first, at most ten entries.
    pub history: Vec<HistoryEntry>,
    pub fact: FactState,
}

/// A fact lookup issued by [`App::ask`], not yet awaited.
///
/// Holds no borrow of the app, so the caller can drive it on another task
/// while the app keeps handling input.
pub struct PendingFact {
    request_id: u64,
    number: i64,
    provider: Arc<dyn FactProvider>,
}

impl PendingFact {
    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    /// Run the lookup. Feed the result to [`App::complete_fact`].
    pub async fn resolve(self) -> FactCompletion {
        let outcome = self.provider.fetch_fact(self.number).await;
        FactCompletion {
            request_id: self.request_id,
            outcome,
        }
    }
}

impl fmt::Debug for PendingFact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingFact")
            .field("request_id", &self.request_id)
            .field("number", &self.number)
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Outcome of a [`PendingFact`], tagged with the request it belongs to.
#[derive(Debug)]
pub struct FactCompletion {
    pub request_id: u64,
    pub outcome: Result<FactResult, FactError>,
}

pub struct App {
    should_quit: bool,
    counter: Counter,
    history: HistoryLedger,
    /// Fact request state (MVI pattern).
    fact: FactState,
    next_request_id: u64,
    /// Fact source (resource, managed outside MVI).
    provider: Arc<dyn FactProvider>,
    pulse: u8,
}

impl App {
    pub fn new(provider: Arc<dyn FactProvider>) -> Self {
        Self::from_parts(provider, HistoryLedger::new())
    }

    /// Like [`App::new`] but stamps history entries with `clock`.
    pub fn with_clock(provider: Arc<dyn FactProvider>, clock: Clock) -> Self {
        Self::from_parts(provider, HistoryLedger::with_clock(clock))
    }

    fn from_parts(provider: Arc<dyn FactProvider>, history: HistoryLedger) -> Self {
        Self {
            should_quit: false,
            counter: Counter::new(),
            history,
            fact: FactState::default(),
            next_request_id: 1,
            provider,
            pulse: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn count(&self) -> i64 {
        self.counter.value()
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn fact(&self) -> &FactState {
        &self.fact
    }

    /// True for a few ticks after the count changed.
    pub fn is_pulsing(&self) -> bool {
        self.pulse > 0
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            count: self.counter.value(),
            history: self.history.to_vec(),
            fact: self.fact.clone(),
        }
    }

    pub fn increment(&mut self) -> i64 {
        self.on_counter_action(CounterAction::Increment)
    }

    pub fn decrement(&mut self) -> i64 {
        self.on_counter_action(CounterAction::Decrement)
    }

    pub fn reset(&mut self) -> i64 {
        self.on_counter_action(CounterAction::Reset)
    }

    /// Apply a counter action and record it.
    ///
    /// Reset also drops the fact card, since it describes the old number.
    pub fn on_counter_action(&mut self, action: CounterAction) -> i64 {
        let value = self.counter.apply(action);
        self.history.record(action, value);
        self.pulse = PULSE_TICKS;
        if action == CounterAction::Reset {
            self.dispatch_fact(FactIntent::Dismiss);
        }
        tracing::debug!(action = action.as_str(), value, "Counter updated");
        value
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Start a fact lookup for the current count.
    ///
    /// Allowed while another lookup is in flight; the newer one wins and the
    /// older completion is discarded by [`App::complete_fact`].
    pub fn ask(&mut self) -> PendingFact {
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        let number = self.counter.value();

        self.dispatch_fact(FactIntent::Request { request_id, number });
        tracing::debug!(request_id, number, provider = self.provider.name(), "Fact requested");

        PendingFact {
            request_id,
            number,
            provider: Arc::clone(&self.provider),
        }
    }

    /// Hide the fact card. Count and history are untouched.
    pub fn dismiss(&mut self) {
        self.dispatch_fact(FactIntent::Dismiss);
    }

    /// Apply a finished lookup. Returns false when it was superseded.
    pub fn complete_fact(&mut self, completion: FactCompletion) -> bool {
        let FactCompletion {
            request_id,
            outcome,
        } = completion;

        if self.fact.pending_request() != Some(request_id) {
            tracing::debug!(request_id, "Discarding stale fact completion");
            return false;
        }

        let intent = match outcome {
            Ok(fact) => FactIntent::Resolved { request_id, fact },
            Err(err) => {
                tracing::warn!(request_id, error = %err, "Fact lookup failed");
                FactIntent::Failed {
                    request_id,
                    message: FACT_ERROR_MESSAGE.to_string(),
                }
            }
        };
        self.dispatch_fact(intent);
        true
    }

    pub fn on_tick(&mut self) {
        self.pulse = self.pulse.saturating_sub(1);
        if self.fact.is_loading() {
            self.dispatch_fact(FactIntent::AnimationTick);
        }
    }

    /// Dispatch an intent to the fact reducer.
    fn dispatch_fact(&mut self, intent: FactIntent) {
        dispatch_mvi!(self, fact, FactReducer, intent);
    }
}

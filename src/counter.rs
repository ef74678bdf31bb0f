//! Counter state machine.
//!
//! Holds a single signed value and applies the three counter actions.
//! Arithmetic saturates at `i64::MIN` / `i64::MAX` instead of wrapping.

/// Actions that change the counter and get recorded in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

impl CounterAction {
    /// Stable upper-case name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterAction::Increment => "INCREMENT",
            CounterAction::Decrement => "DECREMENT",
            CounterAction::Reset => "RESET",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    value: i64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn increment(&mut self) -> i64 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    pub fn decrement(&mut self) -> i64 {
        self.value = self.value.saturating_sub(1);
        self.value
    }

    pub fn reset(&mut self) -> i64 {
        self.value = 0;
        self.value
    }

    /// Apply an action and return the new value.
    pub fn apply(&mut self, action: CounterAction) -> i64 {
        match action {
            CounterAction::Increment => self.increment(),
            CounterAction::Decrement => self.decrement(),
            CounterAction::Reset => self.reset(),
        }
    }
}

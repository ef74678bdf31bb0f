use async_trait::async_trait;

use super::error::FactError;
use super::FactResult;

/// Source of facts about numbers.
///
/// Implementations may take arbitrary time and may fail. Callers must not
/// assume a call is ever cancelled.
#[async_trait]
pub trait FactProvider: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch a fact about `number`.
    async fn fetch_fact(&self, number: i64) -> Result<FactResult, FactError>;
}

/// Placeholder used when the service answers with no text.
pub fn mystery_fact(number: i64) -> FactResult {
    FactResult::new(
        format!(
            "The number {} is quite mysterious! I couldn't retrieve a specific fact right now.",
            number
        ),
        "Mystery",
    )
}

/// Placeholder used when the lookup fails outright.
pub fn unavailable_fact(number: i64) -> FactResult {
    FactResult::new(
        format!(
            "We couldn't find a fact for {} right now, but it's still a great number!",
            number
        ),
        "System",
    )
}

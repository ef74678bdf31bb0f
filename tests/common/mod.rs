//! Shared test utilities: stub fact providers, clocks and config files.

#![allow(dead_code, unused_imports)]

pub mod mock_gemini;

use async_trait::async_trait;
use smart_counter::facts::{FactError, FactProvider, FactResult};
use smart_counter::history::Clock;
use smart_counter::ui::app::App;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// Answers every number with the same fact.
pub struct FixedProvider {
    pub fact: FactResult,
    pub calls: AtomicUsize,
}

impl FixedProvider {
    pub fn new(fact: &str, category: &str) -> Self {
        Self {
            fact: FactResult::new(fact, category),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl FactProvider for FixedProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch_fact(&self, _number: i64) -> Result<FactResult, FactError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.fact.clone())
    }
}

/// Fails for every number.
pub struct FailingProvider;

#[async_trait]
impl FactProvider for FailingProvider {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn fetch_fact(&self, _number: i64) -> Result<FactResult, FactError> {
        Err(FactError::Other("network unreachable".to_string()))
    }
}

/// Answers `fact about {n}` after a per-number delay.
pub struct DelayedProvider {
    delays_ms: HashMap<i64, u64>,
}

impl DelayedProvider {
    pub fn new(delays_ms: &[(i64, u64)]) -> Self {
        Self {
            delays_ms: delays_ms.iter().copied().collect(),
        }
    }
}

#[async_trait]
impl FactProvider for DelayedProvider {
    fn name(&self) -> &'static str {
        "delayed"
    }

    async fn fetch_fact(&self, number: i64) -> Result<FactResult, FactError> {
        let delay = self.delays_ms.get(&number).copied().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(delay)).await;
        Ok(FactResult::new(format!("fact about {}", number), "Math"))
    }
}

/// Clock advancing one second per call, starting at the epoch.
pub fn ticking_clock() -> Clock {
    let ticks = Arc::new(AtomicU64::new(0));
    Arc::new(move || SystemTime::UNIX_EPOCH + Duration::from_secs(ticks.fetch_add(1, Ordering::SeqCst)))
}

pub fn app_with(provider: impl FactProvider + 'static) -> App {
    App::with_clock(Arc::new(provider), ticking_clock())
}

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

//! A small ordered-strategy abstraction.
//!
//! Several recovery paths in this crate are "try the structured thing, then
//! fall back to something cruder". Modeling that as an explicit ordered list
//! of named strategies keeps the cascade visible in one place and gives every
//! failed attempt a log line before the next one runs.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{IngestError, Result};

/// One named alternative in a chain.
pub struct Strategy<'a, T> {
    pub name: &'static str,
    pub run: Box<dyn Fn() -> Result<T> + 'a>,
}

impl<'a, T> Strategy<'a, T> {
    pub fn new(name: &'static str, run: impl Fn() -> Result<T> + 'a) -> Self {
        Self {
            name,
            run: Box::new(run),
        }
    }
}

/// Runs strategies in order and returns the first success.
///
/// Every failure is logged before the next strategy is tried; the failure of
/// a non-final strategy is diagnostic output, not an error. When all
/// strategies fail the last error is propagated so the caller sees the most
/// specific exhaustion cause.
pub fn run_chain<T>(path: &Path, strategies: Vec<Strategy<'_, T>>) -> Result<T> {
    let total = strategies.len();
    let mut last_error: Option<IngestError> = None;
    for (index, strategy) in strategies.into_iter().enumerate() {
        match (strategy.run)() {
            Ok(value) => {
                if index > 0 {
                    info!(
                        path = %path.display(),
                        strategy = strategy.name,
                        "recovered via fallback strategy"
                    );
                }
                return Ok(value);
            }
            Err(error) => {
                warn!(
                    path = %path.display(),
                    strategy = strategy.name,
                    attempt = index + 1,
                    total,
                    error = %error,
                    "strategy failed"
                );
                last_error = Some(error);
            }
        }
    }
    match last_error {
        Some(error) => Err(error),
        None => Err(IngestError::StrategiesExhausted {
            path: path.to_path_buf(),
            message: "no strategies configured".to_string(),
        }),
    }
}

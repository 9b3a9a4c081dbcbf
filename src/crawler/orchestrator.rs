//! Concurrent fan-out / fan-in of independent fetch tasks
//!
//! Every task produces its own `Result<T, SkipReason>`; nothing is shared
//! between siblings and a failing task never cancels the others. The caller
//! merges outcomes once the whole batch has been collected.

use crate::state::{SkipReason, Skipped};
use futures::stream::{self, StreamExt};
use std::future::Future;

/// Collected outcomes of a fan-out, labelled by task input
#[derive(Debug)]
pub struct TaskOutcomes<T> {
    results: Vec<(String, Result<T, SkipReason>)>,
}

impl<T> Default for TaskOutcomes<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
        }
    }
}

impl<T> TaskOutcomes<T> {
    /// Splits into successful results and skipped inputs
    pub fn into_parts(self) -> (Vec<T>, Vec<Skipped>) {
        let mut successes = Vec::new();
        let mut skipped = Vec::new();
        for (input, result) in self.results {
            match result {
                Ok(value) => successes.push(value),
                Err(reason) => skipped.push(Skipped::new(input, reason)),
            }
        }
        (successes, skipped)
    }
}

/// Runs one task per input with at most `concurrency` in flight
///
/// Completion order is unspecified. A concurrency of zero is treated as one.
pub async fn fan_out<I, F, Fut, T>(inputs: I, concurrency: usize, task: F) -> TaskOutcomes<T>
where
    I: IntoIterator<Item = String>,
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, SkipReason>>,
{
    let results = stream::iter(inputs.into_iter().map(|input| {
        let fut = task(input.clone());
        async move { (input, fut.await) }
    }))
    .buffer_unordered(concurrency.max(1))
    .collect::<Vec<_>>()
    .await;

    TaskOutcomes { results }
}

/// Runs a phase that produces a list, then fans out over that list
///
/// Phase two starts only after phase one has completed. An empty list skips
/// phase two entirely, so no task (and no network call) is issued.
pub async fn two_phase<P, F, Fut, T>(
    phase_one: P,
    concurrency: usize,
    phase_two: F,
) -> (Vec<String>, TaskOutcomes<T>)
where
    P: Future<Output = Vec<String>>,
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T, SkipReason>>,
{
    let inputs = phase_one.await;
    if inputs.is_empty() {
        tracing::debug!("First phase produced nothing, skipping second phase");
        return (inputs, TaskOutcomes::default());
    }

    let outcomes = fan_out(inputs.clone(), concurrency, phase_two).await;
    (inputs, outcomes)
}

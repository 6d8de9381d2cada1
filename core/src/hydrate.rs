//! Fan-out/fan-in helpers used by the services to attach nested collections.
//!
//! Fan-out is unbounded: one task per parent entity. Upstream collections are
//! small (at most a few hundred parents per call), so no batching is applied.

use std::future::Future;

use tokio::task::{JoinError, JoinSet};
use tracing::warn;

use crate::error::Result;
use crate::resource::Resource;

/// Collapse a sub-fetch result into a sequence, defaulting to empty.
///
/// Applied at every hydration call site so a failing relationship never
/// fails the parent.
pub fn best_effort<T>(result: Result<Vec<T>>, parent: Resource, parent_id: u64, sub: Resource) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            warn!(%parent, parent_id, %sub, error = %err, "hydration failed, leaving collection empty");
            Vec::new()
        }
    }
}

/// Run `hydrate` on every parent in its own task and wait for all of them.
///
/// Parents come back in their original order regardless of completion
/// order. Each task owns exactly one parent. A task cancelled by runtime
/// shutdown drops its parent, so the result can then be shorter than
/// `parents`; a panicking task is resumed on the caller. Dropping the
/// returned future aborts every task still running.
pub async fn hydrate_each<P, F, Fut>(parents: Vec<P>, hydrate: F) -> Vec<P>
where
    P: Send + 'static,
    F: Fn(P) -> Fut,
    Fut: Future<Output = P> + Send + 'static,
{
    let count = parents.len();
    let mut tasks = JoinSet::new();
    for (index, parent) in parents.into_iter().enumerate() {
        let task = hydrate(parent);
        tasks.spawn(async move { (index, task.await) });
    }

    let mut slots: Vec<Option<P>> = std::iter::repeat_with(|| None).take(count).collect();
    while let Some(result) = tasks.join_next().await {
        if let Some((index, parent)) = joined(result) {
            slots[index] = Some(parent);
        }
    }
    slots.into_iter().flatten().collect()
}

/// Unwrap a finished task. A panic inside the task is resumed on the caller;
/// a task cancelled by runtime shutdown yields `None`.
pub(crate) fn joined<T>(result: std::result::Result<T, JoinError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(err) => {
            warn!(error = %err, "hydration task did not complete");
            None
        }
    }
}

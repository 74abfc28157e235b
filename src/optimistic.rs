//! Optimistic updates
//!
//! Apply a mutation to shared state right away, then wait for the remote
//! side to confirm it. If confirmation fails, the inverse mutation is
//! applied and the error is returned.

use crate::error::Result;
use std::future::Future;
use std::sync::{Mutex, PoisonError};

/// Apply `mutation`, await `confirm`, and apply `inverse` if it fails
///
/// The lock is only held while a mutation runs, never across the await, so
/// concurrent updates on the same state interleave freely. Mutations that
/// commute (such as flips) stay consistent under any interleaving.
pub async fn apply_optimistic<S, T, M, I, F>(
    state: &Mutex<S>,
    mutation: M,
    inverse: I,
    confirm: F,
) -> Result<T>
where
    M: FnOnce(&mut S),
    I: FnOnce(&mut S),
    F: Future<Output = Result<T>>,
{
    mutation(&mut state.lock().unwrap_or_else(PoisonError::into_inner));

    match confirm.await {
        Ok(value) => Ok(value),
        Err(e) => {
            inverse(&mut state.lock().unwrap_or_else(PoisonError::into_inner));
            Err(e)
        }
    }
}

// Rust guideline compliant 2026-10-18

//! Trailing-edge debouncing for search-as-you-type.
//!
//! A `Debouncer` owns one scheduled task slot. Each `call` aborts the task
//! in the slot and schedules a fresh one, so only the last call within the
//! wait window reaches the callback.

use crate::{Config, Error, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

type Callback<T> = Arc<dyn Fn(T) + Send + Sync + 'static>;

/// Delays a callback until calls stop arriving for `wait`.
pub struct Debouncer<T> {
    callback: Callback<T>,
    wait: Duration,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer bound to the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn new<F>(wait: Duration, callback: F) -> Result<Self>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let runtime = Handle::try_current().map_err(|e| Error::Runtime(e.to_string()))?;
        Ok(Self::with_handle(wait, callback, runtime))
    }

    /// Creates a debouncer waiting `config.debounce_ms` after the last call.
    ///
    /// This is how search-as-you-type screens pick up the configured delay.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn from_config<F>(config: &Config, callback: F) -> Result<Self>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self::new(config.debounce(), callback)
    }

    /// Creates a debouncer that schedules on the given runtime.
    pub fn with_handle<F>(wait: Duration, callback: F, runtime: Handle) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
            wait,
            runtime,
            pending: Mutex::new(None),
        }
    }

    /// The delay applied after the last call.
    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Schedules the callback with `args`, cancelling any pending invocation.
    pub fn call(&self, args: T) {
        let mut pending = self.slot();
        if let Some(handle) = pending.take() {
            handle.abort();
            trace!("debounced call superseded");
        }

        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        *pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            callback(args);
        }));
    }

    /// Drops the pending invocation, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.slot().take() {
            handle.abort();
        }
    }

    /// Returns true while an invocation is scheduled but has not run.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.slot()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}

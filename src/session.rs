// src/session.rs

use crate::fetcher::RecordSource;
use crate::pipeline::{resolve_listing, ListingOutcome, PipelineError};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

/// What a hosting view shows for its current identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading { identifier: String },
    Ready(ListingOutcome),
    NoData { identifier: String },
    Failed { identifier: String, message: String },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading { .. })
    }
}

struct Shared {
    generation: AtomicU64,
    state: Mutex<ViewState>,
    settled: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a new generation and put `state` in place, atomically with respect to commits.
    fn advance(&self, state: ViewState) -> u64 {
        let mut guard = self.lock();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *guard = state;
        self.settled.notify_all();
        generation
    }

    /// Store a finished cycle, unless a newer one has started since.
    fn commit(&self, generation: u64, state: ViewState) -> bool {
        let mut guard = self.lock();
        let current = self.generation.load(Ordering::SeqCst);
        if current != generation {
            debug!(generation, current, "discarding superseded resolution");
            return false;
        }
        *guard = state;
        self.settled.notify_all();
        true
    }
}

/// One hosting view's resolution lifecycle.
///
/// Every [`load`](Self::load) starts a new generation and resolves on a worker thread.
/// A cycle only lands if its generation is still current when it finishes, so a slow,
/// superseded fetch can never overwrite a newer identifier's result.
pub struct ResolutionSession {
    source: Arc<dyn RecordSource>,
    shared: Arc<Shared>,
}

impl ResolutionSession {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            shared: Arc::new(Shared {
                generation: AtomicU64::new(0),
                state: Mutex::new(ViewState::Idle),
                settled: Condvar::new(),
            }),
        }
    }

    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> ViewState {
        self.shared.lock().clone()
    }

    /// Begin resolving `identifier`, superseding any cycle still in flight.
    pub fn load(&self, identifier: &str) -> u64 {
        let identifier = identifier.to_string();
        let generation = self.shared.advance(ViewState::Loading {
            identifier: identifier.clone(),
        });

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.shared);
        let worker_id = identifier.clone();

        let spawned = std::thread::Builder::new()
            .name(format!("resolve-{generation}"))
            .spawn(move || {
                let next = match resolve_listing(source.as_ref(), &worker_id) {
                    Ok(outcome) => ViewState::Ready(outcome),
                    Err(PipelineError::NoData { identifier }) => ViewState::NoData { identifier },
                    Err(PipelineError::Fetch(e)) if e.is_not_found() => ViewState::NoData {
                        identifier: worker_id.clone(),
                    },
                    Err(e @ PipelineError::Fetch(_)) => ViewState::Failed {
                        identifier: worker_id.clone(),
                        message: e.to_string(),
                    },
                };
                if !shared.commit(generation, next) {
                    debug!(identifier = %worker_id, generation, "result arrived after a newer load");
                }
            });

        if let Err(e) = spawned {
            warn!(identifier = %identifier, error = %e, "could not start resolution worker");
            self.shared.commit(
                generation,
                ViewState::Failed {
                    identifier,
                    message: format!("could not start resolution: {e}"),
                },
            );
        }

        generation
    }

    /// Drop whatever is in flight and go back to idle (the view went away).
    pub fn cancel(&self) {
        self.shared.advance(ViewState::Idle);
    }

    /// Block until the state leaves `Loading`, or `timeout` passes.
    pub fn wait_settled(&self, timeout: Duration) -> ViewState {
        let guard = self.shared.lock();
        let (guard, _) = self
            .shared
            .settled
            .wait_timeout_while(guard, timeout, |state| state.is_loading())
            .unwrap_or_else(PoisonError::into_inner);
        guard.clone()
    }
}

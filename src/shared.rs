//! Lock-guarded handle to the game state
//!
//! The loop and the renderer each take short exclusive sections; nobody
//! holds the lock across a wait.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::sim::GameState;

/// Cloneable handle to the one `GameState` of the process
#[derive(Debug, Clone)]
pub struct SharedState {
    inner: Arc<Mutex<GameState>>,
}

impl SharedState {
    pub fn new(state: GameState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Acquire the lock; released when the guard drops
    pub fn lock(&self) -> MutexGuard<'_, GameState> {
        self.inner.lock()
    }

    /// Run `f` inside one critical section
    pub fn with<R>(&self, f: impl FnOnce(&mut GameState) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

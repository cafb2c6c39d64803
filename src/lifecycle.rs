//! Application lifecycle hooks.
//!
//! The process is either starting (startup hook not yet run, no requests
//! accepted) or running. The startup and shutdown hooks each fire at most
//! once per process.

use std::sync::atomic::{AtomicBool, Ordering};

use strum::Display;
use tracing::info;

/// Lifecycle state of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LifecycleState {
    /// Startup hook has not run; requests are not accepted yet.
    Starting,
    /// Accepting requests until a shutdown signal arrives.
    Running,
}

/// Startup/shutdown hook runner.
#[derive(Debug, Default)]
pub struct Lifecycle {
    started: AtomicBool,
    stopped: AtomicBool,
}

impl Lifecycle {
    /// Create a lifecycle in the starting state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the startup hook. Returns `false` if it already ran.
    pub fn startup(&self) -> bool {
        if self.started.swap(true, Ordering::SeqCst) {
            return false;
        }
        info!("Application started successfully");
        true
    }

    /// Run the shutdown hook. Returns `false` if it already ran or startup
    /// never happened.
    pub fn shutdown(&self) -> bool {
        if !self.started.load(Ordering::SeqCst) || self.stopped.swap(true, Ordering::SeqCst) {
            return false;
        }
        info!("Application shutting down");
        true
    }

    /// Current state.
    pub fn state(&self) -> LifecycleState {
        if self.started.load(Ordering::SeqCst) {
            LifecycleState::Running
        } else {
            LifecycleState::Starting
        }
    }

    /// Whether the shutdown hook has run.
    pub fn is_shut_down(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

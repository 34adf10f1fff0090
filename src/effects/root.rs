//! Effect root: forks the registered handlers at application start
//!
//! The root has exactly one transition, configured -> running. `start`
//! consumes the root, so a second start on the same root does not
//! typecheck; re-forking requires deliberately building a new root.
//! Forking is fire-and-forget: the spawned tasks are detached and
//! tracked only for observation, never joined on the hot path, so the
//! failure or completion of one handler cannot affect another.

use crate::effects::EffectHandler;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// A configured, not-yet-started set of effect handlers
pub struct EffectRoot {
    handlers: Vec<Arc<dyn EffectHandler>>,
}

impl EffectRoot {
    /// Creates a root over an explicit set of handlers
    #[must_use]
    pub fn new(handlers: Vec<Arc<dyn EffectHandler>>) -> Self {
        Self { handlers }
    }

    /// Number of handlers this root will fork
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Forks every handler as a detached task and returns the
    /// supervisor handle
    ///
    /// Returns once all handlers are scheduled, not once they complete;
    /// the handlers are long-lived by design. No ordering is guaranteed
    /// between handlers.
    #[must_use]
    pub fn start(self) -> EffectRootHandle {
        let mut tasks = Vec::with_capacity(self.handlers.len());

        for handler in self.handlers {
            let name = handler.name().to_string();
            info!("Forking effect handler '{}'", name);

            let task_name = name.clone();
            let handle = tokio::spawn(async move {
                match handler.run().await {
                    Ok(()) => warn!("Effect handler '{}' finished", task_name),
                    Err(e) => error!("Effect handler '{}' failed: {e}", task_name),
                }
            });

            tasks.push(NamedTask { name, handle });
        }

        EffectRootHandle { tasks }
    }
}

struct NamedTask {
    name: String,
    handle: JoinHandle<()>,
}

/// Supervisor handle over the forked effect handlers
///
/// Holding this does not keep the tasks alive (they are detached) and
/// dropping it does not cancel them; it exists so the isolation choice
/// is observable instead of implicit.
pub struct EffectRootHandle {
    tasks: Vec<NamedTask>,
}

impl EffectRootHandle {
    /// Names of all forked handlers, in fork order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name.as_str()).collect()
    }

    /// Number of handlers still running
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.handle.is_finished()).count()
    }

    /// Whether the named handler is still running
    #[must_use]
    pub fn is_running(&self, name: &str) -> bool {
        self.tasks
            .iter()
            .any(|t| t.name == name && !t.handle.is_finished())
    }

    /// Awaits every handler; only returns if all of them terminate
    ///
    /// Panicking handlers are logged and do not propagate.
    pub async fn wait(self) {
        for task in self.tasks {
            if let Err(e) = task.handle.await {
                error!("Effect handler '{}' aborted: {e}", task.name);
            }
        }
    }
}

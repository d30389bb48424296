use std::fmt::Debug;

use stencil_core::Observer;
use tracing::debug;

/// Forwards every solver event to [`tracing`] at debug level.
///
/// The logger never requests an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLogger {
    solver: &'static str,
    count: usize,
}

impl EventLogger {
    /// Creates a logger that tags events with `solver`.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver, count: 0 }
    }

    /// Returns the number of events logged so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<E: Debug, A> Observer<E, A> for EventLogger {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.count += 1;
        debug!(solver = self.solver, count = self.count, ?event, "solver event");
        None
    }
}

/// Allows `&mut EventLogger` to be passed to solvers that take an observer by
/// value, so [`EventLogger::count`] can be read after the solve.
impl<E: Debug, A> Observer<E, A> for &mut EventLogger {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use stencil_solvers::optimization::rmsprop::{Action, Event};

    #[test]
    fn counts_events_without_acting() {
        let mut logger = EventLogger::new("rmsprop");
        let x = [1.0, 2.0];

        for iter in 1..=3 {
            let event = Event {
                iter,
                x: &x,
                objective: 0.5,
                grad_norm: 0.1,
            };
            let action: Option<Action> = logger.observe(&event);
            assert!(action.is_none());
        }

        assert_eq!(logger.count(), 3);
    }
}

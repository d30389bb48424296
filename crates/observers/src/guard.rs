use stencil_core::Observer;

use crate::traits::{CanStopEarly, HasFiniteState};

/// Stops a solver at the first event whose state is not finite.
///
/// Degenerate inputs do not make the solvers fail; infinities and NaNs flow
/// into their results instead. Attach this guard to end the run at the first
/// such step rather than spending the remaining iterations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NonFiniteGuard {
    tripped: bool,
}

impl NonFiniteGuard {
    /// Creates a guard that has not yet seen a non-finite event.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the guard has requested a stop.
    #[must_use]
    pub fn tripped(&self) -> bool {
        self.tripped
    }
}

impl<E: HasFiniteState, A: CanStopEarly> Observer<E, A> for NonFiniteGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.is_finite() {
            return None;
        }
        self.tripped = true;
        Some(A::stop_early())
    }
}

/// Allows `&mut NonFiniteGuard` to be passed to solvers that take an observer
/// by value, so [`NonFiniteGuard::tripped`] can be read after the solve.
impl<E: HasFiniteState, A: CanStopEarly> Observer<E, A> for &mut NonFiniteGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use stencil_solvers::equation::secant::{Action, Event};

    #[test]
    fn passes_finite_events() {
        let mut guard = NonFiniteGuard::new();
        let event = Event {
            iter: 1,
            x: 0.5,
            residual: 0.25,
        };

        let action: Option<Action> = guard.observe(&event);

        assert_eq!(action, None);
        assert!(!guard.tripped());
    }

    #[test]
    fn stops_on_nan() {
        let mut guard = NonFiniteGuard::new();
        let event = Event {
            iter: 2,
            x: f64::NAN,
            residual: f64::NAN,
        };

        let action: Option<Action> = guard.observe(&event);

        assert_eq!(action, Some(Action::StopEarly));
        assert!(guard.tripped());
    }
}

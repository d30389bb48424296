use stencil_core::{Evaluator, Expression, Observer};
use tracing::{debug, trace};

use crate::evaluate::evaluate_at;

use super::{
    Action, Bracket, Config, Error, Event, IterationRecord, IterationTrace, Solution,
    solution::Status,
};

/// Core quadratic fit search implementation.
///
/// A candidate that is not finite is never evaluated. Its value is taken as
/// NaN, which leaves the bracket unchanged and lets the run continue so the
/// degeneracy shows up in the trace.
pub(super) fn search<E, Obs>(
    f: &Expression<'_, E>,
    variable: &str,
    bracket: [f64; 3],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: Evaluator,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let eval = |x: f64| evaluate_at(f, variable, x).map_err(|source| Error::Evaluation { x, source });

    let [a, b, c] = bracket;
    let mut state = Bracket::new([(a, eval(a)?), (b, eval(b)?), (c, eval(c)?)]);
    let mut history = IterationTrace::new(IterationRecord::seed(&state));

    debug!(a = state.a, b = state.b, c = state.c, iters = config.iters(), "quadratic fit started");

    for iter in 1..=config.iters() {
        let x = state.candidate();
        let yx = if x.is_finite() { eval(x)? } else { f64::NAN };

        state = state.update(x, yx);
        history.push(IterationRecord::new(&state, x));
        trace!(iter, x, yx, a = state.a, b = state.b, c = state.c, "quadratic fit step");

        let event = Event {
            iter,
            value: yx,
            record: history.last(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(iter, "quadratic fit stopped by observer");
            return Ok(Solution::new(Status::StoppedByObserver, iter, history));
        }
    }

    let solution = Solution::new(Status::Completed, config.iters(), history);
    debug!(x = solution.x, objective = solution.objective, "quadratic fit completed");

    Ok(solution)
}

//! Inspection schedulers and schedule evaluation.
//!
//! # Algorithms
//!
//! - `HeuristicScheduler`: greedy target-interval placement over completion
//!   events. Linear in inspections × queues, not optimal.
//! - `ExactScheduler`: exhaustive search over combinations of completion
//!   events. Exponential, used as an oracle on small instances.
//!
//! # Objective
//!
//! Total idle time: for inspection `i` and every queue with more than `i`
//! tasks, `max(0, t_i - finish(l, i+1))`.
//!
//! # KPI
//!
//! `InspectionKpi` reports the heuristic's gap to the exact schedule.
//!
//! # Entry Points
//!
//! [`schedule_heuristic`], [`schedule_exact`] and [`evaluate`] take raw
//! per-queue durations, validate them, and run the matching component.

mod combinations;
mod exact;
mod heuristic;
mod kpi;
mod objective;

pub use combinations::{binomial, Combinations};
pub use exact::{ExactConfig, ExactScheduler, ExactSolution, SolveStatus};
pub use heuristic::{pick_closest, HeuristicScheduler, TargetTime};
pub use kpi::InspectionKpi;
pub use objective::{idle_time, idle_time_by_inspection, inspection_idle_time};

use tracing::debug;

use crate::error::InspectionError;
use crate::models::DurationModel;
use crate::validation::validate_input;

/// Validates a raw request and builds its model.
fn prepare(
    durations: &[Vec<i64>],
    inspection_count: i64,
    horizon: i64,
) -> Result<(DurationModel, usize), InspectionError> {
    validate_input(durations, inspection_count, horizon)?;
    let model = DurationModel::new(durations.to_vec())?;
    let count = usize::try_from(inspection_count).unwrap_or(usize::MAX);
    debug!(
        queues = model.queue_count(),
        tasks = model.total_tasks(),
        inspection_count = count,
        horizon,
        "prepared inspection request"
    );
    Ok((model, count))
}

/// Heuristic inspection times for raw per-queue durations.
///
/// # Example
/// ```
/// use u_inspect::scheduler::schedule_heuristic;
///
/// let times = schedule_heuristic(&[vec![5]], 1, 10).unwrap();
/// assert_eq!(times, vec![5]);
/// ```
pub fn schedule_heuristic(
    durations: &[Vec<i64>],
    inspection_count: i64,
    horizon: i64,
) -> Result<Vec<i64>, InspectionError> {
    let (model, count) = prepare(durations, inspection_count, horizon)?;
    Ok(HeuristicScheduler::new()
        .schedule(&model, count, horizon)
        .into_times())
}

/// Minimum-idle inspection times for raw per-queue durations.
///
/// Infeasibility is reported through [`ExactSolution::status`], not as an
/// error.
pub fn schedule_exact(
    durations: &[Vec<i64>],
    inspection_count: i64,
    horizon: i64,
) -> Result<ExactSolution, InspectionError> {
    schedule_exact_with(durations, inspection_count, horizon, ExactConfig::default())
}

/// [`schedule_exact`] with an explicit search configuration.
pub fn schedule_exact_with(
    durations: &[Vec<i64>],
    inspection_count: i64,
    horizon: i64,
    config: ExactConfig,
) -> Result<ExactSolution, InspectionError> {
    let (model, count) = prepare(durations, inspection_count, horizon)?;
    Ok(ExactScheduler::new()
        .with_config(config)
        .solve(&model, count, horizon))
}

/// Idle time of `times` for raw per-queue durations.
pub fn evaluate(durations: &[Vec<i64>], times: &[i64]) -> Result<i64, InspectionError> {
    let model = DurationModel::new(durations.to_vec())?;
    Ok(idle_time(&model, times))
}

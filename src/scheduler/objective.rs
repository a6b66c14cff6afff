//! Idle-time objective.
//!
//! For inspection `i` (0-based) and every queue holding more than `i` tasks,
//! the inspection contributes `max(0, t_i - finish(l, i+1))`: the time that
//! queue's (i+1)-th task has been waiting for the inspector. An inspector
//! arriving early contributes zero, not a negative credit.
//!
//! The evaluator is total: any schedule length and any time values are
//! scored position by position. Totals saturate at `i64::MAX`.

use crate::models::DurationModel;

/// Total idle time of `times` against `model`.
///
/// # Example
/// ```
/// use u_inspect::models::DurationModel;
/// use u_inspect::scheduler::idle_time;
///
/// let model = DurationModel::new(vec![vec![4, 5], vec![3, 2, 5]]).unwrap();
/// // i=0: (4-4)+(4-3) = 1; i=1: (9-9)+(9-5) = 4
/// assert_eq!(idle_time(&model, &[4, 9]), 5);
/// ```
pub fn idle_time(model: &DurationModel, times: &[i64]) -> i64 {
    idle_time_by_inspection(model, times)
        .into_iter()
        .fold(0, i64::saturating_add)
}

/// Idle time contributed by each inspection, in schedule order.
pub fn idle_time_by_inspection(model: &DurationModel, times: &[i64]) -> Vec<i64> {
    times
        .iter()
        .enumerate()
        .map(|(i, &t)| inspection_idle_time(model, i, t))
        .collect()
}

/// Idle time contributed by inspection `index` placed at `time`.
pub fn inspection_idle_time(model: &DurationModel, index: usize, time: i64) -> i64 {
    model
        .queues()
        .iter()
        .filter(|q| q.len() > index)
        .map(|q| time.saturating_sub(q.finish_time(index + 1)).max(0))
        .fold(0, i64::saturating_add)
}

//! Target-interval greedy inspection scheduler.
//!
//! # Algorithm
//!
//! 1. `C == 1`: inspect at the latest first-task completion across
//!    non-empty queues, if it lies within the horizon.
//! 2. `C > 1`: split the horizon into `C + 1` equal intervals. For
//!    inspection `i` in `1..=C` the target is `i * T / (C + 1)`.
//! 3. Candidates for inspection `i` are the i-th completion of every queue
//!    holding at least `i` tasks, minus times already chosen.
//! 4. Pick the candidate closest to the target, smaller time on ties. With
//!    no candidate left, use the target rounded half away from zero.
//!
//! Output stays in inspection order and is never re-sorted.
//!
//! # Complexity
//! O(C * L * log C) where C=inspections, L=queues. The `log C` factor is
//! the used-time set lookup per candidate.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::models::{DurationModel, InspectionSchedule};

/// Exact rational target time `index * horizon / slots`.
///
/// Distances are compared in integer arithmetic so selection never depends
/// on floating-point rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetTime {
    numer: i128,
    denom: i128,
}

impl TargetTime {
    /// Target for inspection `index` (1-based) with the horizon split
    /// into `slots` intervals.
    ///
    /// # Panics
    /// Panics if `slots == 0`.
    pub fn new(index: usize, horizon: i64, slots: usize) -> Self {
        assert!(slots > 0, "target time needs at least one slot");
        Self {
            numer: index as i128 * horizon as i128,
            denom: slots as i128,
        }
    }

    /// Target as a float, for display.
    pub fn as_f64(&self) -> f64 {
        self.numer as f64 / self.denom as f64
    }

    /// Target rounded half away from zero.
    pub fn rounded(&self) -> i64 {
        let half_up = (2 * self.numer.abs() + self.denom) / (2 * self.denom);
        (self.numer.signum() * half_up) as i64
    }

    /// `|time - target|` scaled by the slot count.
    fn scaled_distance(&self, time: i64) -> i128 {
        (time as i128 * self.denom - self.numer).abs()
    }
}

/// Picks the candidate closest to `target`; the smaller time wins ties.
///
/// Returns `None` for an empty candidate list.
///
/// # Example
/// ```
/// use u_inspect::scheduler::{pick_closest, TargetTime};
///
/// // Target 8 (= 1 * 24 / 3); 6 and 10 are equally close.
/// let target = TargetTime::new(1, 24, 3);
/// assert_eq!(pick_closest(&[10, 6, 3], target), Some(6));
/// ```
pub fn pick_closest(candidates: &[i64], target: TargetTime) -> Option<i64> {
    candidates
        .iter()
        .copied()
        .min_by_key(|&t| (target.scaled_distance(t), t))
}

/// Greedy target-interval inspection scheduler.
///
/// Fast and deterministic, not optimal. Use
/// [`ExactScheduler`](super::ExactScheduler) to measure its gap on small
/// instances.
///
/// # Example
///
/// ```
/// use u_inspect::models::DurationModel;
/// use u_inspect::scheduler::HeuristicScheduler;
///
/// let model = DurationModel::new(vec![vec![4, 5], vec![3, 2, 5], vec![6, 4]]).unwrap();
/// let schedule = HeuristicScheduler::new().schedule(&model, 2, 24);
/// assert_eq!(schedule.times(), &[6, 10]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeuristicScheduler;

impl HeuristicScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Places up to `inspection_count` inspections within `horizon`.
    ///
    /// The result has exactly `inspection_count` entries except when
    /// `inspection_count == 1` and no first completion fits the horizon,
    /// in which case it is empty.
    pub fn schedule(
        &self,
        model: &DurationModel,
        inspection_count: usize,
        horizon: i64,
    ) -> InspectionSchedule {
        match inspection_count {
            0 => InspectionSchedule::new(),
            1 => self.schedule_single(model, horizon),
            _ => self.schedule_intervals(model, inspection_count, horizon),
        }
    }

    fn schedule_single(&self, model: &DurationModel, horizon: i64) -> InspectionSchedule {
        let mut schedule = InspectionSchedule::new();
        // No non-empty queue means no first completion, so nothing is
        // scheduled rather than an inspection at t=0.
        match model.max_first_completion() {
            Some(t) if t <= horizon => schedule.push(t),
            latest => debug!(?latest, horizon, "no first completion within horizon"),
        }
        schedule
    }

    fn schedule_intervals(
        &self,
        model: &DurationModel,
        inspection_count: usize,
        horizon: i64,
    ) -> InspectionSchedule {
        let slots = inspection_count + 1;
        let mut schedule = InspectionSchedule::new();
        let mut used: BTreeSet<i64> = BTreeSet::new();

        for index in 1..=inspection_count {
            let target = TargetTime::new(index, horizon, slots);
            let candidates: Vec<i64> = model
                .queues()
                .iter()
                .filter(|q| q.len() >= index)
                .map(|q| q.finish_time(index))
                .filter(|t| !used.contains(t))
                .collect();

            let chosen = match pick_closest(&candidates, target) {
                Some(t) => t,
                None => {
                    let fallback = target.rounded();
                    debug!(index, target = target.as_f64(), fallback, "no candidate, using rounded target");
                    fallback
                }
            };

            trace!(index, target = target.as_f64(), candidates = candidates.len(), chosen);
            schedule.push(chosen);
            used.insert(chosen);
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> DurationModel {
        DurationModel::new(vec![vec![4, 5], vec![3, 2, 5], vec![6, 4]]).unwrap()
    }

    #[test]
    fn test_target_time() {
        let t = TargetTime::new(2, 24, 3);
        assert_eq!(t.rounded(), 16);
        assert!((t.as_f64() - 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_target_rounding_half_away() {
        // 1 * 5 / 2 = 2.5 -> 3
        assert_eq!(TargetTime::new(1, 5, 2).rounded(), 3);
        // 1 * 12 / 5 = 2.4 -> 2
        assert_eq!(TargetTime::new(1, 12, 5).rounded(), 2);
        // 2 * 7 / 4 = 3.5 -> 4
        assert_eq!(TargetTime::new(2, 7, 4).rounded(), 4);
        assert_eq!(TargetTime::new(1, 0, 4).rounded(), 0);
    }

    #[test]
    fn test_pick_closest() {
        let target = TargetTime::new(1, 10, 3); // 3.33..
        assert_eq!(pick_closest(&[1, 3, 5], target), Some(3));
        assert_eq!(pick_closest(&[], target), None);
    }

    #[test]
    fn test_pick_closest_tie_prefers_smaller() {
        let target = TargetTime::new(1, 10, 2); // 5
        assert_eq!(pick_closest(&[7, 3], target), Some(3));
        assert_eq!(pick_closest(&[3, 7], target), Some(3));
    }

    #[test]
    fn test_pick_closest_fractional_distance() {
        // Target 16/3 = 5.33: 5 is closer than 6.
        let target = TargetTime::new(2, 8, 3);
        assert_eq!(pick_closest(&[6, 5], target), Some(5));
    }

    #[test]
    fn test_single_inspection() {
        let model = DurationModel::new(vec![vec![5]]).unwrap();
        let s = HeuristicScheduler::new().schedule(&model, 1, 10);
        assert_eq!(s.times(), &[5]);
    }

    #[test]
    fn test_single_inspection_takes_latest_first_completion() {
        let s = HeuristicScheduler::new().schedule(&sample_model(), 1, 24);
        assert_eq!(s.times(), &[6]);
    }

    #[test]
    fn test_single_inspection_beyond_horizon() {
        let s = HeuristicScheduler::new().schedule(&sample_model(), 1, 5);
        assert!(s.is_empty());
    }

    #[test]
    fn test_single_inspection_no_tasks() {
        let model = DurationModel::new(vec![vec![], vec![]]).unwrap();
        assert!(HeuristicScheduler::new().schedule(&model, 1, 10).is_empty());
    }

    #[test]
    fn test_zero_inspections() {
        assert!(HeuristicScheduler::new().schedule(&sample_model(), 0, 24).is_empty());
    }

    #[test]
    fn test_sample_instance() {
        // Targets 8 and 16. i=1 pool {4,3,6} -> 6. i=2 pool {9,5,10} -> 10.
        let s = HeuristicScheduler::new().schedule(&sample_model(), 2, 24);
        assert_eq!(s.times(), &[6, 10]);
    }

    #[test]
    fn test_used_times_are_skipped() {
        // Both queues complete at 4 and 8. i=1 picks 4; i=2 pool {8}.
        // Three inspections: i=3 has no queue with 3 tasks -> fallback.
        let model = DurationModel::new(vec![vec![4, 4], vec![4, 4]]).unwrap();
        let s = HeuristicScheduler::new().schedule(&model, 3, 20);
        assert_eq!(s.times(), &[4, 8, 15]);
    }

    #[test]
    fn test_duplicate_candidate_excluded() {
        let model = DurationModel::new(vec![vec![2, 3], vec![2, 1], vec![3]]).unwrap();
        let s = HeuristicScheduler::new().schedule(&model, 2, 9);
        // Targets 3 and 6. i=1 pool {2,2,3} -> 3. i=2 pool {5,3}, 3 used -> 5.
        assert_eq!(s.times(), &[3, 5]);
    }

    #[test]
    fn test_fallback_when_pool_exhausted() {
        let model = DurationModel::new(vec![vec![5]]).unwrap();
        // Targets 2.5, 5.0, 7.5. Only the first has a candidate; the rest
        // fall back to the rounded target, even if it repeats a chosen time.
        let s = HeuristicScheduler::new().schedule(&model, 3, 10);
        assert_eq!(s.times(), &[5, 5, 8]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_deterministic() {
        let model = sample_model();
        let scheduler = HeuristicScheduler::new();
        for c in 0..6 {
            assert_eq!(
                scheduler.schedule(&model, c, 24),
                scheduler.schedule(&model, c, 24)
            );
        }
    }

    #[test]
    fn test_length_equals_count_when_many() {
        let model = sample_model();
        for c in 2..8 {
            assert_eq!(HeuristicScheduler::new().schedule(&model, c, 24).len(), c);
        }
    }
}

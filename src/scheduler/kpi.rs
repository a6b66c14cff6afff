//! Inspection schedule quality metrics (KPIs).
//!
//! Compares a heuristic schedule against an exact solution of the same
//! instance.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Heuristic idle | Idle time of the heuristic schedule |
//! | Exact idle | Idle time of the exact schedule (if feasible) |
//! | Gap | heuristic idle - exact idle |
//! | Improvement rate | gap / heuristic idle |
//! | Off-event inspections | Heuristic times outside the event set |

use crate::models::{DurationModel, InspectionSchedule};

use super::exact::ExactSolution;
use super::objective::idle_time_by_inspection;

/// Heuristic-versus-exact performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionKpi {
    /// Idle time of the heuristic schedule.
    pub heuristic_idle: i64,
    /// Idle time of the exact schedule. `None` when infeasible.
    pub exact_idle: Option<i64>,
    /// heuristic idle - exact idle. `None` when the exact search is infeasible.
    pub gap: Option<i64>,
    /// Fraction of heuristic idle the exact schedule removes (0.0 when the
    /// heuristic has no idle time).
    pub improvement_rate: Option<f64>,
    /// Whether the exact schedule is a proven minimum.
    pub exact_proven: bool,
    /// Heuristic inspections that are not completion events within the horizon.
    pub off_event_inspections: usize,
    /// Per-inspection idle of the heuristic schedule.
    pub heuristic_by_inspection: Vec<i64>,
    /// Per-inspection idle of the exact schedule.
    pub exact_by_inspection: Vec<i64>,
}

impl InspectionKpi {
    /// Computes KPIs for a heuristic schedule and an exact solution.
    ///
    /// # Arguments
    /// * `model` - The instance both schedules were built for.
    /// * `horizon` - The horizon both schedules were built for.
    /// * `heuristic` - Output of the heuristic scheduler.
    /// * `exact` - Output of the exact scheduler.
    pub fn calculate(
        model: &DurationModel,
        horizon: i64,
        heuristic: &InspectionSchedule,
        exact: &ExactSolution,
    ) -> Self {
        let heuristic_by_inspection = idle_time_by_inspection(model, heuristic.times());
        let heuristic_idle = heuristic_by_inspection
            .iter()
            .fold(0, |acc: i64, &v| acc.saturating_add(v));

        let exact_by_inspection = idle_time_by_inspection(model, exact.schedule.times());
        let exact_idle = exact.is_feasible().then_some(exact.idle_time);
        let gap = exact_idle.map(|e| heuristic_idle.saturating_sub(e));
        let improvement_rate = gap.map(|g| {
            if heuristic_idle == 0 {
                0.0
            } else {
                g as f64 / heuristic_idle as f64
            }
        });

        let events = model.completion_events(horizon);
        let off_event_inspections = heuristic
            .times()
            .iter()
            .filter(|&&t| events.binary_search(&t).is_err())
            .count();

        Self {
            heuristic_idle,
            exact_idle,
            gap,
            improvement_rate,
            exact_proven: exact.is_optimal(),
            off_event_inspections,
            heuristic_by_inspection,
            exact_by_inspection,
        }
    }

    /// Whether the heuristic is within `max_gap` of the exact schedule.
    ///
    /// Always false when the exact search was infeasible.
    pub fn meets_threshold(&self, max_gap: i64) -> bool {
        self.gap.is_some_and(|g| g <= max_gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{ExactScheduler, HeuristicScheduler};

    fn sample_model() -> DurationModel {
        DurationModel::new(vec![vec![4, 5], vec![3, 2, 5], vec![6, 4]]).unwrap()
    }

    #[test]
    fn test_kpi_sample_instance() {
        let model = sample_model();
        let heuristic = HeuristicScheduler::new().schedule(&model, 2, 24);
        let exact = ExactScheduler::new().solve(&model, 2, 24);

        let kpi = InspectionKpi::calculate(&model, 24, &heuristic, &exact);
        // Heuristic [6, 10]: 5 + 6
        assert_eq!(kpi.heuristic_by_inspection, vec![5, 6]);
        assert_eq!(kpi.heuristic_idle, 11);
        assert_eq!(kpi.exact_idle, Some(0));
        assert_eq!(kpi.gap, Some(11));
        assert!((kpi.improvement_rate.unwrap() - 1.0).abs() < 1e-10);
        assert!(kpi.exact_proven);
        assert_eq!(kpi.off_event_inspections, 0);
        assert!(kpi.meets_threshold(11));
        assert!(!kpi.meets_threshold(10));
    }

    #[test]
    fn test_kpi_infeasible_exact() {
        let model = DurationModel::new(vec![vec![5]]).unwrap();
        let heuristic = HeuristicScheduler::new().schedule(&model, 3, 10);
        let exact = ExactScheduler::new().solve(&model, 3, 10);

        let kpi = InspectionKpi::calculate(&model, 10, &heuristic, &exact);
        assert_eq!(kpi.exact_idle, None);
        assert_eq!(kpi.gap, None);
        assert_eq!(kpi.improvement_rate, None);
        assert!(!kpi.exact_proven);
        assert!(!kpi.meets_threshold(i64::MAX));
        // Heuristic [5, 5, 8]: 8 is not a completion event, 5 is.
        assert_eq!(kpi.off_event_inspections, 1);
        assert!(kpi.exact_by_inspection.is_empty());
    }

    #[test]
    fn test_kpi_zero_heuristic_idle() {
        let model = DurationModel::new(vec![vec![5]]).unwrap();
        let heuristic = HeuristicScheduler::new().schedule(&model, 1, 10);
        let exact = ExactScheduler::new().solve(&model, 1, 10);

        let kpi = InspectionKpi::calculate(&model, 10, &heuristic, &exact);
        assert_eq!(kpi.heuristic_idle, 0);
        assert_eq!(kpi.gap, Some(0));
        assert_eq!(kpi.improvement_rate, Some(0.0));
    }
}

//! Exhaustive inspection scheduler.
//!
//! Enumerates every `C`-sized combination of the event set (distinct
//! completion times within the horizon, ascending) and keeps the one with
//! the least idle time. The first combination in lexicographic order wins
//! exact ties.
//!
//! # Complexity
//! O(C(N, C) * C * L) where N=events, C=inspections, L=queues. Intended as
//! a correctness oracle and benchmark for small instances.
//!
//! # Parallelism
//! With [`ExactConfig::parallel`] set, combinations are scored on the
//! rayon pool. The reduction is keyed on `(idle_time, lexicographic rank)`,
//! so the result matches the sequential search exactly.

use std::time::Instant;

use rayon::iter::{ParallelBridge, ParallelIterator};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::combinations::{binomial, Combinations};
use super::objective::idle_time;
use crate::models::{DurationModel, InspectionSchedule};

/// Exact search configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactConfig {
    /// Maximum number of combinations to score. `None` = unbounded.
    pub max_combinations: Option<u64>,
    /// Score combinations in parallel.
    pub parallel: bool,
}

impl ExactConfig {
    /// Creates an unbounded, sequential configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the number of scored combinations (at least one).
    pub fn with_max_combinations(mut self, max_combinations: u64) -> Self {
        self.max_combinations = Some(max_combinations.max(1));
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Outcome class of an exact search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Every combination was scored; the schedule is a proven minimum.
    Optimal,
    /// The combination budget ran out; the schedule is the best found.
    BudgetExhausted,
    /// Fewer distinct events than requested inspections.
    Infeasible,
}

/// Result of [`ExactScheduler::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactSolution {
    /// Best schedule found. Empty when infeasible.
    pub schedule: InspectionSchedule,
    /// Idle time of `schedule`. Zero when infeasible.
    pub idle_time: i64,
    /// Outcome class.
    pub status: SolveStatus,
    /// Number of combinations scored.
    pub combinations_evaluated: u64,
    /// Size of the event set searched.
    pub event_count: usize,
}

impl ExactSolution {
    fn infeasible(event_count: usize) -> Self {
        Self {
            schedule: InspectionSchedule::new(),
            idle_time: 0,
            status: SolveStatus::Infeasible,
            combinations_evaluated: 0,
            event_count,
        }
    }

    /// Whether a schedule of the requested size was found.
    pub fn is_feasible(&self) -> bool {
        self.status != SolveStatus::Infeasible
    }

    /// Whether the schedule is a proven minimum.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}

/// Best candidate seen: `(idle_time, rank, times)`.
type Candidate = (i64, usize, Vec<i64>);

/// Exhaustive minimum-idle inspection scheduler.
///
/// # Example
///
/// ```
/// use u_inspect::models::DurationModel;
/// use u_inspect::scheduler::{ExactScheduler, SolveStatus};
///
/// let model = DurationModel::new(vec![vec![4, 5], vec![3, 2, 5], vec![6, 4]]).unwrap();
/// let solution = ExactScheduler::new().solve(&model, 2, 24);
/// assert_eq!(solution.status, SolveStatus::Optimal);
/// assert_eq!(solution.combinations_evaluated, 15);
/// assert_eq!(solution.schedule.times(), &[3, 4]);
/// assert_eq!(solution.idle_time, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExactScheduler {
    config: ExactConfig,
}

impl ExactScheduler {
    /// Creates a scheduler with the default (unbounded, sequential) config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search configuration.
    pub fn with_config(mut self, config: ExactConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &ExactConfig {
        &self.config
    }

    /// Finds the minimum-idle schedule of `inspection_count` distinct
    /// events within `horizon`.
    pub fn solve(
        &self,
        model: &DurationModel,
        inspection_count: usize,
        horizon: i64,
    ) -> ExactSolution {
        let events = model.completion_events(horizon);
        let event_count = events.len();

        if inspection_count == 0 {
            return ExactSolution {
                schedule: InspectionSchedule::new(),
                idle_time: 0,
                status: SolveStatus::Optimal,
                combinations_evaluated: 0,
                event_count,
            };
        }

        if event_count < inspection_count {
            debug!(event_count, inspection_count, horizon, "not enough events, infeasible");
            return ExactSolution::infeasible(event_count);
        }

        let total = binomial(event_count, inspection_count);
        let limit = self
            .config
            .max_combinations
            .map_or(total, |max| max.max(1).min(total));
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        debug!(
            event_count,
            inspection_count,
            combinations = total,
            limit,
            parallel = self.config.parallel,
            "starting exact search"
        );
        let started = Instant::now();

        let combos = Combinations::new(event_count, inspection_count)
            .take(take)
            .enumerate();
        let score = |(rank, indices): (usize, Vec<usize>)| -> Candidate {
            let times: Vec<i64> = indices.iter().map(|&i| events[i]).collect();
            (idle_time(model, &times), rank, times)
        };
        let best = if self.config.parallel {
            combos
                .par_bridge()
                .map(score)
                .min_by_key(|(idle, rank, _)| (*idle, *rank))
        } else {
            combos.map(score).min_by_key(|(idle, rank, _)| (*idle, *rank))
        };

        let Some((idle, rank, times)) = best else {
            return ExactSolution::infeasible(event_count);
        };

        let status = if limit < total {
            warn!(limit, combinations = total, "combination budget exhausted");
            SolveStatus::BudgetExhausted
        } else {
            SolveStatus::Optimal
        };

        debug!(
            idle_time = idle,
            rank,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            ?status,
            "exact search finished"
        );

        ExactSolution {
            schedule: InspectionSchedule::from_times(times),
            idle_time: idle,
            status,
            combinations_evaluated: limit,
            event_count,
        }
    }
}

//! Queue and duration model.
//!
//! A queue is a fixed sequence of tasks processed back to back from t=0 with
//! no gaps, so the completion time of the k-th task is the prefix sum of the
//! first k durations. The [`DurationModel`] owns every queue of an instance
//! and is read-only once built.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::InspectionError;
use crate::validation::{validate_durations, validate_queue};

/// An ordered sequence of strictly positive task durations.
///
/// Insertion order is processing order. Completion times are cached at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct Queue {
    durations: Vec<i64>,
    completions: Vec<i64>,
}

impl Queue {
    /// Creates a queue, rejecting zero or negative durations.
    pub fn new(durations: Vec<i64>) -> Result<Self, InspectionError> {
        validate_queue(&durations)?;
        Ok(Self::from_validated(durations))
    }

    fn from_validated(durations: Vec<i64>) -> Self {
        let completions = durations
            .iter()
            .scan(0i64, |acc, &d| {
                *acc = acc.saturating_add(d);
                Some(*acc)
            })
            .collect();
        Self {
            durations,
            completions,
        }
    }

    /// Number of tasks.
    #[inline]
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Whether the queue has no tasks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Task durations in processing order.
    pub fn durations(&self) -> &[i64] {
        &self.durations
    }

    /// Completion time of each task (`completion_times()[k-1] == finish_time(k)`).
    pub fn completion_times(&self) -> &[i64] {
        &self.completions
    }

    /// Moment the `count`-th task completes.
    ///
    /// Zero for `count == 0`; clamped to the last task when `count`
    /// exceeds the queue length.
    pub fn finish_time(&self, count: usize) -> i64 {
        match count.min(self.len()) {
            0 => 0,
            k => self.completions[k - 1],
        }
    }

    /// Sum of all durations.
    pub fn total_duration(&self) -> i64 {
        self.finish_time(self.len())
    }
}

impl TryFrom<Vec<i64>> for Queue {
    type Error = InspectionError;

    fn try_from(durations: Vec<i64>) -> Result<Self, Self::Error> {
        Self::new(durations)
    }
}

impl From<Queue> for Vec<i64> {
    fn from(queue: Queue) -> Self {
        queue.durations
    }
}

/// All queues of one instance, indexed `0..L`.
///
/// # Example
/// ```
/// use u_inspect::models::DurationModel;
///
/// let model = DurationModel::new(vec![vec![4, 5], vec![3, 2, 5]]).unwrap();
/// assert_eq!(model.finish_time(1, 2), 5);
/// assert_eq!(model.max_queue_length(), 3);
/// assert_eq!(model.completion_events(9), vec![3, 4, 5, 9]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i64>>", into = "Vec<Vec<i64>>")]
pub struct DurationModel {
    queues: Vec<Queue>,
}

impl DurationModel {
    /// Builds a model from per-queue durations.
    ///
    /// Every non-positive duration in every queue is reported in the error.
    pub fn new(durations: Vec<Vec<i64>>) -> Result<Self, InspectionError> {
        validate_durations(&durations)?;
        Ok(Self {
            queues: durations.into_iter().map(Queue::from_validated).collect(),
        })
    }

    /// Builds a model from already-validated queues.
    pub fn from_queues(queues: Vec<Queue>) -> Self {
        Self { queues }
    }

    /// Number of queues (L).
    #[inline]
    pub fn queue_count(&self) -> usize {
        self.queues.len()
    }

    /// All queues.
    pub fn queues(&self) -> &[Queue] {
        &self.queues
    }

    /// Queue at `index`, if any.
    pub fn queue(&self, index: usize) -> Option<&Queue> {
        self.queues.get(index)
    }

    /// Completion time of the `count`-th task in queue `queue`.
    ///
    /// # Panics
    /// Panics if `queue >= queue_count()`.
    pub fn finish_time(&self, queue: usize, count: usize) -> i64 {
        self.queues[queue].finish_time(count)
    }

    /// Largest number of tasks in any single queue.
    pub fn max_queue_length(&self) -> usize {
        self.queues.iter().map(Queue::len).max().unwrap_or(0)
    }

    /// Total number of tasks across all queues.
    pub fn total_tasks(&self) -> usize {
        self.queues.iter().map(Queue::len).sum()
    }

    /// The event set: distinct completion times at or below `horizon`,
    /// sorted ascending.
    pub fn completion_events(&self, horizon: i64) -> Vec<i64> {
        let events: BTreeSet<i64> = self
            .queues
            .iter()
            .flat_map(|q| q.completion_times().iter().copied())
            .filter(|&t| t <= horizon)
            .collect();
        events.into_iter().collect()
    }

    /// Latest first-task completion over non-empty queues.
    pub fn max_first_completion(&self) -> Option<i64> {
        self.queues
            .iter()
            .filter(|q| !q.is_empty())
            .map(|q| q.finish_time(1))
            .max()
    }
}

impl TryFrom<Vec<Vec<i64>>> for DurationModel {
    type Error = InspectionError;

    fn try_from(durations: Vec<Vec<i64>>) -> Result<Self, Self::Error> {
        Self::new(durations)
    }
}

impl From<DurationModel> for Vec<Vec<i64>> {
    fn from(model: DurationModel) -> Self {
        model.queues.into_iter().map(Vec::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample_model() -> DurationModel {
        DurationModel::new(vec![vec![4, 5], vec![3, 2, 5], vec![6, 4]]).unwrap()
    }

    #[test]
    fn test_queue_completion_times() {
        let q = Queue::new(vec![3, 2, 5]).unwrap();
        assert_eq!(q.completion_times(), &[3, 5, 10]);
        assert_eq!(q.len(), 3);
        assert_eq!(q.total_duration(), 10);
    }

    #[test]
    fn test_finish_time_clamps() {
        let q = Queue::new(vec![4, 5]).unwrap();
        assert_eq!(q.finish_time(0), 0);
        assert_eq!(q.finish_time(1), 4);
        assert_eq!(q.finish_time(2), 9);
        assert_eq!(q.finish_time(7), 9);
    }

    #[test]
    fn test_finish_time_empty_queue() {
        let q = Queue::new(vec![]).unwrap();
        assert!(q.is_empty());
        assert_eq!(q.finish_time(3), 0);
    }

    #[test]
    fn test_finish_time_non_decreasing() {
        let model = sample_model();
        for l in 0..model.queue_count() {
            for k in 0..5 {
                assert!(model.finish_time(l, k) <= model.finish_time(l, k + 1));
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let err = Queue::new(vec![4, 0]).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NonPositiveDuration
        );

        let err = DurationModel::new(vec![vec![-1], vec![2, 0]]).unwrap_err();
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_model_dimensions() {
        let model = sample_model();
        assert_eq!(model.queue_count(), 3);
        assert_eq!(model.max_queue_length(), 3);
        assert_eq!(model.total_tasks(), 7);
        assert_eq!(model.queue(1).map(Queue::len), Some(3));
        assert!(model.queue(3).is_none());
        assert_eq!(DurationModel::default().max_queue_length(), 0);
    }

    #[test]
    fn test_completion_events() {
        let model = sample_model();
        assert_eq!(model.completion_events(24), vec![3, 4, 5, 6, 9, 10]);
        assert_eq!(model.completion_events(5), vec![3, 4, 5]);
        assert!(model.completion_events(0).is_empty());
        assert!(model.completion_events(-4).is_empty());
    }

    #[test]
    fn test_max_first_completion() {
        assert_eq!(sample_model().max_first_completion(), Some(6));
        let model = DurationModel::new(vec![vec![], vec![]]).unwrap();
        assert_eq!(model.max_first_completion(), None);
    }

    #[test]
    fn test_serde_roundtrip_and_rejection() {
        let model = sample_model();
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, "[[4,5],[3,2,5],[6,4]]");
        let back: DurationModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);

        assert!(serde_json::from_str::<DurationModel>("[[4,0]]").is_err());
        assert!(serde_json::from_str::<Queue>("[-3]").is_err());
    }
}

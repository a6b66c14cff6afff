//! Inspection schedule (solution) model.
//!
//! An inspection schedule is an ordered list of visit times. Position `i`
//! is the i-th inspection and is scored against each queue's (i+1)-th
//! completion. Values are kept in the order a scheduler produced them and
//! are never re-sorted.

use serde::{Deserialize, Serialize};

/// An ordered sequence of inspection times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InspectionSchedule {
    times: Vec<i64>,
}

impl InspectionSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule from times in inspection order.
    pub fn from_times(times: Vec<i64>) -> Self {
        Self { times }
    }

    /// Appends the next inspection.
    pub fn push(&mut self, time: i64) {
        self.times.push(time);
    }

    /// Inspection times in order.
    pub fn times(&self) -> &[i64] {
        &self.times
    }

    /// Consumes the schedule, returning its times.
    pub fn into_times(self) -> Vec<i64> {
        self.times
    }

    /// Number of inspections.
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether no inspection is scheduled.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Whether `time` is one of the inspections.
    pub fn contains(&self, time: i64) -> bool {
        self.times.contains(&time)
    }

    /// Whether the times are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.times.windows(2).all(|w| w[0] <= w[1])
    }

    /// Latest inspection time, if any.
    pub fn last_time(&self) -> Option<i64> {
        self.times.iter().copied().max()
    }
}

impl From<Vec<i64>> for InspectionSchedule {
    fn from(times: Vec<i64>) -> Self {
        Self::from_times(times)
    }
}

impl AsRef<[i64]> for InspectionSchedule {
    fn as_ref(&self) -> &[i64] {
        &self.times
    }
}

//! Inspection scheduling domain models.
//!
//! Provides the data types for an inspection instance and its solutions.
//!
//! # Domain Mappings
//!
//! | u-inspect | Teaching Labs | Manufacturing | Clinical |
//! |-----------|---------------|---------------|----------|
//! | Queue | Lab | Production line | Exam room |
//! | Task | Student session | Work order | Patient visit |
//! | Inspection | Instructor check | Quality audit | Ward round |

mod inspection;
mod queue;

pub use inspection::InspectionSchedule;
pub use queue::{DurationModel, Queue};

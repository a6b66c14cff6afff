//! Inspection scheduling over sequential task queues.
//!
//! Several independent queues each process a fixed sequence of tasks back
//! to back from t=0. A limited number of inspections must be placed within
//! a horizon so that the total time finished tasks spend waiting for an
//! inspector (idle time) is as small as possible.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Queue`, `DurationModel`, `InspectionSchedule`
//! - **`scheduler`**: `HeuristicScheduler`, `ExactScheduler`, the idle-time
//!   objective, and `InspectionKpi`
//! - **`validation`**: Input integrity checks (non-positive durations,
//!   negative horizon or inspection count)
//! - **`error`**: `InspectionError`
//!
//! # Example
//!
//! ```
//! use u_inspect::models::DurationModel;
//! use u_inspect::scheduler::{idle_time, ExactScheduler, HeuristicScheduler};
//!
//! let model = DurationModel::new(vec![vec![4, 5], vec![3, 2, 5], vec![6, 4]]).unwrap();
//! let heuristic = HeuristicScheduler::new().schedule(&model, 2, 24);
//! let exact = ExactScheduler::new().solve(&model, 2, 24);
//! assert!(exact.idle_time <= idle_time(&model, heuristic.times()));
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Knuth (2011), "The Art of Computer Programming", Vol. 4A

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::InspectionError;

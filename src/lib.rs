//! Tennis training session analytics
//!
//! A pure, stateless metrics engine: it ingests the parallel sequences a
//! training session produces (set durations in seconds, 1-5 intensity
//! ratings, optional rest gaps) and computes a fixed record of derived
//! metrics (activity time, work/rest ratio, consistency, density) that
//! drive charts and text summaries in the surrounding app.
//!
//! The engine holds no state and performs no I/O; every call is a one-shot
//! batch over complete, already-materialized data. Construct a
//! [`SessionAnalyzer`] wherever one is needed and call it from any thread.

mod analyzer;
mod models;
mod session;
mod stats;

#[cfg(test)]
mod test_utils;

pub use analyzer::{AnalysisError, SessionAnalyzer};
pub use models::{Intensity, SessionAnalysis};
pub use session::{SessionBatch, SetRecord};

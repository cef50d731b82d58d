//! Boundary between the app's session model and the analytics engine
//!
//! The surrounding app records each set as a pair of timestamps plus an
//! effort rating. The engine only understands flat, index-aligned numeric
//! sequences, so this module does the one-way flattening: durations from
//! each set's own interval, rest gaps from the space between consecutive
//! sets. Nothing else in the crate touches time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::{AnalysisError, SessionAnalyzer};
use crate::models::{Intensity, SessionAnalysis};

/// One recorded set: when it started, when it ended, how hard it felt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
  pub started_at: DateTime<Utc>,
  pub ended_at: DateTime<Utc>,
  pub intensity: Intensity,
}

impl SetRecord {
  /// Active seconds of this set. Clamped at zero for records whose
  /// timestamps ended up reversed (clock adjustments, manual edits).
  pub fn duration_seconds(&self) -> f64 {
    let millis = (self.ended_at - self.started_at).num_milliseconds();
    (millis as f64 / 1000.0).max(0.0)
  }
}

/// The flat, index-aligned sequences the engine consumes.
///
/// `rest_durations` follows the gaps-between-sets convention: `n - 1`
/// entries for `n` sets, each the idle seconds between one set's end and
/// the next set's start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionBatch {
  pub durations: Vec<f64>,
  pub intensities: Vec<u8>,
  pub rest_durations: Vec<f64>,
}

impl SessionBatch {
  /// Flatten timestamped set records into parallel sequences.
  ///
  /// Overlapping consecutive records produce a zero-length gap rather than
  /// negative rest.
  pub fn from_sets(sets: &[SetRecord]) -> Self {
    let durations = sets.iter().map(SetRecord::duration_seconds).collect();
    let intensities = sets.iter().map(|set| set.intensity.as_u8()).collect();

    let rest_durations = sets
      .windows(2)
      .map(|pair| {
        let gap_millis = (pair[1].started_at - pair[0].ended_at).num_milliseconds();
        (gap_millis as f64 / 1000.0).max(0.0)
      })
      .collect();

    Self {
      durations,
      intensities,
      rest_durations,
    }
  }

  /// Run the engine over this batch.
  pub fn analyze(&self, analyzer: &SessionAnalyzer) -> Result<SessionAnalysis, AnalysisError> {
    analyzer.analyze(&self.durations, &self.intensities, &self.rest_durations)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::assert_approx_eq;
  use crate::test_utils::set_record;

  #[test]
  fn test_from_sets_derives_durations_and_gaps() {
    // Three 5-minute sets with 1-minute gaps between them
    let sets = [
      set_record(0, 300, Intensity::Moderate),
      set_record(360, 300, Intensity::High),
      set_record(720, 300, Intensity::Moderate),
    ];

    let batch = SessionBatch::from_sets(&sets);

    assert_eq!(batch.durations, vec![300.0, 300.0, 300.0]);
    assert_eq!(batch.intensities, vec![3, 4, 3]);
    assert_eq!(batch.rest_durations, vec![60.0, 60.0]);
  }

  #[test]
  fn test_from_sets_single_set_has_no_gaps() {
    let sets = [set_record(0, 300, Intensity::Low)];
    let batch = SessionBatch::from_sets(&sets);

    assert_eq!(batch.durations.len(), 1);
    assert!(batch.rest_durations.is_empty());
  }

  #[test]
  fn test_from_sets_clamps_overlapping_records() {
    // Second set starts before the first one ends; rest must not go
    // negative
    let sets = [
      set_record(0, 300, Intensity::Moderate),
      set_record(240, 300, Intensity::Moderate),
    ];

    let batch = SessionBatch::from_sets(&sets);
    assert_eq!(batch.rest_durations, vec![0.0]);
  }

  #[test]
  fn test_reversed_timestamps_clamp_to_zero_duration() {
    let mut set = set_record(600, 300, Intensity::Moderate);
    std::mem::swap(&mut set.started_at, &mut set.ended_at);
    assert_eq!(set.duration_seconds(), 0.0);
  }

  #[test]
  fn test_derived_batch_feeds_the_engine() {
    let sets = [
      set_record(0, 240, Intensity::Moderate),
      set_record(300, 240, Intensity::High),
      set_record(600, 240, Intensity::Moderate),
    ];

    let batch = SessionBatch::from_sets(&sets);
    let analysis = batch.analyze(&SessionAnalyzer::new()).unwrap();

    assert_eq!(analysis.total_sets, 3);
    assert_eq!(analysis.total_active_time, 720.0);
    // 720 work over 120 seconds of gaps
    assert_approx_eq!(analysis.work_rest_ratio, 6.0, 1e-12);
  }
}

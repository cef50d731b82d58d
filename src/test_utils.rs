//! Test fixtures and helper assertions

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::models::Intensity;
use crate::session::SetRecord;

/// ---------------------------------------------------------------------------
/// Fixture Factories
/// ---------------------------------------------------------------------------

/// A session of `count` identical sets: same duration, same intensity.
pub fn steady_session(count: usize, duration: f64, intensity: u8) -> (Vec<f64>, Vec<u8>) {
  (vec![duration; count], vec![intensity; count])
}

/// Fixed reference instant so timestamp-based fixtures are deterministic.
pub fn session_start() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

/// A set record offset from the session start by `start_offset` seconds,
/// lasting `duration` seconds.
pub fn set_record(start_offset: i64, duration: i64, intensity: Intensity) -> SetRecord {
  let started_at = session_start() + Duration::seconds(start_offset);
  SetRecord {
    started_at,
    ended_at: started_at + Duration::seconds(duration),
    intensity,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

//! Value types shared across the analytics surface

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Intensity Scale
/// ---------------------------------------------------------------------------

/// Subjective effort rating for a training set, on a 1-5 scale.
///
/// The engine's raw entry points accept plain `u8` intensities so callers
/// can hand over whatever their session model stores; this enum is the
/// typed layer for code that builds sets directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
  VeryLow = 1,
  Low = 2,
  Moderate = 3,
  High = 4,
  VeryHigh = 5,
}

impl Intensity {
  pub fn as_u8(self) -> u8 {
    self as u8
  }

  /// Map the 1-5 scale onto [0.0, 1.0].
  pub fn normalized(self) -> f64 {
    f64::from(self.as_u8() - 1) / 4.0
  }
}

impl TryFrom<u8> for Intensity {
  type Error = String;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      1 => Ok(Self::VeryLow),
      2 => Ok(Self::Low),
      3 => Ok(Self::Moderate),
      4 => Ok(Self::High),
      5 => Ok(Self::VeryHigh),
      _ => Err(format!("Intensity must be in 1..=5, got {}", value)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Analysis Results
/// ---------------------------------------------------------------------------

/// Metrics computed from one session's worth of sets.
///
/// A plain value record: it only exists as the return of a single
/// [`analyze`](crate::SessionAnalyzer::analyze) call, is never cached, and
/// serializes directly for whatever presentation layer consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionAnalysis {
  /// Sum of set durations in seconds
  pub total_active_time: f64,

  /// Total work divided by total rest; `+inf` when rest is zero
  pub work_rest_ratio: f64,

  /// 0.0 (erratic) to 1.0 (perfectly even durations and intensities)
  pub consistency_score: f64,

  /// 0.0 (low density) to 1.0 (high density)
  pub training_density_score: f64,

  /// Mean intensity on the 1.0-5.0 scale; 0.0 for an empty session
  pub average_intensity: f64,

  /// Intensity-weighted active time, sum(duration * intensity)
  pub total_work_volume: f64,

  /// Number of sets in the batch
  pub total_sets: usize,
}

impl SessionAnalysis {
  /// Serialize for the presentation layer.
  ///
  /// Note that JSON has no representation for infinity, so a zero-rest
  /// `work_rest_ratio` serializes as `null`.
  pub fn to_json(&self) -> String {
    serde_json::to_string_pretty(self).unwrap_or_default()
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

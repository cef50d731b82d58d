//! Deterministic analytics engine for training sessions
//!
//! This module turns a session's raw parallel sequences (set durations,
//! intensity ratings, optional rest gaps) into the metrics record the rest
//! of the app presents. Everything here is a pure function of its inputs:
//! no state, no I/O, safe to call from any thread.
//!
//! [`SessionAnalyzer::analyze`] is the strict entry point and validates the
//! whole batch before computing anything. The standalone calculators are
//! best-effort utilities meant for already-validated data; only
//! [`work_rest_ratio`](SessionAnalyzer::work_rest_ratio) can fail, and only
//! on a rest-sequence length it cannot interpret.

use serde::Serialize;
use thiserror::Error;

use crate::models::SessionAnalysis;
use crate::stats;

/// ---------------------------------------------------------------------------
/// Valid Ranges
/// ---------------------------------------------------------------------------

const MIN_DURATION: f64 = 0.0;
const MAX_DURATION: f64 = 86400.0; // 24 hours
const MIN_INTENSITY: u8 = 1;
const MAX_INTENSITY: u8 = 5;

/// Normalizing ceiling for the density volume component: one hour per set
/// at full normalized intensity.
const VOLUME_CEILING_SECONDS: f64 = 3600.0;

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

/// Invalid-argument failures raised before any metric is computed.
///
/// Every variant is the same semantic kind (the caller handed over a
/// malformed batch); the payload identifies the offending field and index
/// so the presentation layer can surface an actionable message.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum AnalysisError {
  #[error("Durations and intensities vectors must have the same size ({durations} vs {intensities})")]
  LengthMismatch { durations: usize, intensities: usize },

  #[error("Duration at index {index} is out of valid range [0, 86400] seconds (got {value})")]
  DurationOutOfRange { index: usize, value: f64 },

  #[error("Intensity at index {index} is out of valid range [1, 5] (got {value})")]
  IntensityOutOfRange { index: usize, value: u8 },

  #[error("Rest durations vector size must match durations vector size or be one less (got {rest} for {sets} sets)")]
  RestLengthMismatch { sets: usize, rest: usize },
}

/// ---------------------------------------------------------------------------
/// Session Analyzer
/// ---------------------------------------------------------------------------

/// Stateless analytics engine for one training session at a time.
///
/// A zero-sized value: construct one wherever it is needed and share it
/// freely, there is no global instance and nothing to protect.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionAnalyzer;

impl SessionAnalyzer {
  pub fn new() -> Self {
    Self
  }

  /// Analyze a training session.
  ///
  /// `durations` holds each set's active seconds, `intensities` the
  /// matching 1-5 effort ratings. `rest_durations` is optional (pass an
  /// empty slice to assume symmetric 1:1 work/rest) and accepts either of
  /// two conventions: one entry per set, or one entry per gap between
  /// consecutive sets (`n - 1` entries).
  ///
  /// An empty batch is valid and produces an all-zero record (with a
  /// consistency score of 1.0, since nothing varied).
  pub fn analyze(
    &self,
    durations: &[f64],
    intensities: &[u8],
    rest_durations: &[f64],
  ) -> Result<SessionAnalysis, AnalysisError> {
    Self::validate_inputs(durations, intensities)?;

    // Average intensity divides by the set count, which is undefined for
    // an empty batch; defined here as 0.0 rather than NaN.
    let average_intensity = if intensities.is_empty() {
      0.0
    } else {
      let intensity_sum: f64 = intensities.iter().map(|&i| f64::from(i)).sum();
      intensity_sum / intensities.len() as f64
    };

    let total_work_volume = durations
      .iter()
      .zip(intensities)
      .map(|(duration, &intensity)| duration * f64::from(intensity))
      .sum();

    Ok(SessionAnalysis {
      total_active_time: Self::total_active_time(durations),
      work_rest_ratio: Self::work_rest_ratio(durations, rest_durations)?,
      consistency_score: Self::consistency_score(durations, intensities),
      training_density_score: Self::training_density_score(durations, intensities),
      average_intensity,
      total_work_volume,
      total_sets: durations.len(),
    })
  }

  /// Sum of set durations in seconds; 0.0 for an empty session.
  pub fn total_active_time(durations: &[f64]) -> f64 {
    durations.iter().sum()
  }

  /// Total work divided by total rest.
  ///
  /// With an empty `rest_durations` the session is assumed to rest as long
  /// as it works (1:1), which makes the ratio exactly 1.0 for any non-empty
  /// session with positive work. A provided rest sequence may follow either
  /// convention: per-set rest (`n` entries) or gaps between consecutive
  /// sets (`n - 1` entries); both are summed the same way, and any other
  /// length is rejected. A rest total within 1e-9 of zero yields positive
  /// infinity (work with no rest), except that an empty session
  /// short-circuits to 0.0.
  pub fn work_rest_ratio(
    durations: &[f64],
    rest_durations: &[f64],
  ) -> Result<f64, AnalysisError> {
    if durations.is_empty() {
      return Ok(0.0);
    }

    let total_work = Self::total_active_time(durations);

    let total_rest = if rest_durations.is_empty() {
      total_work
    } else {
      let gap_count = durations.len() - 1;
      if rest_durations.len() != durations.len() && rest_durations.len() != gap_count {
        return Err(AnalysisError::RestLengthMismatch {
          sets: durations.len(),
          rest: rest_durations.len(),
        });
      }
      rest_durations.iter().sum()
    };

    if total_rest < stats::EPSILON {
      return Ok(f64::INFINITY);
    }

    Ok(total_work / total_rest)
  }

  /// How evenly the session was paced, in [0.0, 1.0].
  ///
  /// Blends the inverse coefficient of variation of durations (60%) and
  /// intensities (40%); `1 / (1 + cv)` maps CV in [0, inf) onto (0, 1]
  /// without needing a reference scale. A single set is trivially
  /// consistent and scores 1.0.
  pub fn consistency_score(durations: &[f64], intensities: &[u8]) -> f64 {
    if durations.len() < 2 {
      return 1.0;
    }

    let duration_cv = stats::coefficient_of_variation(durations);
    let duration_consistency = 1.0 / (1.0 + duration_cv);

    let intensity_values: Vec<f64> = intensities.iter().map(|&i| f64::from(i)).collect();
    let intensity_cv = stats::coefficient_of_variation(&intensity_values);
    let intensity_consistency = 1.0 / (1.0 + intensity_cv);

    let consistency = 0.6 * duration_consistency + 0.4 * intensity_consistency;
    consistency.clamp(0.0, 1.0)
  }

  /// How dense the session was, in [0.0, 1.0].
  ///
  /// Blends average normalized intensity (40%), intensity-weighted volume
  /// against a one-hour-per-set ceiling (40%), and a set-length component
  /// (20%) that penalizes average sets under 30 seconds or over 30 minutes
  /// (fatigue proxy). An empty session scores 0.0.
  pub fn training_density_score(durations: &[f64], intensities: &[u8]) -> f64 {
    if durations.is_empty() {
      return 0.0;
    }

    let set_count = durations.len() as f64;

    let avg_intensity: f64 = intensities
      .iter()
      .map(|&i| Self::normalize_intensity(i))
      .sum::<f64>()
      / set_count;

    let weighted_volume: f64 = durations
      .iter()
      .zip(intensities)
      .map(|(duration, &intensity)| duration * Self::normalize_intensity(intensity))
      .sum();
    let volume_component = (weighted_volume / (VOLUME_CEILING_SECONDS * set_count)).min(1.0);

    let avg_duration = stats::mean(durations);
    let duration_component = if avg_duration < 30.0 {
      avg_duration / 30.0
    } else if avg_duration > 1800.0 {
      1800.0 / avg_duration
    } else {
      1.0
    };

    let density = 0.4 * avg_intensity + 0.4 * volume_component + 0.2 * duration_component;
    density.clamp(0.0, 1.0)
  }

  /// Validate a batch before any metric is computed. All-or-nothing: the
  /// first offending field fails the whole call.
  fn validate_inputs(durations: &[f64], intensities: &[u8]) -> Result<(), AnalysisError> {
    if durations.len() != intensities.len() {
      return Err(AnalysisError::LengthMismatch {
        durations: durations.len(),
        intensities: intensities.len(),
      });
    }

    for (index, &value) in durations.iter().enumerate() {
      if !(MIN_DURATION..=MAX_DURATION).contains(&value) {
        return Err(AnalysisError::DurationOutOfRange { index, value });
      }
    }

    for (index, &value) in intensities.iter().enumerate() {
      if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&value) {
        return Err(AnalysisError::IntensityOutOfRange { index, value });
      }
    }

    Ok(())
  }

  /// Map a 1-5 rating onto [0.0, 1.0]. Tolerates out-of-scale values so
  /// the permissive calculators never panic on unvalidated data.
  fn normalize_intensity(intensity: u8) -> f64 {
    (f64::from(intensity) - f64::from(MIN_INTENSITY))
      / f64::from(MAX_INTENSITY - MIN_INTENSITY)
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

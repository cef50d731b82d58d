//! Walkthrough of the session analytics engine
//!
//! Run with: cargo run --example session_report

use session_analyzer::{Intensity, SessionAnalysis, SessionAnalyzer, SessionBatch, SetRecord};

fn print_analysis(title: &str, analysis: &SessionAnalysis) {
  println!("\n--- {} ---", title);
  println!(
    "  Total active time:  {:.2} s ({:.1} min)",
    analysis.total_active_time,
    analysis.total_active_time / 60.0
  );
  println!("  Work/rest ratio:    {:.2}", analysis.work_rest_ratio);
  println!("  Consistency score:  {:.2}", analysis.consistency_score);
  println!("  Density score:      {:.2}", analysis.training_density_score);
  println!("  Total sets:         {}", analysis.total_sets);
  println!("  Average intensity:  {:.2} / 5.0", analysis.average_intensity);
  println!("  Total work volume:  {:.2}", analysis.total_work_volume);
}

fn main() {
  println!("Tennis Training Session Analyzer");
  println!("================================");

  let analyzer = SessionAnalyzer::new();

  // A steady session: 5 sets of 5 minutes at moderate intensity
  let durations = [300.0, 300.0, 300.0, 300.0, 300.0];
  let intensities = [3, 3, 3, 3, 3];
  match analyzer.analyze(&durations, &intensities, &[]) {
    Ok(analysis) => print_analysis("Steady moderate session", &analysis),
    Err(e) => eprintln!("Analysis failed: {}", e),
  }

  // A pyramid session with varying effort and explicit per-set rest
  let durations = [180.0, 240.0, 300.0, 240.0, 180.0];
  let intensities = [2, 3, 5, 4, 2];
  let rests = [60.0, 60.0, 90.0, 90.0, 60.0];
  match analyzer.analyze(&durations, &intensities, &rests) {
    Ok(analysis) => print_analysis("Pyramid session", &analysis),
    Err(e) => eprintln!("Analysis failed: {}", e),
  }

  // Short all-out intervals
  let durations = [120.0, 120.0, 120.0, 120.0];
  let intensities = [5, 5, 5, 5];
  match analyzer.analyze(&durations, &intensities, &[]) {
    Ok(analysis) => print_analysis("High-intensity intervals", &analysis),
    Err(e) => eprintln!("Analysis failed: {}", e),
  }

  // Individual calculators on already-validated data
  let durations = [240.0, 300.0, 180.0];
  let intensities = [3, 4, 3];
  println!("\n--- Individual calculators ---");
  println!(
    "  Total active time:  {:.2} s",
    SessionAnalyzer::total_active_time(&durations)
  );
  println!(
    "  Work/rest ratio:    {:.2}",
    SessionAnalyzer::work_rest_ratio(&durations, &[]).unwrap_or(f64::NAN)
  );
  println!(
    "  Consistency score:  {:.2}",
    SessionAnalyzer::consistency_score(&durations, &intensities)
  );
  println!(
    "  Density score:      {:.2}",
    SessionAnalyzer::training_density_score(&durations, &intensities)
  );

  // Deriving a batch from timestamped set records
  let start = chrono::Utc::now();
  let sets: Vec<SetRecord> = (0..3)
    .map(|i| {
      let started_at = start + chrono::Duration::seconds(i * 360);
      SetRecord {
        started_at,
        ended_at: started_at + chrono::Duration::seconds(300),
        intensity: Intensity::High,
      }
    })
    .collect();

  let batch = SessionBatch::from_sets(&sets);
  match batch.analyze(&analyzer) {
    Ok(analysis) => {
      print_analysis("From timestamped records", &analysis);
      println!("\nAs JSON:\n{}", analysis.to_json());
    }
    Err(e) => eprintln!("Analysis failed: {}", e),
  }
}

use log::debug;
use std::fmt;

pub mod stopwatch;

/// Default input values shared between the calculator and the UI host
pub mod defaults {
    pub const PR_MINUTES: u32 = 0;
    pub const PR_SECONDS: f64 = 50.0;
    pub const LAP_LENGTH_M: u32 = 200;
}

// Custom error type for pace calculation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaceError {
    InvalidDistance,
}

impl fmt::Display for PaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaceError::InvalidDistance => write!(f, "Event distance cannot be zero."),
        }
    }
}

impl std::error::Error for PaceError {}

/// One row of the split table, cumulative from the start of the race.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitRow {
    /// "Lap N" for full laps, "Finish" for a trailing partial lap.
    pub label: String,
    pub distance_m: u64,
    /// Cumulative target time at this marker, in seconds.
    pub cumulative: f64,
}

/// Output of [`compute_pace`]: per-lap pace plus the full split table.
#[derive(Debug, Clone, PartialEq)]
pub struct PaceResult {
    pub pace_per_lap: f64,
    pub half_lap_pace: Option<f64>,
    pub splits: Vec<SplitRow>,
}

/// Format a non-negative seconds duration as a fixed-width `MM:SS.ss` string.
///
/// The value is rounded to whole centiseconds before being split into
/// minutes and seconds, so inputs just under a minute boundary roll over
/// cleanly (`3599.999` becomes `"60:00.00"`, never `"59:60.00"`).
pub fn format_time(total_seconds: f64) -> String {
    let centis = (total_seconds * 100.0).round() as u64;
    let minutes = centis / 6000;
    let seconds = (centis % 6000) / 100;
    let hundredths = centis % 100;
    format!("{:02}:{:02}.{:02}", minutes, seconds, hundredths)
}

/// Compute even-effort lap pacing for a target PR time.
///
/// `lap_length_m` must be positive; the input widgets guarantee this.
/// A fractional lap count yields a trailing "Finish" row whose cumulative
/// time is pinned to the exact PR total so float drift never shows up at
/// the line. Any strictly positive remainder triggers that row; there is
/// deliberately no epsilon tolerance.
///
/// Runs in O(number of full laps). Pure: all display formatting is the
/// caller's job via [`format_time`].
pub fn compute_pace(
    event_distance_m: f64,
    lap_length_m: f64,
    pr_minutes: u32,
    pr_seconds: f64,
    show_half_laps: bool,
) -> Result<PaceResult, PaceError> {
    if event_distance_m == 0.0 {
        return Err(PaceError::InvalidDistance);
    }

    let total_pr_seconds = f64::from(pr_minutes) * 60.0 + pr_seconds;
    let total_laps = event_distance_m / lap_length_m;
    let pace_per_lap = total_pr_seconds / total_laps;

    debug!(
        "Pacing {}m on a {}m track: {} laps at {:.3}s per lap",
        event_distance_m, lap_length_m, total_laps, pace_per_lap
    );

    let half_lap_pace = show_half_laps.then(|| pace_per_lap / 2.0);

    let num_full_laps = total_laps.floor() as u64;
    let remainder = total_laps - num_full_laps as f64;

    let mut splits = Vec::with_capacity(num_full_laps as usize + 1);
    let mut cumulative = 0.0;
    for i in 1..=num_full_laps {
        cumulative += pace_per_lap;
        splits.push(SplitRow {
            label: format!("Lap {}", i),
            distance_m: (i as f64 * lap_length_m).round() as u64,
            cumulative,
        });
    }

    if remainder > 0.0 {
        splits.push(SplitRow {
            label: "Finish".to_string(),
            distance_m: event_distance_m.round() as u64,
            cumulative: total_pr_seconds,
        });
    }

    Ok(PaceResult {
        pace_per_lap,
        half_lap_pace,
        splits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_basic() {
        assert_eq!(format_time(0.0), "00:00.00");
        assert_eq!(format_time(65.5), "01:05.50");
        assert_eq!(format_time(25.0), "00:25.00");
        assert_eq!(format_time(12.5), "00:12.50");
    }

    #[test]
    fn test_format_time_rounds_into_next_minute() {
        // Rounding happens before the minute split, so seconds never read "60"
        assert_eq!(format_time(3599.999), "60:00.00");
        assert_eq!(format_time(59.996), "01:00.00");
        assert_eq!(format_time(59.994), "00:59.99");
    }

    #[test]
    fn test_even_lap_division() {
        // 400m on a 200m track at 0:50 -> two laps of 25s each
        let result = compute_pace(400.0, 200.0, 0, 50.0, false).unwrap();
        assert_eq!(result.pace_per_lap, 25.0);
        assert_eq!(result.half_lap_pace, None);
        assert_eq!(
            result.splits,
            vec![
                SplitRow {
                    label: "Lap 1".into(),
                    distance_m: 200,
                    cumulative: 25.0
                },
                SplitRow {
                    label: "Lap 2".into(),
                    distance_m: 400,
                    cumulative: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_half_lap_pace() {
        let result = compute_pace(400.0, 200.0, 0, 50.0, true).unwrap();
        assert_eq!(result.half_lap_pace, Some(12.5));
        assert_eq!(format_time(result.half_lap_pace.unwrap()), "00:12.50");
    }

    #[test]
    fn test_fractional_laps_get_finish_row() {
        // 300m on a 200m track at 0:45 -> 1.5 laps, 30s pace
        let result = compute_pace(300.0, 200.0, 0, 45.0, false).unwrap();
        assert_eq!(result.pace_per_lap, 30.0);
        assert_eq!(result.splits.len(), 2);
        assert_eq!(result.splits[0].label, "Lap 1");
        assert_eq!(result.splits[0].distance_m, 200);
        assert_eq!(result.splits[0].cumulative, 30.0);
        assert_eq!(result.splits[1].label, "Finish");
        assert_eq!(result.splits[1].distance_m, 300);
        assert_eq!(result.splits[1].cumulative, 45.0);
    }

    #[test]
    fn test_finish_row_pins_exact_pr_total() {
        // 1000m on a 300m track: 3 full laps plus a finish row at exactly the PR
        let result = compute_pace(1000.0, 300.0, 2, 30.0, false).unwrap();
        let last = result.splits.last().unwrap();
        assert_eq!(last.label, "Finish");
        assert_eq!(last.distance_m, 1000);
        assert_eq!(last.cumulative, 150.0);
    }

    #[test]
    fn test_zero_distance_is_an_error() {
        assert_eq!(
            compute_pace(0.0, 200.0, 0, 50.0, false),
            Err(PaceError::InvalidDistance)
        );
    }

    #[test]
    fn test_pr_minutes_fold_into_total() {
        // 1600m on a 200m track at 5:20 -> 8 laps of 40s
        let result = compute_pace(1600.0, 200.0, 5, 20.0, false).unwrap();
        assert_eq!(result.pace_per_lap, 40.0);
        assert_eq!(result.splits.len(), 8);
        assert_eq!(result.splits[7].label, "Lap 8");
        assert_eq!(result.splits[7].distance_m, 1600);
        assert_eq!(result.splits[7].cumulative, 320.0);
    }

    #[test]
    fn test_even_division_last_row_equals_pr_total() {
        let result = compute_pace(800.0, 200.0, 2, 0.0, false).unwrap();
        assert_eq!(result.splits.len(), 4);
        assert!(result
            .splits
            .iter()
            .all(|row| row.label.starts_with("Lap ")));
        assert_eq!(result.splits.last().unwrap().cumulative, 120.0);
    }

    #[test]
    fn test_many_laps_monotonic_cumulative() {
        // 10km on a 1m "track" keeps the table well formed at large lap counts
        let result = compute_pace(10_000.0, 1.0, 30, 0.0, false).unwrap();
        assert_eq!(result.splits.len(), 10_000);
        let mut prev = 0.0;
        for row in &result.splits {
            assert!(row.cumulative > prev);
            prev = row.cumulative;
        }
        assert_eq!(result.splits.last().unwrap().distance_m, 10_000);
    }
}

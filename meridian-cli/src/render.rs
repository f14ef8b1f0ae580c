//! Plain-text rendering of solve results.

use std::io::{self, Write};

use meridian_core::{Solution, Waypoint};

/// Message printed when no route was found.
pub(crate) const NO_SOLUTION_MESSAGE: &str = "No solution found.";

/// Write the solved route as one `place (region)` line per stop followed by
/// the rounded total distance.
///
/// Returns [`io::ErrorKind::InvalidData`] if the route names a waypoint index
/// outside `waypoints`.
///
/// # Examples
/// ```rust
/// use std::time::Duration;
/// use meridian_cli::render_solution;
/// use meridian_core::{Diagnostics, DistanceMatrix, Route, Solution, Waypoint};
///
/// let stops = vec![
///     Waypoint::new("Iowa", "Des Moines", 41.5908, -93.6091)?,
///     Waypoint::new("Illinois", "Springfield", 39.7983, -89.6544)?,
/// ];
/// let matrix = DistanceMatrix::from_waypoints(&stops);
/// let route = Route::new(vec![0, 1], 0, 1, 2)?;
/// let solution = Solution::new(route, &matrix, Diagnostics::default());
///
/// let mut out = Vec::new();
/// render_solution(&mut out, &stops, &solution)?;
/// let text = String::from_utf8(out)?;
/// assert!(text.starts_with("Optimal route:\nDes Moines (Iowa)\nSpringfield (Illinois)\n"));
/// assert!(text.ends_with(" km\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_solution(
    writer: &mut dyn Write,
    waypoints: &[Waypoint],
    solution: &Solution,
) -> io::Result<()> {
    writeln!(writer, "Optimal route:")?;
    for &index in solution.route.stops() {
        let stop = waypoints.get(index).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("route refers to unknown waypoint {index}"),
            )
        })?;
        writeln!(writer, "{}", stop.label())?;
    }
    writeln!(writer)?;
    writeln!(
        writer,
        "Total travel distance: {} km",
        group_thousands(round_km(solution.total_distance_km))
    )
}

/// Write the no-solution message.
pub fn render_no_solution(writer: &mut dyn Write) -> io::Result<()> {
    writeln!(writer, "{NO_SOLUTION_MESSAGE}")
}

/// Format `value` with commas between groups of three digits.
///
/// # Examples
/// ```rust
/// assert_eq!(meridian_cli::group_thousands(1_234_567), "1,234,567");
/// assert_eq!(meridian_cli::group_thousands(999), "999");
/// ```
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Nearest whole kilometre; negative or non-finite totals render as zero.
fn round_km(distance: f64) -> u64 {
    if !distance.is_finite() || distance <= 0.0 {
        return 0;
    }
    // Float-to-int `as` casts saturate at `u64::MAX`.
    distance.round() as u64
}

//! Fixtures shared by unit, behaviour and property tests across the workspace.
//!
//! Available under `cfg(test)` and behind the `test-support` feature.

use geo::Coord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{Route, Solution, SolveError, SolveRequest, Solver, Waypoint};

/// Construct a waypoint, panicking on non-finite coordinates.
///
/// # Examples
/// ```rust
/// use meridian_core::test_support::waypoint;
///
/// let stop = waypoint("Iowa", "Des Moines", 41.5908, -93.6091);
/// assert_eq!(stop.location.y, 41.5908);
/// ```
#[must_use]
pub fn waypoint(region: &str, place: &str, latitude: f64, longitude: f64) -> Waypoint {
    Waypoint::new(region, place, latitude, longitude)
        .unwrap_or_else(|err| panic!("fixture waypoint {place} is invalid: {err}"))
}

/// Eight state capitals from Des Moines to Washington, in input order.
#[must_use]
pub fn sample_capitals() -> Vec<Waypoint> {
    vec![
        waypoint("Iowa", "Des Moines", 41.5908, -93.6091),
        waypoint("Illinois", "Springfield", 39.7817, -89.6501),
        waypoint("Ohio", "Columbus", 39.9612, -82.9988),
        waypoint("Minnesota", "Saint Paul", 44.9537, -93.0900),
        waypoint("Indiana", "Indianapolis", 39.7684, -86.1581),
        waypoint("Wisconsin", "Madison", 43.0731, -89.4012),
        waypoint("Michigan", "Lansing", 42.7325, -84.5555),
        waypoint("District of Columbia", "Washington", 38.9072, -77.0369),
    ]
}

/// The [`sample_capitals`] data as the JSON accepted by the loader.
#[must_use]
pub fn sample_capitals_json() -> String {
    let records: Vec<String> = sample_capitals()
        .iter()
        .map(|stop| {
            format!(
                r#"{{ "state": "{}", "capital": "{}", "lat": {}, "long": {} }}"#,
                stop.region_name,
                stop.place_name,
                stop.latitude(),
                stop.longitude()
            )
        })
        .collect();
    format!("[\n  {}\n]\n", records.join(",\n  "))
}

/// Deterministically scatter `count` waypoints across the contiguous United States.
#[must_use]
pub fn random_waypoints(count: usize, seed: u64) -> Vec<Waypoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|index| {
            let location = Coord {
                x: rng.gen_range(-124.0..-67.0),
                y: rng.gen_range(25.0..49.0),
            };
            waypoint(
                &format!("Region {index}"),
                &format!("Place {index}"),
                location.y,
                location.x,
            )
        })
        .collect()
}

/// A [`Solver`] that always returns the same outcome, ignoring the search.
///
/// Useful for exercising pipeline code without running an engine.
#[derive(Debug, Clone)]
pub enum StubSolver {
    /// Visit stops in index order from start to end.
    InputOrder,
    /// Fail with the given error.
    Fail(SolveError),
}

impl Solver for StubSolver {
    fn solve(&self, request: &SolveRequest<'_>) -> Result<Solution, SolveError> {
        request.validate()?;
        match self {
            Self::InputOrder => {
                let mut stops = vec![request.start];
                stops.extend(request.intermediates());
                stops.push(request.end);
                let route: Route = request.route(stops).map_err(|_| SolveError::NoSolution)?;
                Ok(Solution::new(route, request.matrix, Default::default()))
            }
            Self::Fail(err) => Err(err.clone()),
        }
    }
}

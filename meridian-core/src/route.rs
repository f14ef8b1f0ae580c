//! Fixed-endpoint Hamiltonian paths.
//!
//! A [`Route`] can only be built when it is a complete open path: it starts at
//! the requested start, ends at the requested end and visits every waypoint
//! exactly once. Solvers hand back candidate orderings and the type checks them.

use thiserror::Error;

/// An ordered visit of every waypoint index, with both endpoints fixed.
///
/// # Examples
/// ```
/// use meridian_core::Route;
///
/// let route = Route::new(vec![0, 2, 1, 3], 0, 3, 4)?;
/// assert_eq!(route.stops(), &[0, 2, 1, 3]);
/// assert_eq!(route.start(), 0);
/// assert_eq!(route.end(), 3);
/// # Ok::<(), meridian_core::RouteError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<usize>,
}

/// Reasons a candidate ordering is not a valid [`Route`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The ordering does not have one entry per waypoint.
    #[error("route has {len} stops but {expected} waypoints must be visited")]
    WrongLength {
        /// Stops in the candidate ordering.
        len: usize,
        /// Waypoints in the problem.
        expected: usize,
    },
    /// The first stop is not the requested start.
    #[error("route must start at waypoint {expected}, starts at {found:?}")]
    WrongStart {
        /// Requested start index.
        expected: usize,
        /// First stop of the candidate, if any.
        found: Option<usize>,
    },
    /// The last stop is not the requested end.
    #[error("route must end at waypoint {expected}, ends at {found:?}")]
    WrongEnd {
        /// Requested end index.
        expected: usize,
        /// Last stop of the candidate, if any.
        found: Option<usize>,
    },
    /// A stop refers to a waypoint that does not exist.
    #[error("route stop {index} is outside the {size} known waypoints")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of waypoints.
        size: usize,
    },
    /// A waypoint is visited more than once.
    #[error("waypoint {index} is visited more than once")]
    Duplicate {
        /// The repeated index.
        index: usize,
    },
}

impl Route {
    /// Validates and constructs a [`Route`] over `size` waypoints.
    pub fn new(stops: Vec<usize>, start: usize, end: usize, size: usize) -> Result<Self, RouteError> {
        if stops.len() != size {
            return Err(RouteError::WrongLength {
                len: stops.len(),
                expected: size,
            });
        }
        let first = stops.first().copied();
        if first != Some(start) {
            return Err(RouteError::WrongStart {
                expected: start,
                found: first,
            });
        }
        let last = stops.last().copied();
        if last != Some(end) {
            return Err(RouteError::WrongEnd {
                expected: end,
                found: last,
            });
        }

        // With the length fixed at `size`, no duplicates and no out-of-range
        // entries together imply every index appears exactly once.
        let mut seen = vec![false; size];
        for &index in &stops {
            let slot = seen
                .get_mut(index)
                .ok_or(RouteError::OutOfRange { index, size })?;
            if *slot {
                return Err(RouteError::Duplicate { index });
            }
            *slot = true;
        }
        Ok(Self { stops })
    }

    /// Waypoint indices in visiting order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Index of the first stop.
    pub fn start(&self) -> usize {
        self.stops.first().copied().unwrap_or_default()
    }

    /// Index of the last stop.
    pub fn end(&self) -> usize {
        self.stops.last().copied().unwrap_or_default()
    }

    /// Number of stops, endpoints included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false` for a validated route; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Consumes the route, returning the stop indices.
    pub fn into_stops(self) -> Vec<usize> {
        self.stops
    }
}

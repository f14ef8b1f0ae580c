//! Named geographic stops.

use std::fmt;

use geo::Coord;
use thiserror::Error;

/// A named stop on the route.
///
/// Coordinates are stored as a `geo` [`Coord`] with `x` holding the longitude
/// and `y` the latitude, both in degrees.
///
/// # Examples
///
/// ```
/// use meridian_core::Waypoint;
///
/// # fn main() -> Result<(), meridian_core::WaypointError> {
/// let stop = Waypoint::new("Iowa", "Des Moines", 41.5908, -93.6091)?;
/// assert_eq!(stop.label(), "Des Moines (Iowa)");
/// assert_eq!(stop.latitude(), 41.5908);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Enclosing region, e.g. a state name.
    pub region_name: String,
    /// Place within the region, e.g. a capital city.
    pub place_name: String,
    /// Geospatial position (`x` = longitude, `y` = latitude).
    pub location: Coord<f64>,
}

/// Errors returned by [`Waypoint::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaypointError {
    /// Latitude or longitude was `NaN` or infinite.
    #[error("{field} must be a finite number of degrees, got {value}")]
    NonFiniteCoordinate {
        /// Which coordinate was rejected.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl Waypoint {
    /// Validates and constructs a [`Waypoint`].
    pub fn new(
        region_name: impl Into<String>,
        place_name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, WaypointError> {
        if !latitude.is_finite() {
            return Err(WaypointError::NonFiniteCoordinate {
                field: "latitude",
                value: latitude,
            });
        }
        if !longitude.is_finite() {
            return Err(WaypointError::NonFiniteCoordinate {
                field: "longitude",
                value: longitude,
            });
        }
        Ok(Self {
            region_name: region_name.into(),
            place_name: place_name.into(),
            location: Coord {
                x: longitude,
                y: latitude,
            },
        })
    }

    /// Latitude in degrees.
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Human-readable `place (region)` label.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.place_name, self.region_name)
    }
}

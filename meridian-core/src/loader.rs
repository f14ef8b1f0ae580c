//! Load ordered waypoints from JSON.
//!
//! The input is an array of records shaped like
//! `{ "state": "...", "capital": "...", "lat": 41.59, "long": -93.61 }`.
//! Coordinates may be JSON numbers or numeric strings. The first record is the
//! route's start and the last record its end.

use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::{Waypoint, WaypointError};

/// Smallest number of waypoints that forms a path.
pub const MIN_WAYPOINTS: usize = 2;

/// Errors returned while loading waypoints.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The JSON was malformed, a field was missing, or a field had the wrong type.
    #[error("malformed waypoint data: {0}")]
    Parse(#[source] serde_json::Error),
    /// A coordinate was not a finite number.
    #[error("waypoint {index} has invalid {field} {value:?}")]
    InvalidCoordinate {
        /// Position of the record in the input.
        index: usize,
        /// JSON field name (`lat` or `long`).
        field: &'static str,
        /// The value as written in the input.
        value: String,
    },
    /// Not enough records to form a path.
    #[error("at least {min} waypoints are required, got {count}", min = MIN_WAYPOINTS)]
    TooFewWaypoints {
        /// Records found.
        count: usize,
    },
}

impl LoadError {
    /// Returns `true` when the input itself is malformed, as opposed to being
    /// well-formed but unusable.
    pub const fn is_data_format(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::InvalidCoordinate { .. })
    }
}

#[derive(Debug, Deserialize)]
struct WaypointRecord {
    state: String,
    capital: String,
    lat: CoordinateValue,
    long: CoordinateValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue {
    fn degrees(&self, index: usize, field: &'static str) -> Result<f64, LoadError> {
        let parsed = match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        };
        parsed
            .filter(|value| value.is_finite())
            .ok_or_else(|| LoadError::InvalidCoordinate {
                index,
                field,
                value: self.as_written(),
            })
    }

    fn as_written(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl WaypointRecord {
    fn into_waypoint(self, index: usize) -> Result<Waypoint, LoadError> {
        let latitude = self.lat.degrees(index, "lat")?;
        let longitude = self.long.degrees(index, "long")?;
        Waypoint::new(self.state, self.capital, latitude, longitude).map_err(|err| match err {
            WaypointError::NonFiniteCoordinate { field, value } => LoadError::InvalidCoordinate {
                index,
                field: if field == "latitude" { "lat" } else { "long" },
                value: value.to_string(),
            },
        })
    }
}

/// Read waypoints from a JSON reader.
///
/// # Examples
///
/// ```
/// use meridian_core::load_waypoints;
///
/// let json = br#"[
///     { "state": "Iowa", "capital": "Des Moines", "lat": 41.5908, "long": -93.6091 },
///     { "state": "District of Columbia", "capital": "Washington", "lat": "38.9072", "long": "-77.0369" }
/// ]"#;
/// let waypoints = load_waypoints(&json[..])?;
/// assert_eq!(waypoints.len(), 2);
/// assert_eq!(waypoints[1].place_name, "Washington");
/// # Ok::<(), meridian_core::LoadError>(())
/// ```
pub fn load_waypoints<R: Read>(reader: R) -> Result<Vec<Waypoint>, LoadError> {
    let records: Vec<WaypointRecord> = serde_json::from_reader(reader).map_err(LoadError::Parse)?;
    into_waypoints(records)
}

/// Parse waypoints from a JSON string.
pub fn parse_waypoints(json: &str) -> Result<Vec<Waypoint>, LoadError> {
    let records: Vec<WaypointRecord> = serde_json::from_str(json).map_err(LoadError::Parse)?;
    into_waypoints(records)
}

fn into_waypoints(records: Vec<WaypointRecord>) -> Result<Vec<Waypoint>, LoadError> {
    let waypoints = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_waypoint(index))
        .collect::<Result<Vec<_>, _>>()?;
    if waypoints.len() < MIN_WAYPOINTS {
        return Err(LoadError::TooFewWaypoints {
            count: waypoints.len(),
        });
    }
    log::info!("loaded {} waypoints", waypoints.len());
    Ok(waypoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accepts_numbers_and_numeric_strings() {
        let json = r#"[
            { "state": "Iowa", "capital": "Des Moines", "lat": 41.5908, "long": "-93.6091" },
            { "state": "Ohio", "capital": "Columbus", "lat": " 39.9612 ", "long": -82.9988 }
        ]"#;
        let waypoints = parse_waypoints(json).expect("valid input");
        assert_eq!(waypoints.len(), 2);
        let first = waypoints.first().expect("first waypoint");
        assert_eq!(first.region_name, "Iowa");
        assert_eq!(first.longitude(), -93.6091);
        let last = waypoints.last().expect("last waypoint");
        assert_eq!(last.latitude(), 39.9612);
    }

    #[rstest]
    fn preserves_input_order() {
        let json = r#"[
            { "state": "C", "capital": "c", "lat": 3, "long": 3 },
            { "state": "A", "capital": "a", "lat": 1, "long": 1 },
            { "state": "B", "capital": "b", "lat": 2, "long": 2 }
        ]"#;
        let names: Vec<String> = parse_waypoints(json)
            .expect("valid input")
            .into_iter()
            .map(|w| w.place_name)
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[rstest]
    fn missing_lat_is_a_data_format_error() {
        let json = r#"[
            { "state": "Iowa", "capital": "Des Moines", "long": -93.6091 },
            { "state": "Ohio", "capital": "Columbus", "lat": 39.9612, "long": -82.9988 }
        ]"#;
        let err = parse_waypoints(json).expect_err("missing lat");
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.is_data_format());
        assert!(err.to_string().contains("lat"), "message was {err}");
    }

    #[rstest]
    #[case(r#""north""#, "north")]
    #[case(r#""""#, "")]
    #[case(r#""NaN""#, "NaN")]
    fn non_numeric_latitude_is_rejected(#[case] lat: &str, #[case] written: &str) {
        let json = format!(
            r#"[
                {{ "state": "Iowa", "capital": "Des Moines", "lat": 41.5, "long": -93.6 }},
                {{ "state": "Ohio", "capital": "Columbus", "lat": {lat}, "long": -82.9 }}
            ]"#
        );
        let err = parse_waypoints(&json).expect_err("non-numeric lat");
        match &err {
            LoadError::InvalidCoordinate {
                index,
                field,
                value,
            } => {
                assert_eq!(*index, 1);
                assert_eq!(*field, "lat");
                assert_eq!(value, written);
            }
            other => panic!("expected InvalidCoordinate, found {other:?}"),
        }
        assert!(err.is_data_format());
    }

    #[rstest]
    fn boolean_coordinate_is_a_parse_error() {
        let json = r#"[
            { "state": "Iowa", "capital": "Des Moines", "lat": true, "long": -93.6 },
            { "state": "Ohio", "capital": "Columbus", "lat": 39.9, "long": -82.9 }
        ]"#;
        let err = parse_waypoints(json).expect_err("boolean lat");
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[rstest]
    #[case("[]", 0)]
    #[case(r#"[{ "state": "Iowa", "capital": "Des Moines", "lat": 41.5, "long": -93.6 }]"#, 1)]
    fn fewer_than_two_waypoints_is_a_configuration_error(
        #[case] json: &str,
        #[case] expected: usize,
    ) {
        let err = parse_waypoints(json).expect_err("too few waypoints");
        match err {
            LoadError::TooFewWaypoints { count } => assert_eq!(count, expected),
            other => panic!("expected TooFewWaypoints, found {other:?}"),
        }
        assert!(!LoadError::TooFewWaypoints { count: expected }.is_data_format());
    }

    #[rstest]
    fn reader_and_string_entry_points_agree() {
        let json = r#"[
            { "state": "Iowa", "capital": "Des Moines", "lat": 41.5908, "long": -93.6091 },
            { "state": "Ohio", "capital": "Columbus", "lat": 39.9612, "long": -82.9988 }
        ]"#;
        let from_str = parse_waypoints(json).expect("valid input");
        let from_reader = load_waypoints(json.as_bytes()).expect("valid input");
        assert_eq!(from_str, from_reader);
    }
}

//! Dense pairwise distance matrices.
//!
//! A [`DistanceMatrix`] is the only view of the geography that solvers see:
//! entry `(i, j)` is the great-circle distance in kilometres from waypoint `i`
//! to waypoint `j`. Solvers receive it by shared reference and never mutate it.

use thiserror::Error;

use crate::{Waypoint, haversine_km};

/// Square matrix of non-negative, finite distances stored row-major.
///
/// # Examples
///
/// ```
/// use meridian_core::{DistanceMatrix, Waypoint};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let stops = vec![
///     Waypoint::new("Iowa", "Des Moines", 41.5908, -93.6091)?,
///     Waypoint::new("Illinois", "Springfield", 39.7817, -89.6501)?,
/// ];
/// let matrix = DistanceMatrix::from_waypoints(&stops);
/// assert_eq!(matrix.size(), 2);
/// assert_eq!(matrix.get(0, 0), 0.0);
/// assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Errors returned by [`DistanceMatrix::from_rows`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// A row length did not match the number of rows.
    #[error("row {row} has {len} columns but {expected} expected (matrix must be square)")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Columns found in that row.
        len: usize,
        /// Number of rows, and so the required column count.
        expected: usize,
    },
    /// An entry was negative, `NaN` or infinite.
    #[error("distance from {from} to {to} must be finite and non-negative, got {value}")]
    InvalidEntry {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// The rejected value.
        value: f64,
    },
}

impl DistanceMatrix {
    /// Builds the haversine matrix for `waypoints`.
    ///
    /// Only the upper triangle is computed; the lower triangle mirrors it so
    /// the result is exactly symmetric with a zero diagonal.
    #[must_use]
    pub fn from_waypoints(waypoints: &[Waypoint]) -> Self {
        let size = waypoints.len();
        let mut data = vec![0.0; size * size];
        for (i, from) in waypoints.iter().enumerate() {
            for (offset, to) in waypoints.iter().skip(i + 1).enumerate() {
                let j = i + 1 + offset;
                let km = haversine_km(from.location, to.location);
                if let Some(cell) = data.get_mut(i * size + j) {
                    *cell = km;
                }
                if let Some(cell) = data.get_mut(j * size + i) {
                    *cell = km;
                }
            }
        }
        log::debug!("built {size}x{size} haversine distance matrix");
        Self { data, size }
    }

    /// Builds a matrix from explicit rows, validating shape and entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use meridian_core::{DistanceMatrix, MatrixError};
    ///
    /// let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 5.0], vec![5.0, 0.0]]);
    /// assert!(matrix.is_ok());
    ///
    /// let err = DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![5.0, 0.0]]);
    /// assert!(matches!(err, Err(MatrixError::InvalidEntry { from: 0, to: 1, .. })));
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::NotSquare {
                    row: from,
                    len: row.len(),
                    expected: size,
                });
            }
            for (to, value) in row.into_iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(MatrixError::InvalidEntry { from, to, value });
                }
                data.push(value);
            }
        }
        Ok(Self { data, size })
    }

    /// Number of waypoints covered by the matrix.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` when the matrix covers no waypoints.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distance from `from` to `to`, or `None` when either index is out of range.
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.data.get(from * self.size + to).copied()
    }

    /// Distance from `from` to `to`.
    ///
    /// Out-of-range lookups are a caller bug: they trip a debug assertion and
    /// yield `f64::INFINITY` in release builds so no search can prefer them.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        let value = self.distance(from, to);
        debug_assert!(
            value.is_some(),
            "matrix lookup out of range: from={from}, to={to}, size={}",
            self.size
        );
        value.unwrap_or(f64::INFINITY)
    }

    /// Sum of consecutive distances along `stops`.
    ///
    /// Empty and single-stop paths have length zero.
    pub fn path_length(&self, stops: &[usize]) -> f64 {
        stops
            .windows(2)
            .map(|pair| match pair {
                [from, to] => self.get(*from, *to),
                _ => 0.0,
            })
            .sum()
    }

    /// Returns `true` if `(i, j)` and `(j, i)` agree within `tolerance`.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
        })
    }
}

//! Great-circle distances on a spherical Earth.

use geo::Coord;

/// Mean Earth radius used for every distance in the engine, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two coordinates, in kilometres.
///
/// Coordinates follow the `geo` convention: `x` is longitude and `y` is
/// latitude, both in degrees. The intermediate term is clamped to `[0, 1]` so
/// identical and antipodal points never produce `NaN`.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use meridian_core::haversine_km;
///
/// let des_moines = Coord { x: -93.6091, y: 41.5908 };
/// assert_eq!(haversine_km(des_moines, des_moines), 0.0);
///
/// let washington = Coord { x: -77.0369, y: 38.9072 };
/// let km = haversine_km(des_moines, washington);
/// assert!((km - 1_435.0).abs() < 5.0);
/// ```
#[must_use]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lon = (to.x - from.x).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::f64::consts::PI;

    #[rstest]
    #[case(Coord { x: 0.0, y: 0.0 })]
    #[case(Coord { x: -93.6091, y: 41.5908 })]
    #[case(Coord { x: 180.0, y: -90.0 })]
    fn identical_points_are_zero(#[case] point: Coord<f64>) {
        assert_eq!(haversine_km(point, point), 0.0);
    }

    #[rstest]
    #[case(Coord { x: 0.0, y: 0.0 }, Coord { x: 180.0, y: 0.0 })]
    #[case(Coord { x: 0.0, y: 90.0 }, Coord { x: 0.0, y: -90.0 })]
    #[case(Coord { x: 45.0, y: 30.0 }, Coord { x: -135.0, y: -30.0 })]
    fn antipodal_points_span_half_the_circumference(
        #[case] from: Coord<f64>,
        #[case] to: Coord<f64>,
    ) {
        let km = haversine_km(from, to);
        assert!(km.is_finite());
        assert!((km - PI * EARTH_RADIUS_KM).abs() < 1e-3, "got {km}");
    }

    #[rstest]
    fn one_degree_of_latitude_is_about_111_km() {
        let km = haversine_km(Coord { x: 10.0, y: 0.0 }, Coord { x: 10.0, y: 1.0 });
        assert!((km - 111.19).abs() < 0.01, "got {km}");
    }

    #[rstest]
    fn known_city_pair() {
        // Sacramento to Carson City, roughly 162 km apart.
        let sacramento = Coord { x: -121.4944, y: 38.5816 };
        let carson_city = Coord { x: -119.7674, y: 39.1638 };
        let km = haversine_km(sacramento, carson_city);
        assert!((km - 162.0).abs() < 5.0, "got {km}");
    }
}

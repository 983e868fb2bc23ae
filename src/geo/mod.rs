use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Multiplier applied to the straight-line distance to approximate road travel.
pub const ROAD_FACTOR: f64 = 1.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let sin_lat = (delta_lat / 2.0).sin();
    let sin_lng = (delta_lng / 2.0).sin();

    // Rounding can push near-antipodal pairs just past 1.0.
    let haversine =
        (sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
    let central_angle = 2.0 * haversine.sqrt().atan2((1.0 - haversine).sqrt());

    EARTH_RADIUS_KM * central_angle
}

/// Approximate road distance in whole kilometers, for display only.
///
/// Coordinates are not range-checked. Garbage in yields a meaningless number
/// (NaN saturates to 0) rather than a panic.
pub fn estimate_road_km(from: &GeoPoint, to: &GeoPoint) -> u32 {
    (haversine_km(from, to) * ROAD_FACTOR).round() as u32
}

#[cfg(test)]
mod tests {
    use super::{estimate_road_km, haversine_km, GeoPoint};

    const ALGIERS: GeoPoint = GeoPoint::new(36.7538, 3.0588);
    const ORAN: GeoPoint = GeoPoint::new(35.6969, -0.6331);
    const CONSTANTINE: GeoPoint = GeoPoint::new(36.3650, 6.6147);

    #[test]
    fn zero_distance_for_same_point() {
        assert!(haversine_km(&ALGIERS, &ALGIERS) < 1e-9);
        assert_eq!(estimate_road_km(&ALGIERS, &ALGIERS), 0);
        assert_eq!(estimate_road_km(&ORAN, &ORAN), 0);
    }

    #[test]
    fn algiers_to_constantine_road_estimate() {
        let straight = haversine_km(&ALGIERS, &CONSTANTINE);
        assert!((straight - 320.5).abs() < 1.0);
        assert_eq!(estimate_road_km(&ALGIERS, &CONSTANTINE), 401);
    }

    #[test]
    fn near_antipodal_points_are_half_the_globe_apart() {
        let a = GeoPoint::new(-87.843, -176.7731);
        let b = GeoPoint::new(87.843, 3.2269);
        let straight = haversine_km(&a, &b);
        assert!(straight > 20_000.0, "{straight}");
        assert!(estimate_road_km(&a, &b) > 20_000);

        for step in 0..200 {
            let lat = -89.0 + f64::from(step) * 0.89;
            let lng = -179.0 + f64::from(step) * 0.9;
            let p = GeoPoint::new(lat, lng);
            let antipode_lng = if lng > 0.0 { lng - 180.0 } else { lng + 180.0 };
            let q = GeoPoint::new(-lat, antipode_lng);
            assert!(estimate_road_km(&p, &q) > 20_000, "{lat} {lng}");
        }
    }

    #[test]
    fn algiers_to_oran_road_estimate() {
        let straight = haversine_km(&ALGIERS, &ORAN);
        assert!((straight - 351.4).abs() < 1.0);
        assert_eq!(estimate_road_km(&ALGIERS, &ORAN), 439);
    }

    #[test]
    fn road_estimate_is_symmetric() {
        assert_eq!(
            estimate_road_km(&ALGIERS, &CONSTANTINE),
            estimate_road_km(&CONSTANTINE, &ALGIERS)
        );
        assert_eq!(
            estimate_road_km(&ORAN, &CONSTANTINE),
            estimate_road_km(&CONSTANTINE, &ORAN)
        );
    }

    #[test]
    fn factor_is_applied_before_rounding() {
        // 47.125 km on the road; rounding the straight line first gives 47.5 -> 48.
        let blida = GeoPoint::new(36.4700, 2.8277);
        assert_eq!(estimate_road_km(&ALGIERS, &blida), 47);
    }

    #[test]
    fn malformed_coordinates_do_not_panic() {
        let nan = GeoPoint::new(f64::NAN, 3.0);
        assert_eq!(estimate_road_km(&nan, &ALGIERS), 0);

        let out_of_range = GeoPoint::new(400.0, -720.0);
        let _ = estimate_road_km(&out_of_range, &ORAN);
    }
}

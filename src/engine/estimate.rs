use tracing::debug;

use crate::engine::eta::{ClockTime, EtaProjector, ARRIVAL_PLACEHOLDER};
use crate::error::AppError;
use crate::geo::{estimate_road_km, GeoPoint};
use crate::models::trip::{PublishEstimate, TripPreview};
use crate::models::wilaya;

pub fn preview(
    projector: &EtaProjector,
    from: Option<&GeoPoint>,
    to: Option<&GeoPoint>,
    departure_time: Option<&str>,
) -> TripPreview {
    let distance_km = match (from, to) {
        (Some(from), Some(to)) => Some(estimate_road_km(from, to)),
        _ => None,
    };

    let duration = distance_km.map(|km| projector.travel_time(f64::from(km)));
    let arrival = projector
        .project(distance_km.map(f64::from), departure_time)
        .map(|eta| eta.arrival.to_string())
        .unwrap_or_else(|| ARRIVAL_PLACEHOLDER.to_string());

    TripPreview {
        distance_km,
        duration,
        duration_label: duration.map(|d| d.to_string()),
        arrival,
    }
}

pub fn publish(
    projector: &EtaProjector,
    origin_code: u8,
    destination_code: u8,
    departure_time: &str,
) -> Result<PublishEstimate, AppError> {
    let origin = wilaya::by_code(origin_code)
        .ok_or_else(|| AppError::NotFound(format!("wilaya {origin_code} not found")))?;
    let destination = wilaya::by_code(destination_code)
        .ok_or_else(|| AppError::NotFound(format!("wilaya {destination_code} not found")))?;

    if origin.code == destination.code {
        return Err(AppError::BadRequest(
            "origin and destination must differ".to_string(),
        ));
    }

    let departure = ClockTime::parse(departure_time).ok_or_else(|| {
        AppError::BadRequest(format!("invalid departure time: {departure_time}"))
    })?;

    let distance_km = estimate_road_km(&origin.centroid, &destination.centroid);
    let eta = projector.project_from(f64::from(distance_km), departure);

    debug!(
        origin = origin.name,
        destination = destination.name,
        distance_km,
        duration = %eta.duration,
        "publish estimate computed"
    );

    Ok(PublishEstimate {
        origin_wilaya: origin.code,
        destination_wilaya: destination.code,
        departure_time: departure.to_string(),
        distance_km,
        duration_minutes: eta.duration.total_minutes(),
        arrival_time: eta.arrival.to_string(),
    })
}

use serde::{Deserialize, Serialize};

use crate::engine::eta::TripDuration;
use crate::geo::GeoPoint;

/// What the map preview overlay card shows. Endpoints may still be unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPreview {
    pub distance_km: Option<u32>,
    pub duration: Option<TripDuration>,
    pub duration_label: Option<String>,
    pub arrival: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewRequest {
    pub from: Option<GeoPoint>,
    pub to: Option<GeoPoint>,
    pub departure_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    pub origin_wilaya: u8,
    pub destination_wilaya: u8,
    pub departure_time: String,
}

/// Derived fields the publishing wizard attaches to the trip-creation payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishEstimate {
    pub origin_wilaya: u8,
    pub destination_wilaya: u8,
    pub departure_time: String,
    pub distance_km: u32,
    pub duration_minutes: u32,
    pub arrival_time: String,
}

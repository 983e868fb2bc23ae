use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use tracing::{info, warn};

use crate::engine::estimate;
use crate::engine::eta::ARRIVAL_PLACEHOLDER;
use crate::error::AppError;
use crate::models::trip::{PreviewRequest, PublishEstimate, PublishRequest, TripPreview};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/estimates/preview", post(preview_trip))
        .route("/estimates/publish", post(publish_trip))
}

async fn preview_trip(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PreviewRequest>,
) -> Json<TripPreview> {
    let card = estimate::preview(
        &state.projector,
        payload.from.as_ref(),
        payload.to.as_ref(),
        payload.departure_time.as_deref(),
    );

    state.metrics.record_estimate("preview", true);
    if card.arrival == ARRIVAL_PLACEHOLDER {
        state.metrics.placeholder_arrivals_total.inc();
    }

    Json(card)
}

async fn publish_trip(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PublishRequest>,
) -> Result<Json<PublishEstimate>, AppError> {
    let result = estimate::publish(
        &state.projector,
        payload.origin_wilaya,
        payload.destination_wilaya,
        &payload.departure_time,
    );
    state.metrics.record_estimate("publish", result.is_ok());

    match result {
        Ok(estimate) => {
            info!(
                origin = estimate.origin_wilaya,
                destination = estimate.destination_wilaya,
                distance_km = estimate.distance_km,
                duration_minutes = estimate.duration_minutes,
                "trip publish estimate"
            );
            Ok(Json(estimate))
        }
        Err(err) => {
            warn!(error = %err, "trip publish estimate rejected");
            Err(err)
        }
    }
}

use std::sync::Arc;

use axum::extract::Path;
use axum::routing::get;
use axum::Json;
use axum::Router;

use crate::error::AppError;
use crate::models::wilaya::{self, Wilaya};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wilayas", get(list_wilayas))
        .route("/wilayas/:code", get(get_wilaya))
}

async fn list_wilayas() -> Json<&'static [Wilaya]> {
    Json(wilaya::all())
}

async fn get_wilaya(Path(code): Path<u8>) -> Result<Json<&'static Wilaya>, AppError> {
    wilaya::by_code(code)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("wilaya {code} not found")))
}

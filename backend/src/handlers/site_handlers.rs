use std::sync::Arc;
use axum::{extract::State, Json};

use crate::{
    handlers::api_error::ApiError,
    handlers::site_dtos::{HealthResponse, ServiceResponse, TestimonialResponse},
    AppState,
};

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "Astro Consulting API is running".to_string(),
    })
}

pub async fn get_services(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ServiceResponse>>, ApiError> {
    let services = state
        .site_repository
        .list_services()?
        .into_iter()
        .map(ServiceResponse::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(services))
}

pub async fn get_testimonials(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TestimonialResponse>>, ApiError> {
    let testimonials = state
        .site_repository
        .list_testimonials()?
        .into_iter()
        .map(TestimonialResponse::from)
        .collect();

    Ok(Json(testimonials))
}

use std::sync::Arc;
use axum::{extract::State, Json};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::{
    handlers::api_error::ApiError,
    handlers::site_dtos::{ConsultationRequestPayload, ContactPayload, SubmissionResponse},
    models::site_models::{NewConsultationRequest, NewContactMessage},
    AppState,
};

pub const CONSULTATION_SUCCESS_MESSAGE: &str =
    "Заявка успешно отправлена! Я свяжусь с вами в ближайшее время.";
pub const CONTACT_SUCCESS_MESSAGE: &str = "Сообщение отправлено! Отвечу вам в течение 24 часов.";

pub async fn create_consultation_request(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ConsultationRequestPayload>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let payload = payload.normalized();
    payload.check()?;

    if !state.site_repository.service_exists(&payload.service_id)? {
        return Err(ApiError::unprocessable("Unknown service"));
    }

    let new_request = NewConsultationRequest {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        service_id: payload.service_id,
        message: payload.message,
        preferred_date: payload.preferred_date,
        status: "pending".to_string(),
        created_at: Utc::now().to_rfc3339(),
    };

    let created = state.lead_repository.create_consultation_request(new_request)?;
    info!("New consultation request {} for service {}", created.id, created.service_id);

    Ok(Json(SubmissionResponse {
        success: true,
        id: created.id,
        message: CONSULTATION_SUCCESS_MESSAGE.to_string(),
    }))
}

pub async fn create_contact_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    let payload = payload.normalized();
    payload.check()?;

    let new_message = NewContactMessage {
        id: Uuid::new_v4().to_string(),
        name: payload.name,
        email: payload.email,
        subject: payload.subject,
        message: payload.message,
        status: "new".to_string(),
        created_at: Utc::now().to_rfc3339(),
    };

    let created = state.lead_repository.create_contact_message(new_message)?;
    info!("New contact message {}", created.id);

    Ok(Json(SubmissionResponse {
        success: true,
        id: created.id,
        message: CONTACT_SUCCESS_MESSAGE.to_string(),
    }))
}

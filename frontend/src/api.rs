use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::config;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub price: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub date: String,
    pub rating: i32,
    pub text: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String,
    pub message: String,
    pub preferred_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<T>().await?)
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&config::api_url(path)).send().await?;
    read_json(response).await
}

async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<SubmitResponse, ApiError> {
    let response = Request::post(&config::api_url(path))
        .json(body)?
        .send()
        .await?;
    read_json(response).await
}

pub async fn fetch_services() -> Result<Vec<Service>, ApiError> {
    get_json("/api/services").await
}

pub async fn fetch_testimonials() -> Result<Vec<Testimonial>, ApiError> {
    get_json("/api/testimonials").await
}

/// Issues both GETs at once. If either fails, nothing is returned.
pub async fn load_site_data() -> Result<(Vec<Service>, Vec<Testimonial>), ApiError> {
    futures::future::try_join(fetch_services(), fetch_testimonials()).await
}

pub async fn submit_consultation(request: &ConsultationRequest) -> Result<SubmitResponse, ApiError> {
    post_json("/api/consultation-request", request).await
}

pub async fn submit_contact(message: &ContactMessage) -> Result<SubmitResponse, ApiError> {
    post_json("/api/contact", message).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn service_decodes_backend_payload() {
        let service: Service = serde_json::from_value(json!({
            "id": "svc-1",
            "title": "Анализ натальной карты",
            "description": "Детальный разбор",
            "price": "3 500 ₽",
            "duration": "60 минут",
            "features": ["Полный анализ планет", "Рекомендации"]
        }))
        .unwrap();
        assert_eq!(service.features, vec!["Полный анализ планет", "Рекомендации"]);
    }

    #[test]
    fn testimonial_without_avatar_decodes() {
        let testimonial: Testimonial = serde_json::from_value(json!({
            "id": "t-1",
            "name": "Анна М.",
            "text": "Спасибо!",
            "rating": 5,
            "date": "15 февраля 2024"
        }))
        .unwrap();
        assert_eq!(testimonial.rating, 5);
        assert_eq!(testimonial.avatar_url, None);
    }

    #[test]
    fn submit_response_only_needs_message() {
        let response: SubmitResponse =
            serde_json::from_value(json!({ "message": "ok" })).unwrap();
        assert_eq!(response.message, "ok");

        let full: SubmitResponse = serde_json::from_value(json!({
            "success": true,
            "id": "req-1",
            "message": "Заявка успешно отправлена!"
        }))
        .unwrap();
        assert_eq!(full.message, "Заявка успешно отправлена!");
    }
}

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::handlers::api_error::ApiError;
use crate::models::site_models::{Service, Testimonial};
use crate::repositories::error::RepositoryError;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub duration: String,
    pub features: Vec<String>,
}

impl TryFrom<Service> for ServiceResponse {
    type Error = RepositoryError;

    fn try_from(row: Service) -> Result<Self, Self::Error> {
        let features: Vec<String> = serde_json::from_str(&row.features)?;
        Ok(Self {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            duration: row.duration,
            features,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TestimonialResponse {
    pub id: String,
    pub name: String,
    pub text: String,
    pub rating: i32,
    pub date: String,
    pub avatar_url: Option<String>,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(row: Testimonial) -> Self {
        Self {
            id: row.id,
            name: row.name,
            text: row.text,
            rating: row.rating,
            date: row.date,
            avatar_url: row.avatar_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ConsultationRequestPayload {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone cannot be empty"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Service cannot be empty"))]
    pub service_id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<String>,
}

impl ConsultationRequestPayload {
    /// Trims every field and turns blank optional fields into `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service_id: self.service_id.trim().to_string(),
            message: non_blank(self.message),
            preferred_date: non_blank(self.preferred_date),
        }
    }

    pub fn check(&self) -> Result<(), ApiError> {
        <Self as Validate>::validate(self).map_err(validation_error)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ContactPayload {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Subject cannot be empty"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message cannot be empty"))]
    pub message: String,
}

impl ContactPayload {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn check(&self) -> Result<(), ApiError> {
        <Self as Validate>::validate(self).map_err(validation_error)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    pub id: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validation_error(errors: ValidationErrors) -> ApiError {
    let mut fields: Vec<String> = errors.errors().keys().map(|k| k.to_string()).collect();
    fields.sort();
    ApiError::unprocessable(format!("Invalid fields: {}", fields.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consultation(email: &str) -> ConsultationRequestPayload {
        ConsultationRequestPayload {
            name: "  Мария ".into(),
            email: email.into(),
            phone: "+7 900 000-00-00".into(),
            service_id: "svc-1".into(),
            message: Some("   ".into()),
            preferred_date: Some(" 2024-09-01 ".into()),
        }
    }

    #[test]
    fn normalizing_trims_and_drops_blank_optionals() {
        let payload = consultation("maria@example.com").normalized();
        assert_eq!(payload.name, "Мария");
        assert_eq!(payload.message, None);
        assert_eq!(payload.preferred_date.as_deref(), Some("2024-09-01"));
        assert!(payload.check().is_ok());
    }

    #[test]
    fn rejects_bad_email_and_blank_fields() {
        let mut payload = consultation("not-an-email").normalized();
        payload.phone = String::new();

        let err = payload.check().unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "Invalid fields: email, phone");
    }

    #[test]
    fn whitespace_only_contact_fields_are_rejected() {
        let payload = ContactPayload {
            name: "Игорь".into(),
            email: "igor@example.com".into(),
            subject: "   ".into(),
            message: "Здравствуйте".into(),
        }
        .normalized();

        let err = payload.check().unwrap_err();
        assert_eq!(err.message, "Invalid fields: subject");
    }

    #[test]
    fn service_row_decodes_features() {
        let row = Service {
            id: "svc-1".into(),
            title: "Анализ натальной карты".into(),
            description: "Детальный разбор".into(),
            price: "3 500 ₽".into(),
            duration: "60 минут".into(),
            features: r#"["Полный анализ планет","Письменный отчет"]"#.into(),
            position: 1,
        };
        let response = ServiceResponse::try_from(row).unwrap();
        assert_eq!(response.features, vec!["Полный анализ планет", "Письменный отчет"]);
    }

    #[test]
    fn malformed_features_column_is_an_error() {
        let row = Service {
            id: "svc-1".into(),
            title: "x".into(),
            description: "x".into(),
            price: "x".into(),
            duration: "x".into(),
            features: "not json".into(),
            position: 0,
        };
        assert!(matches!(ServiceResponse::try_from(row), Err(RepositoryError::Features(_))));
    }
}

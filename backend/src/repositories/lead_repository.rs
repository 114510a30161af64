use diesel::prelude::*;
use crate::{
    models::site_models::{
        ConsultationRequest, ContactMessage, NewConsultationRequest, NewContactMessage,
    },
    repositories::error::RepositoryError,
    schema::{consultation_requests, contact_messages},
    DbPool,
};

/// Write side of the site: consultation requests and contact messages.
pub struct LeadRepository {
    pool: DbPool
}

impl LeadRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn create_consultation_request(
        &self,
        new_request: NewConsultationRequest,
    ) -> Result<ConsultationRequest, RepositoryError> {
        let mut conn = self.pool.get()?;

        diesel::insert_into(consultation_requests::table)
            .values(&new_request)
            .execute(&mut conn)?;

        let created = consultation_requests::table
            .find(new_request.id.as_str())
            .select(ConsultationRequest::as_select())
            .first(&mut conn)?;
        Ok(created)
    }

    pub fn create_contact_message(
        &self,
        new_message: NewContactMessage,
    ) -> Result<ContactMessage, RepositoryError> {
        let mut conn = self.pool.get()?;

        diesel::insert_into(contact_messages::table)
            .values(&new_message)
            .execute(&mut conn)?;

        let created = contact_messages::table
            .find(new_message.id.as_str())
            .select(ContactMessage::as_select())
            .first(&mut conn)?;
        Ok(created)
    }

    #[cfg(test)]
    pub fn count_consultation_requests(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(consultation_requests::table.count().get_result(&mut conn)?)
    }

    #[cfg(test)]
    pub fn count_contact_messages(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.get()?;
        Ok(contact_messages::table.count().get_result(&mut conn)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn new_request(id: &str) -> NewConsultationRequest {
        NewConsultationRequest {
            id: id.to_string(),
            name: "Мария".into(),
            email: "maria@example.com".into(),
            phone: "+7 900 000-00-00".into(),
            service_id: "svc-1".into(),
            message: None,
            preferred_date: Some("2024-09-01".into()),
            status: "pending".into(),
            created_at: "2024-08-01T10:00:00+00:00".into(),
        }
    }

    #[test]
    fn stores_and_returns_consultation_request() {
        let repo = LeadRepository::new(test_pool());

        let created = repo.create_consultation_request(new_request("req-1")).unwrap();
        assert_eq!(created.id, "req-1");
        assert_eq!(created.status, "pending");
        assert_eq!(created.message, None);
        assert_eq!(created.preferred_date.as_deref(), Some("2024-09-01"));
        assert_eq!(repo.count_consultation_requests().unwrap(), 1);
    }

    #[test]
    fn duplicate_id_is_a_database_error() {
        let repo = LeadRepository::new(test_pool());
        repo.create_consultation_request(new_request("req-1")).unwrap();

        let err = repo.create_consultation_request(new_request("req-1")).unwrap_err();
        assert!(matches!(err, RepositoryError::Database(_)));
        assert_eq!(repo.count_consultation_requests().unwrap(), 1);
    }

    #[test]
    fn stores_contact_message() {
        let repo = LeadRepository::new(test_pool());

        let created = repo
            .create_contact_message(NewContactMessage {
                id: "msg-1".into(),
                name: "Игорь".into(),
                email: "igor@example.com".into(),
                subject: "Вопрос".into(),
                message: "Здравствуйте!".into(),
                status: "new".into(),
                created_at: "2024-08-01T10:00:00+00:00".into(),
            })
            .unwrap();

        assert_eq!(created.subject, "Вопрос");
        assert_eq!(created.status, "new");
        assert_eq!(repo.count_contact_messages().unwrap(), 1);
        assert_eq!(repo.count_consultation_requests().unwrap(), 0);
    }
}

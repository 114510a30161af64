use diesel::prelude::*;
use uuid::Uuid;
use crate::{
    config::seed_data::{SAMPLE_SERVICES, SAMPLE_TESTIMONIALS},
    models::site_models::{Service, Testimonial},
    repositories::error::RepositoryError,
    schema::{services, testimonials},
    DbPool,
};

/// Read side of the site content: services and testimonials.
pub struct SiteRepository {
    pool: DbPool
}

impl SiteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn list_services(&self) -> Result<Vec<Service>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows = services::table
            .order((services::position.asc(), services::title.asc()))
            .select(Service::as_select())
            .load(&mut conn)?;
        Ok(rows)
    }

    pub fn list_testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let rows = testimonials::table
            .order((testimonials::position.asc(), testimonials::name.asc()))
            .select(Testimonial::as_select())
            .load(&mut conn)?;
        Ok(rows)
    }

    pub fn service_exists(&self, service_id: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get()?;
        let found = services::table
            .find(service_id)
            .select(services::id)
            .first::<String>(&mut conn)
            .optional()?;
        Ok(found.is_some())
    }

    #[cfg(test)]
    pub fn insert_service(&self, service: &Service) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get()?;
        diesel::insert_into(services::table)
            .values(service)
            .execute(&mut conn)?;
        Ok(())
    }

    // Fills each table with the sample content, but only if that table is empty.
    // Returns how many (services, testimonials) were inserted.
    // Takes the write lock up front since it counts before inserting.
    pub fn seed_sample_data(&self) -> Result<(usize, usize), RepositoryError> {
        let mut conn = self.pool.get()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let mut inserted_services = 0;
            let services_count: i64 = services::table.count().get_result(conn)?;
            if services_count == 0 {
                for (position, sample) in SAMPLE_SERVICES.iter().enumerate() {
                    let row = Service {
                        id: Uuid::new_v4().to_string(),
                        title: sample.title.to_string(),
                        description: sample.description.to_string(),
                        price: sample.price.to_string(),
                        duration: sample.duration.to_string(),
                        features: serde_json::to_string(sample.features)?,
                        position: position as i32,
                    };
                    diesel::insert_into(services::table)
                        .values(&row)
                        .execute(conn)?;
                    inserted_services += 1;
                }
            }

            let mut inserted_testimonials = 0;
            let testimonials_count: i64 = testimonials::table.count().get_result(conn)?;
            if testimonials_count == 0 {
                for (position, sample) in SAMPLE_TESTIMONIALS.iter().enumerate() {
                    let row = Testimonial {
                        id: Uuid::new_v4().to_string(),
                        name: sample.name.to_string(),
                        text: sample.text.to_string(),
                        rating: sample.rating,
                        date: sample.date.to_string(),
                        avatar_url: None,
                        position: position as i32,
                    };
                    diesel::insert_into(testimonials::table)
                        .values(&row)
                        .execute(conn)?;
                    inserted_testimonials += 1;
                }
            }

            Ok((inserted_services, inserted_testimonials))
        })
    }
}

use diesel::prelude::*;
use crate::schema::services;
use crate::schema::testimonials;
use crate::schema::consultation_requests;
use crate::schema::contact_messages;


#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = services)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Service {
    pub id: String, // uuid v4
    pub title: String,
    pub description: String,
    pub price: String, // display string, e.g. "5 000 ₽"
    pub duration: String, // display string, e.g. "90 минут"
    pub features: String, // json array of strings
    pub position: i32, // display order on the page
}

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = testimonials)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub text: String,
    pub rating: i32, // number of stars shown
    pub date: String, // human readable, not parsed
    pub avatar_url: Option<String>,
    pub position: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = consultation_requests)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ConsultationRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String, // references services.id
    pub message: Option<String>,
    pub preferred_date: Option<String>,
    pub status: String, // "pending" until the consultant follows up
    pub created_at: String, // rfc3339
}

#[derive(Insertable)]
#[diesel(table_name = consultation_requests)]
pub struct NewConsultationRequest {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String,
    pub message: Option<String>,
    pub preferred_date: Option<String>,
    pub status: String,
    pub created_at: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = contact_messages)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String, // "new" until read
    pub created_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = contact_messages)]
pub struct NewContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub created_at: String,
}

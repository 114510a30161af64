use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::api::{ConsultationRequest, ContactMessage, Service, Testimonial};

pub const CONSULTATION_ERROR: &str = "Произошла ошибка при отправке заявки. Попробуйте снова.";
pub const CONTACT_ERROR: &str = "Произошла ошибка при отправке сообщения. Попробуйте снова.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsultationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_id: String,
    pub message: String,
    pub preferred_date: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConsultationField {
    Name,
    Email,
    Phone,
    Message,
    PreferredDate,
}

impl ConsultationForm {
    pub fn set(&mut self, field: ConsultationField, value: String) {
        match field {
            ConsultationField::Name => self.name = value,
            ConsultationField::Email => self.email = value,
            ConsultationField::Phone => self.phone = value,
            ConsultationField::Message => self.message = value,
            ConsultationField::PreferredDate => self.preferred_date = value,
        }
    }

    pub fn to_request(&self) -> ConsultationRequest {
        ConsultationRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            service_id: self.service_id.clone(),
            message: self.message.clone(),
            preferred_date: self.preferred_date.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// Everything the landing page keeps between renders.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteState {
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub is_loading: bool,
    pub consultation_form: ConsultationForm,
    pub contact_form: ContactForm,
    pub show_consultation_form: bool,
    pub selected_service: Option<Service>,
    pub is_submitting: bool, // shared by both forms
    pub submit_message: Option<String>,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            services: Vec::new(),
            testimonials: Vec::new(),
            is_loading: true,
            consultation_form: ConsultationForm::default(),
            contact_form: ContactForm::default(),
            show_consultation_form: false,
            selected_service: None,
            is_submitting: false,
            submit_message: None,
        }
    }
}

impl SiteState {
    /// The modal is rendered only when it is open and has a service to book.
    pub fn modal_service(&self) -> Option<&Service> {
        if self.show_consultation_form {
            self.selected_service.as_ref()
        } else {
            None
        }
    }
}

pub enum SiteAction {
    Loaded {
        services: Vec<Service>,
        testimonials: Vec<Testimonial>,
    },
    LoadFailed,
    OpenConsultation(Service),
    CloseConsultation,
    UpdateConsultation(ConsultationField, String),
    UpdateContact(ContactField, String),
    SubmitStarted,
    ConsultationSent(String),
    ConsultationFailed,
    ContactSent(String),
    ContactFailed,
    DismissMessage,
}

impl Reducible for SiteState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            SiteAction::Loaded { services, testimonials } => {
                next.services = services;
                next.testimonials = testimonials;
                next.is_loading = false;
            }
            SiteAction::LoadFailed => {
                next.is_loading = false;
            }
            SiteAction::OpenConsultation(service) => {
                next.consultation_form.service_id = service.id.clone();
                next.selected_service = Some(service);
                next.show_consultation_form = true;
            }
            SiteAction::CloseConsultation => {
                next.show_consultation_form = false;
                next.selected_service = None;
            }
            SiteAction::UpdateConsultation(field, value) => {
                next.consultation_form.set(field, value);
            }
            SiteAction::UpdateContact(field, value) => {
                next.contact_form.set(field, value);
            }
            SiteAction::SubmitStarted => {
                if self.is_submitting {
                    return self;
                }
                next.is_submitting = true;
                next.submit_message = None;
            }
            SiteAction::ConsultationSent(message) => {
                next.submit_message = Some(message);
                next.consultation_form = ConsultationForm::default();
                next.show_consultation_form = false;
                next.selected_service = None;
                next.is_submitting = false;
            }
            SiteAction::ConsultationFailed => {
                next.submit_message = Some(CONSULTATION_ERROR.to_string());
                next.is_submitting = false;
            }
            SiteAction::ContactSent(message) => {
                next.submit_message = Some(message);
                next.contact_form = ContactForm::default();
                next.is_submitting = false;
            }
            SiteAction::ContactFailed => {
                next.submit_message = Some(CONTACT_ERROR.to_string());
                next.is_submitting = false;
            }
            SiteAction::DismissMessage => {
                next.submit_message = None;
            }
        }

        Rc::new(next)
    }
}

/// In-flight flag for form submissions, shared by both forms.
///
/// Reducer updates land on the next render, so two submits fired before it
/// would both see `is_submitting == false`. The gate flips synchronously.
#[derive(Clone, Debug, Default)]
pub struct SubmitGate(Rc<Cell<bool>>);

impl SubmitGate {
    /// Returns `true` only for the caller that opened the gate.
    pub fn try_begin(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn finish(&self) {
        self.0.set(false);
    }
}

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_console::error;
use log::info;

use crate::api;
use crate::api::Service;
use crate::components::{
    about::AboutSection,
    consultation_modal::ConsultationModal,
    contact::ContactSection,
    footer::SiteFooter,
    hero::Hero,
    notification::Notification,
    services::ServicesSection,
    site_header::SiteHeader,
    testimonials::TestimonialsSection,
};
use crate::state::{ConsultationField, ContactField, SiteAction, SiteState, SubmitGate};

const SITE_STYLES: &str = r#"
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #1F2937;
        background: #FEFEF8;
    }
    .gradient-bg {
        background: linear-gradient(135deg, #FDF8E7 0%, #F3F0FF 50%, #FDF8E7 100%);
    }
    .text-gradient {
        background: linear-gradient(45deg, #7C3AED, #B3935A);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .section {
        padding: 5rem 0;
    }
    .section-white {
        background: #fff;
    }
    .section-title {
        font-family: Georgia, serif;
        font-size: clamp(1.875rem, 4vw, 2.25rem);
        font-weight: bold;
        text-align: center;
        color: #1F2937;
        margin-bottom: 1rem;
    }
    .section-title-left {
        text-align: left;
    }
    .section-lead {
        font-size: 1.25rem;
        text-align: center;
        color: #4B5563;
        max-width: 48rem;
        margin: 0 auto 3rem;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
        gap: 2rem;
    }
    .card {
        background: #fff;
        border: 1px solid #F0ECD0;
        border-radius: 0.75rem;
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.05);
        padding: 1.5rem;
        transition: transform 0.2s, box-shadow 0.2s;
    }
    .card:hover {
        transform: translateY(-2px);
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .card-title {
        font-family: Georgia, serif;
        font-size: 1.25rem;
        font-weight: 600;
        color: #1F2937;
        margin-bottom: 1rem;
    }
    .card-text {
        color: #4B5563;
        line-height: 1.6;
        margin-bottom: 1rem;
    }
    .btn-primary, .btn-secondary {
        display: inline-block;
        border-radius: 0.5rem;
        padding: 0.75rem 1.5rem;
        font-weight: 600;
        text-decoration: none;
        cursor: pointer;
        transition: background 0.2s;
    }
    .btn-primary {
        background: #7C3AED;
        color: #fff;
        border: none;
    }
    .btn-primary:hover {
        background: #6D28D9;
    }
    .btn-primary:disabled {
        opacity: 0.5;
        cursor: not-allowed;
    }
    .btn-secondary {
        background: #fff;
        color: #6D28D9;
        border: 2px solid #C4B0D6;
    }
    .btn-large {
        font-size: 1.125rem;
        padding: 1rem 2rem;
    }
    .btn-block {
        width: 100%;
    }
    .form-field {
        margin-bottom: 1rem;
    }
    .form-field label {
        display: block;
        font-size: 0.875rem;
        font-weight: 600;
        color: #374151;
        margin-bottom: 0.5rem;
    }
    .form-field input, .form-field textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        border: 1px solid #F0ECD0;
        border-radius: 0.5rem;
        font: inherit;
    }
    .form-field input:focus, .form-field textarea:focus {
        outline: 2px solid #C4B0D6;
        border-color: transparent;
    }
    .form-field textarea {
        resize: vertical;
    }
    .skip-link {
        position: absolute;
        left: -9999px;
    }
    .skip-link:focus {
        left: 1rem;
        top: 1rem;
        z-index: 100;
        background: #fff;
        padding: 0.5rem 1rem;
    }
    .loading-screen {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .loading-spinner {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        border-bottom: 2px solid #7C3AED;
        margin: 0 auto 1rem;
        animation: spin 1s linear infinite;
    }
    .loading-screen p {
        color: #6D28D9;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes slideUp {
        from { transform: translateY(20px); opacity: 0; }
        to { transform: translateY(0); opacity: 1; }
    }
    .animate-fade-in {
        animation: fadeIn 0.8s ease-out;
    }
    .animate-slide-up {
        animation: slideUp 0.6s ease-out both;
    }
    @media print {
        .no-print {
            display: none;
        }
    }
"#;

#[function_component]
pub fn Home() -> Html {
    let state = use_reducer(SiteState::default);
    let submit_gate = (*use_memo(|_| SubmitGate::default(), ())).clone();

    // Fetch services and testimonials once on mount
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::load_site_data().await {
                        Ok((services, testimonials)) => {
                            info!("Loaded {} services and {} testimonials", services.len(), testimonials.len());
                            state.dispatch(SiteAction::Loaded { services, testimonials });
                        }
                        Err(e) => {
                            error!(format!("Ошибка при загрузке данных: {}", e));
                            state.dispatch(SiteAction::LoadFailed);
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_book = {
        let state = state.clone();
        Callback::from(move |service: Service| state.dispatch(SiteAction::OpenConsultation(service)))
    };

    let on_close_consultation = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(SiteAction::CloseConsultation))
    };

    let on_consultation_change = {
        let state = state.clone();
        Callback::from(move |(field, value): (ConsultationField, String)| {
            state.dispatch(SiteAction::UpdateConsultation(field, value))
        })
    };

    let on_contact_change = {
        let state = state.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            state.dispatch(SiteAction::UpdateContact(field, value))
        })
    };

    let on_consultation_submit = {
        let state = state.clone();
        let submit_gate = submit_gate.clone();
        Callback::from(move |_| {
            if !submit_gate.try_begin() {
                return;
            }
            let request = state.consultation_form.to_request();
            state.dispatch(SiteAction::SubmitStarted);

            let state = state.clone();
            let submit_gate = submit_gate.clone();
            spawn_local(async move {
                match api::submit_consultation(&request).await {
                    Ok(response) => state.dispatch(SiteAction::ConsultationSent(response.message)),
                    Err(e) => {
                        error!(format!("Consultation request failed: {}", e));
                        state.dispatch(SiteAction::ConsultationFailed);
                    }
                }
                submit_gate.finish();
            });
        })
    };

    let on_contact_submit = {
        let state = state.clone();
        let submit_gate = submit_gate.clone();
        Callback::from(move |_| {
            if !submit_gate.try_begin() {
                return;
            }
            let message = state.contact_form.to_message();
            state.dispatch(SiteAction::SubmitStarted);

            let state = state.clone();
            let submit_gate = submit_gate.clone();
            spawn_local(async move {
                match api::submit_contact(&message).await {
                    Ok(response) => state.dispatch(SiteAction::ContactSent(response.message)),
                    Err(e) => {
                        error!(format!("Contact message failed: {}", e));
                        state.dispatch(SiteAction::ContactFailed);
                    }
                }
                submit_gate.finish();
            });
        })
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(SiteAction::DismissMessage))
    };

    if state.is_loading {
        return html! {
            <div class="loading-screen gradient-bg">
                <style>{SITE_STYLES}</style>
                <div>
                    <div class="loading-spinner"></div>
                    <p>{"Загрузка..."}</p>
                </div>
            </div>
        };
    }

    html! {
        <div class="app">
            <style>{SITE_STYLES}</style>
            <a href="#main-content" class="skip-link">{"Перейти к основному содержимому"}</a>
            <SiteHeader />
            <main id="main-content">
                <Hero />
                <ServicesSection services={state.services.clone()} on_book={on_book} />
                <AboutSection />
                <TestimonialsSection testimonials={state.testimonials.clone()} />
                <ContactSection
                    form={state.contact_form.clone()}
                    is_submitting={state.is_submitting}
                    on_change={on_contact_change}
                    on_submit={on_contact_submit}
                />
            </main>
            <SiteFooter />
            {
                if let Some(service) = state.modal_service() {
                    html! {
                        <ConsultationModal
                            service={service.clone()}
                            form={state.consultation_form.clone()}
                            is_submitting={state.is_submitting}
                            on_change={on_consultation_change}
                            on_submit={on_consultation_submit}
                            on_close={on_close_consultation}
                        />
                    }
                } else {
                    html! {}
                }
            }
            {
                if let Some(message) = state.submit_message.clone() {
                    html! { <Notification message={message} on_dismiss={on_dismiss} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

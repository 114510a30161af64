use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::api::Service;
use crate::state::{ConsultationField, ConsultationForm};

#[derive(Properties, PartialEq)]
pub struct ConsultationModalProps {
    pub service: Service,
    pub form: ConsultationForm,
    pub is_submitting: bool,
    pub on_change: Callback<(ConsultationField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(ConsultationModal)]
pub fn consultation_modal(props: &ConsultationModalProps) -> Html {
    let input_handler = |field: ConsultationField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    // type=date fires change rather than input in some browsers
    let on_date_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((ConsultationField::PreferredDate, input.value()));
        })
    };

    let on_message_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit((ConsultationField::Message, area.value()));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true" aria-labelledby="consultation-title">
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        z-index: 50;
                    }
                    .modal {
                        background: #fff;
                        border-radius: 0.75rem;
                        max-width: 28rem;
                        width: 100%;
                        max-height: 100vh;
                        overflow-y: auto;
                        padding: 1.5rem;
                    }
                    .modal-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 1.5rem;
                    }
                    .modal-header h3 {
                        font-family: Georgia, serif;
                        font-size: 1.25rem;
                        font-weight: 600;
                        color: #1F2937;
                        margin: 0;
                    }
                    .modal-close {
                        background: none;
                        border: none;
                        font-size: 1.25rem;
                        color: #6B7280;
                        cursor: pointer;
                    }
                    .modal-close:hover {
                        color: #374151;
                    }
                "#}
            </style>
            <div class="modal">
                <div class="modal-header">
                    <h3 id="consultation-title">{format!("Записаться на \"{}\"", props.service.title)}</h3>
                    <button class="modal-close" onclick={on_close} aria-label="Закрыть форму">{"✕"}</button>
                </div>
                <form {onsubmit}>
                    <div class="form-field">
                        <label for="cons-name">{"Ваше имя"}</label>
                        <input
                            type="text"
                            id="cons-name"
                            value={props.form.name.clone()}
                            oninput={input_handler(ConsultationField::Name)}
                            required=true
                        />
                    </div>
                    <div class="form-field">
                        <label for="cons-email">{"Email"}</label>
                        <input
                            type="email"
                            id="cons-email"
                            value={props.form.email.clone()}
                            oninput={input_handler(ConsultationField::Email)}
                            required=true
                        />
                    </div>
                    <div class="form-field">
                        <label for="cons-phone">{"Телефон"}</label>
                        <input
                            type="tel"
                            id="cons-phone"
                            value={props.form.phone.clone()}
                            oninput={input_handler(ConsultationField::Phone)}
                            required=true
                        />
                    </div>
                    <div class="form-field">
                        <label for="cons-date">{"Предпочтительная дата"}</label>
                        <input
                            type="date"
                            id="cons-date"
                            value={props.form.preferred_date.clone()}
                            oninput={input_handler(ConsultationField::PreferredDate)}
                            onchange={on_date_change}
                        />
                    </div>
                    <div class="form-field">
                        <label for="cons-message">{"Дополнительная информация"}</label>
                        <textarea
                            id="cons-message"
                            rows="3"
                            value={props.form.message.clone()}
                            oninput={on_message_input}
                            placeholder="Расскажите о ваших вопросах или пожеланиях..."
                        />
                    </div>
                    <button type="submit" class="btn-primary btn-block" disabled={props.is_submitting}>
                        { if props.is_submitting { "Отправляю..." } else { "Отправить заявку" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

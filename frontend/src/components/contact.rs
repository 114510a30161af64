use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::config;
use crate::state::{ContactField, ContactForm};

const FAQ: &[(&str, &str)] = &[
    (
        "Как проходит консультация?",
        "Консультация проходит онлайн в удобное для вас время. Для астрологического анализа мне потребуются ваши точные данные рождения: дата, время и место.",
    ),
    (
        "Что нужно подготовить?",
        "Подготовьте ваши точные данные рождения и список вопросов, которые вас беспокоят. Это поможет максимально эффективно использовать время консультации.",
    ),
    (
        "Можно ли записаться на повторную консультацию?",
        "Конечно! Многие клиенты приходят на повторные сессии для углубления работы или при изменении жизненных обстоятельств.",
    ),
];

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub form: ContactForm,
    pub is_submitting: bool,
    pub on_change: Callback<(ContactField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let input_handler = |field: ContactField| {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    let on_message_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit((ContactField::Message, area.value()));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let telegram_username = config::get_telegram_username();

    html! {
        <section id="contact" class="section gradient-bg">
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .contact-methods > div {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                        color: #374151;
                    }
                    .contact-methods a {
                        color: #7C3AED;
                    }
                    .faq-list details {
                        background: rgba(255, 255, 255, 0.5);
                        border-radius: 0.5rem;
                        padding: 1rem;
                        margin-bottom: 1rem;
                    }
                    .faq-list summary {
                        font-weight: 600;
                        color: #374151;
                        cursor: pointer;
                    }
                    .faq-list p {
                        margin-top: 0.75rem;
                        color: #4B5563;
                        line-height: 1.6;
                    }
                    @media (max-width: 1024px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title">{"Связаться со мной"}</h2>
                <p class="section-lead">
                    {"Готова ответить на ваши вопросы и помочь найти путь к гармонии"}
                </p>
                <div class="contact-grid">
                    <div>
                        <h3 class="card-title">{"Способы связи"}</h3>
                        <div class="contact-methods">
                            <div><span>{"📞"}</span><span>{"+7 (999) 123-45-67"}</span></div>
                            <div><span>{"✉️"}</span><span>{"elena@astro-psychology.ru"}</span></div>
                            <div>
                                <span>{"💬"}</span>
                                <a href={config::telegram_link()} target="_blank" rel="noopener noreferrer">
                                    {format!("@{}", telegram_username)}
                                </a>
                            </div>
                        </div>

                        <h3 class="card-title">{"Частые вопросы"}</h3>
                        <div class="faq-list">
                            { for FAQ.iter().map(|(question, answer)| html! {
                                <details>
                                    <summary>{*question}</summary>
                                    <p>{*answer}</p>
                                </details>
                            }) }
                        </div>
                    </div>

                    <div>
                        <form class="card" {onsubmit}>
                            <h3 class="card-title">{"Написать мне"}</h3>
                            <div class="form-field">
                                <label for="contact-name">{"Ваше имя"}</label>
                                <input
                                    type="text"
                                    id="contact-name"
                                    value={props.form.name.clone()}
                                    oninput={input_handler(ContactField::Name)}
                                    required=true
                                />
                            </div>
                            <div class="form-field">
                                <label for="contact-email">{"Email"}</label>
                                <input
                                    type="email"
                                    id="contact-email"
                                    value={props.form.email.clone()}
                                    oninput={input_handler(ContactField::Email)}
                                    required=true
                                />
                            </div>
                            <div class="form-field">
                                <label for="contact-subject">{"Тема"}</label>
                                <input
                                    type="text"
                                    id="contact-subject"
                                    value={props.form.subject.clone()}
                                    oninput={input_handler(ContactField::Subject)}
                                    required=true
                                />
                            </div>
                            <div class="form-field">
                                <label for="contact-message">{"Сообщение"}</label>
                                <textarea
                                    id="contact-message"
                                    rows="4"
                                    value={props.form.message.clone()}
                                    oninput={on_message_input}
                                    required=true
                                />
                            </div>
                            <button type="submit" class="btn-primary btn-block" disabled={props.is_submitting}>
                                { if props.is_submitting { "Отправляю..." } else { "Отправить сообщение" } }
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

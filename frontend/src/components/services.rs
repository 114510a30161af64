use yew::prelude::*;

use crate::api::Service;

#[derive(Properties, PartialEq)]
pub struct ServicesSectionProps {
    pub services: Vec<Service>,
    pub on_book: Callback<Service>,
}

#[function_component(ServicesSection)]
pub fn services_section(props: &ServicesSectionProps) -> Html {
    html! {
        <section id="services" class="section section-white">
            <style>
                {r#"
                    .service-meta {
                        margin-bottom: 1.5rem;
                    }
                    .service-duration {
                        font-size: 0.875rem;
                        color: #6B7280;
                        margin-bottom: 0.5rem;
                    }
                    .service-price {
                        font-size: 1.5rem;
                        font-weight: bold;
                        color: #7C3AED;
                    }
                    .service-features h4 {
                        font-weight: 600;
                        color: #374151;
                        margin-bottom: 0.5rem;
                    }
                    .service-features ul {
                        list-style: none;
                        padding: 0;
                        margin: 0 0 1.5rem;
                    }
                    .service-features li {
                        display: flex;
                        align-items: flex-start;
                        font-size: 0.875rem;
                        color: #4B5563;
                        margin-bottom: 0.25rem;
                    }
                    .service-features li::before {
                        content: '✓';
                        color: #22C55E;
                        margin-right: 0.5rem;
                        flex-shrink: 0;
                    }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title">{"Мои услуги"}</h2>
                <p class="section-lead">
                    {"Персональные консультации, которые помогают найти ответы на важные вопросы и направить жизнь в желаемое русло"}
                </p>
                <div class="card-grid">
                    { for props.services.iter().enumerate().map(|(index, service)| {
                        let on_click = {
                            let on_book = props.on_book.clone();
                            let service = service.clone();
                            Callback::from(move |_: MouseEvent| on_book.emit(service.clone()))
                        };
                        html! {
                            <div
                                key={service.id.clone()}
                                class="card animate-slide-up"
                                style={format!("animation-delay: {:.1}s", index as f32 * 0.1)}
                            >
                                <h3 class="card-title">{&service.title}</h3>
                                <p class="card-text">{&service.description}</p>
                                <div class="service-meta">
                                    <div class="service-duration">{format!("🕒 {}", service.duration)}</div>
                                    <div class="service-price">{&service.price}</div>
                                </div>
                                <div class="service-features">
                                    <h4>{"Что включено:"}</h4>
                                    <ul>
                                        { for service.features.iter().map(|feature| html! {
                                            <li><span>{feature}</span></li>
                                        }) }
                                    </ul>
                                </div>
                                <button
                                    class="btn-primary btn-block"
                                    onclick={on_click}
                                    aria-label={format!("Записаться на {}", service.title)}
                                >
                                    {"Записаться"}
                                </button>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

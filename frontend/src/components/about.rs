use yew::prelude::*;

const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1506126613408-eca07ce68773?crop=entropy&cs=srgb&fm=jpg&ixlib=rb-4.1.0&q=85";

const HIGHLIGHTS: &[&str] = &["8+ лет практики", "500+ консультаций", "Сертифицированный психолог"];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="section gradient-bg">
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .about-text p {
                        color: #374151;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .about-text p.lead {
                        font-size: 1.125rem;
                    }
                    .about-highlights {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        padding-top: 1rem;
                    }
                    .about-highlights span {
                        background: rgba(255, 255, 255, 0.5);
                        border-radius: 0.5rem;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #6D28D9;
                    }
                    .about-image {
                        width: 100%;
                        border-radius: 0.75rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    @media (max-width: 1024px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="about-grid">
                    <div class="about-text animate-fade-in">
                        <h2 class="section-title section-title-left">{"Обо мне"}</h2>
                        <p class="lead">
                            {"Меня зовут Елена, и уже более 8 лет я помогаю людям находить ответы на самые важные вопросы жизни через синтез астрологии и психологии."}
                        </p>
                        <p>
                            {"Мой подход основан на глубоком понимании того, что каждый человек уникален, и его путь трансформации также индивидуален. Я использую натальную карту как карту души, которая показывает ваши сильные стороны, скрытые таланты и жизненные задачи."}
                        </p>
                        <p>
                            {"В работе я сочетаю классическую астрологию с современными психологическими подходами, что позволяет не просто предсказывать события, а давать практические инструменты для личностного роста и гармонизации жизни."}
                        </p>
                        <div class="about-highlights">
                            { for HIGHLIGHTS.iter().map(|item| html! { <span>{*item}</span> }) }
                        </div>
                    </div>
                    <div class="animate-slide-up">
                        <img
                            class="about-image"
                            src={ABOUT_IMAGE}
                            alt="Женщина в состоянии медитации, символизирующая духовную практику и самопознание"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::config;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1444703686981-a3abbc4d4fe3?crop=entropy&cs=srgb&fm=jpg&ixlib=rb-4.1.0&q=85";

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero gradient-bg">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        text-align: center;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.3;
                    }
                    .hero-content {
                        position: relative;
                        padding: 0 1rem;
                        animation: fadeIn 0.8s ease-out;
                    }
                    .hero h1 {
                        font-family: Georgia, serif;
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        color: #1F2937;
                        margin-bottom: 1.5rem;
                    }
                    .hero h1 span {
                        display: block;
                        font-size: clamp(1.5rem, 3vw, 1.875rem);
                        font-weight: 500;
                        color: #6D28D9;
                        margin-top: 0.5rem;
                    }
                    .hero p {
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        color: #374151;
                        max-width: 56rem;
                        margin: 0 auto 2rem;
                        line-height: 1.6;
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                    }
                "#}
            </style>
            <div class="hero-background">
                <img
                    src={HERO_IMAGE}
                    alt="Силуэт человека под звездным небом, символизирующий связь с космосом и духовное руководство"
                />
            </div>
            <div class="hero-content">
                <h1>
                    {"Елена Звездная"}
                    <span>{"Астролог-психолог трансформаций"}</span>
                </h1>
                <p>
                    {"Глубокие консультации, которые помогают понять себя, тело и чувства — и изменить жизнь к лучшему"}
                </p>
                <div class="hero-actions">
                    <a
                        href="#services"
                        class="btn-primary btn-large no-print"
                        aria-label="Перейти к услугам и записаться на консультацию"
                    >
                        {"Начать путь трансформации"}
                    </a>
                    <a
                        href={config::telegram_link()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn-secondary btn-large no-print"
                        aria-label="Написать в Telegram для быстрой связи"
                    >
                        {"💬 Написать в Telegram"}
                    </a>
                </div>
            </div>
        </section>
    }
}

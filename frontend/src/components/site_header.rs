use yew::prelude::*;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#services", "Услуги"),
    ("#about", "Обо мне"),
    ("#testimonials", "Отзывы"),
    ("#contact", "Контакты"),
];

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    html! {
        <header class="site-header">
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .site-header nav {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .site-logo {
                        font-family: Georgia, serif;
                        font-size: 1.25rem;
                        font-weight: bold;
                    }
                    .site-nav-links a {
                        margin-left: 1.5rem;
                        color: #374151;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .site-nav-links a:hover {
                        color: #8B5CF6;
                    }
                    @media (max-width: 768px) {
                        .site-nav-links {
                            display: none;
                        }
                    }
                "#}
            </style>
            <nav role="navigation" aria-label="Главная навигация">
                <div class="site-logo text-gradient">{"Астролог-психолог"}</div>
                <div class="site-nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href}>{*label}</a>
                    }) }
                </div>
            </nav>
        </header>
    }
}

use yew::prelude::*;

use crate::components::site_header::NAV_LINKS;

#[function_component(SiteFooter)]
pub fn site_footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #1F2937;
                        color: #fff;
                        padding: 3rem 1rem;
                        text-align: center;
                    }
                    .site-footer h3 {
                        font-family: Georgia, serif;
                        font-size: 1.5rem;
                        margin-bottom: 0.5rem;
                    }
                    .site-footer p {
                        color: #D1D5DB;
                    }
                    .footer-links {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin: 1.5rem 0;
                    }
                    .footer-links a {
                        color: #D1D5DB;
                        text-decoration: none;
                    }
                    .footer-links a:hover {
                        color: #fff;
                    }
                    .footer-bottom {
                        border-top: 1px solid #374151;
                        padding-top: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .footer-bottom p {
                        color: #9CA3AF;
                    }
                "#}
            </style>
            <div>
                <h3 class="text-gradient">{"Елена Звездная"}</h3>
                <p>{"Астролог-психолог трансформаций"}</p>
            </div>
            <div class="footer-links">
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <a href={*href}>{*label}</a>
                }) }
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 Елена Звездная. Все права защищены."}</p>
            </div>
        </footer>
    }
}

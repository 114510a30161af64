use yew::prelude::*;

use crate::api::Testimonial;

pub const MAX_STARS: i32 = 5;

pub fn star_count(rating: i32) -> usize {
    rating.clamp(0, MAX_STARS) as usize
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsSectionProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section(props: &TestimonialsSectionProps) -> Html {
    html! {
        <section id="testimonials" class="section section-white">
            <style>
                {r#"
                    .stars {
                        color: #EAB308;
                        font-size: 1.25rem;
                        margin-bottom: 1rem;
                        letter-spacing: 0.1rem;
                    }
                    .testimonial-text {
                        color: #374151;
                        font-style: italic;
                        line-height: 1.6;
                        margin: 0 0 1rem;
                    }
                    .testimonial-footer {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .testimonial-avatar {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: #DDD6FE;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #6D28D9;
                        font-weight: bold;
                        object-fit: cover;
                    }
                    .testimonial-name {
                        font-weight: 600;
                        color: #1F2937;
                    }
                    .testimonial-date {
                        font-size: 0.875rem;
                        color: #6B7280;
                    }
                    .testimonial-heart {
                        color: #EC4899;
                        font-size: 1.5rem;
                    }
                "#}
            </style>
            <div class="container">
                <h2 class="section-title">{"Отзывы клиентов"}</h2>
                <p class="section-lead">
                    {"Реальные истории трансформации от тех, кто уже прошёл этот путь"}
                </p>
                <div class="card-grid">
                    { for props.testimonials.iter().enumerate().map(|(index, testimonial)| {
                        let avatar = match &testimonial.avatar_url {
                            Some(url) => html! {
                                <img class="testimonial-avatar" src={url.clone()} alt={testimonial.name.clone()} />
                            },
                            None => html! {
                                <div class="testimonial-avatar">
                                    { testimonial.name.chars().next().map(|c| c.to_string()).unwrap_or_default() }
                                </div>
                            },
                        };
                        html! {
                            <div
                                key={testimonial.id.clone()}
                                class="card animate-slide-up"
                                style={format!("animation-delay: {:.1}s", index as f32 * 0.1)}
                            >
                                <div class="stars" aria-label={format!("Оценка: {} из {}", star_count(testimonial.rating), MAX_STARS)}>
                                    { for (0..star_count(testimonial.rating)).map(|_| html! { <span>{"★"}</span> }) }
                                </div>
                                <blockquote class="testimonial-text">
                                    {format!("\"{}\"", testimonial.text)}
                                </blockquote>
                                <footer class="testimonial-footer">
                                    <div class="testimonial-author">
                                        {avatar}
                                        <div>
                                            <div class="testimonial-name">{&testimonial.name}</div>
                                            <div class="testimonial-date">{&testimonial.date}</div>
                                        </div>
                                    </div>
                                    <span class="testimonial-heart">{"♥"}</span>
                                </footer>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_count_follows_rating() {
        assert_eq!(star_count(4), 4);
        assert_eq!(star_count(5), 5);
    }

    #[test]
    fn star_count_is_clamped() {
        assert_eq!(star_count(-2), 0);
        assert_eq!(star_count(12), 5);
    }
}

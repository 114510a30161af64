// Sample content inserted into an empty database on startup.

pub struct SampleService {
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
    pub features: &'static [&'static str],
}

pub struct SampleTestimonial {
    pub name: &'static str,
    pub text: &'static str,
    pub rating: i32,
    pub date: &'static str,
}

pub const SAMPLE_SERVICES: &[SampleService] = &[
    SampleService {
        title: "Психоастрологическая консультация",
        description: "Глубокий анализ личности через призму астрологии и психологии. Поможет понять ваши сильные стороны, скрытые таланты и жизненные задачи.",
        price: "5 000 ₽",
        duration: "90 минут",
        features: &["Анализ натальной карты", "Психологический портрет", "Рекомендации по развитию", "Запись сессии"],
    },
    SampleService {
        title: "Анализ натальной карты",
        description: "Детальный разбор вашей натальной карты с акцентом на ключевые аспекты личности, кармические задачи и потенциал развития.",
        price: "3 500 ₽",
        duration: "60 минут",
        features: &["Полный анализ планет", "Аспекты и конфигурации", "Письменный отчет", "Рекомендации"],
    },
    SampleService {
        title: "Консультация по отношениям",
        description: "Астропсихологический анализ совместимости и динамики отношений. Поможет понять партнера и гармонизировать отношения.",
        price: "4 500 ₽",
        duration: "75 минут",
        features: &["Синастрический анализ", "Композитная карта", "Советы по взаимодействию", "Прогноз развития"],
    },
    SampleService {
        title: "Трансформационная сессия",
        description: "Глубокая работа с текущими жизненными вызовами через интеграцию астрологических инсайтов и психологических практик.",
        price: "6 000 ₽",
        duration: "120 минут",
        features: &["Диагностика блоков", "Трансформационные техники", "Персональные практики", "План развития"],
    },
    SampleService {
        title: "Карьерное ориентирование",
        description: "Определение профессионального призвания и карьерного пути через астрологический анализ талантов и предрасположенностей.",
        price: "4 000 ₽",
        duration: "60 минут",
        features: &["Анализ призвания", "Профессиональные рекомендации", "Благоприятные периоды", "Стратегия развития"],
    },
];

pub const SAMPLE_TESTIMONIALS: &[SampleTestimonial] = &[
    SampleTestimonial {
        name: "Анна М.",
        text: "Консультация помогла мне понять глубинные причины моих реакций и найти внутренние ресурсы для изменений. Очень благодарна за такой деликатный и профессиональный подход!",
        rating: 5,
        date: "15 февраля 2024",
    },
    SampleTestimonial {
        name: "Дмитрий К.",
        text: "Никогда не верил в астрологию, но решил попробовать в сложный период. Был поражен точностью анализа и практичностью рекомендаций. Многое стало на свои места.",
        rating: 5,
        date: "28 января 2024",
    },
    SampleTestimonial {
        name: "Елена С.",
        text: "Консультация по отношениям буквально спасла мой брак. Поняла, как лучше взаимодействовать с мужем, учитывая наши астрологические особенности. Рекомендую всем!",
        rating: 5,
        date: "10 марта 2024",
    },
];

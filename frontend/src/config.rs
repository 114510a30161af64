const DEFAULT_TELEGRAM_USERNAME: &str = "your_bot_username";

// BACKEND_URL set at build time wins over the per-profile default
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("http://localhost:8001")  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")  // Same origin in production
}

pub fn get_telegram_username() -> &'static str {
    option_env!("TELEGRAM_BOT_USERNAME")
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_TELEGRAM_USERNAME)
}

pub fn telegram_link() -> String {
    format!("https://t.me/{}", get_telegram_username())
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", get_backend_url().trim_end_matches('/'), path)
}

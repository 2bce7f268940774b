use log::Level;

pub const HOME_SECTION: &str = "home";

/// Sections in page order as (id, nav label).
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("about", "About Us"),
    ("insights", "Industry Insights"),
    ("contact", "Contact"),
];

/// Share of an element that must be on screen before it fades in.
pub const FADE_IN_THRESHOLD: f64 = 0.1;

const INSIGHTS_MODEL_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

pub fn get_insights_endpoint() -> &'static str {
    INSIGHTS_MODEL_URL
}

/// Injected at build time; empty when the hosting page supplies the key.
pub fn api_key() -> &'static str {
    option_env!("GEMINI_API_KEY").unwrap_or("")
}

pub fn insights_url(key: &str) -> String {
    format!("{}?key={}", get_insights_endpoint(), urlencoding::encode(key))
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

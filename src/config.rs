use dotenvy::dotenv;
use std::env;

/// Default backend address (the uvicorn dev server).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            api_base_url: env::var("HRMS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

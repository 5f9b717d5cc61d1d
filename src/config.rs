use crate::error::DashResult;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use toml;

/// Default backend base URL for local development
pub const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:5000";

/// Path of the calendar events endpoint on the backend
pub const EVENTS_ENDPOINT_PATH: &str = "/api/calendar-events";

/// Path of the organisation logo asset on the backend
pub const LOGO_ASSET_PATH: &str = "/Assets/disaster_logo.png";

/// Main configuration structure for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend serving the calendar API and static assets
    pub backend_base_url: String,
    /// Map of component names to their enabled status
    pub components: HashMap<String, bool>,
    /// Timezone used when formatting event timestamps
    pub timezone: String,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> DashResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        // Backend base URL, defaulting to the local development server
        let backend_base_url = env::var("BACKEND_BASE_URL")
            .unwrap_or_else(|_| String::from(DEFAULT_BACKEND_BASE_URL));

        // Default timezone
        let timezone = env::var("TIMEZONE").unwrap_or_else(|_| String::from("UTC"));

        // Initialize default components
        let mut components = HashMap::new();
        components.insert("certificate".to_string(), true);
        components.insert("event_dialogs".to_string(), true);

        // Load components configuration from file if it exists
        if let Ok(content) = fs::read_to_string("config/components.toml") {
            if let Ok(file_components) = toml::from_str::<HashMap<String, bool>>(&content) {
                // Merge with defaults
                for (key, value) in file_components {
                    components.insert(key, value);
                }
            }
        }

        Ok(Config {
            backend_base_url,
            components,
            timezone,
        })
    }

    /// Full URL of the calendar events endpoint
    pub fn events_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.backend_base_url.trim_end_matches('/'),
            EVENTS_ENDPOINT_PATH
        )
    }

    /// Full URL of the organisation logo asset
    pub fn logo_url(&self) -> String {
        format!(
            "{}{}",
            self.backend_base_url.trim_end_matches('/'),
            LOGO_ASSET_PATH
        )
    }

    /// Check if a component is enabled
    pub fn is_component_enabled(&self, name: &str) -> bool {
        *self.components.get(name).unwrap_or(&false)
    }
}

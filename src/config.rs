//! Runtime configuration for the roster server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Greeting shown on the landing page.
    pub greeting: String,
}

impl Settings {
    fn from_env() -> Self {
        let greeting =
            env::var("GREETING").unwrap_or_else(|_| "Hello from the roster server".into());

        Settings { greeting }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}

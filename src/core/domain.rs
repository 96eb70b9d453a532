use std::time::Duration;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOGGLE_DELAY_MS: u64 = 200;
pub const TOGGLE_DELAY_ENV: &str = "CATALOG_TOGGLE_DELAY_MS";
pub const STRICT_FAVORITES_ENV: &str = "CATALOG_STRICT_FAVORITES";

// Configuration abstracts config options for the catalog store
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub store_name: String,
    // simulated round-trip before a favorite change is applied
    pub toggle_delay_ms: u64,
    // reject favorites for ids missing from the catalog
    pub strict_favorites: bool,
}

impl Configuration {
    pub fn new(store_name: &str) -> Self {
        Configuration {
            store_name: store_name.to_string(),
            toggle_delay_ms: DEFAULT_TOGGLE_DELAY_MS,
            strict_favorites: false,
        }
    }

    pub fn from_env(store_name: &str) -> Self {
        let toggle_delay = std::env::var(TOGGLE_DELAY_ENV).ok();
        let strict = std::env::var(STRICT_FAVORITES_ENV).ok();
        Configuration::new(store_name).with_overrides(toggle_delay.as_deref(), strict.as_deref())
    }

    // applies raw override values; an unparsable delay keeps the current one
    pub fn with_overrides(mut self, toggle_delay: Option<&str>, strict: Option<&str>) -> Self {
        if let Some(delay) = toggle_delay {
            match delay.trim().parse::<u64>() {
                Ok(ms) => self.toggle_delay_ms = ms,
                Err(err) => tracing::warn!(value = %delay, error = %err, "ignoring invalid {}", TOGGLE_DELAY_ENV),
            }
        }
        if let Some(strict) = strict {
            self.strict_favorites = matches!(strict.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }
        self
    }

    pub fn with_toggle_delay(mut self, delay: Duration) -> Self {
        self.toggle_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_strict_favorites(mut self, strict: bool) -> Self {
        self.strict_favorites = strict;
        self
    }

    pub fn toggle_delay(&self) -> Duration {
        Duration::from_millis(self.toggle_delay_ms)
    }
}

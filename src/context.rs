//! Application Context
//!
//! Shared values provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::UiConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<UiConfig>,
    /// Whether the viewport matches the mobile media query
    pub is_mobile: Signal<bool>,
}

impl AppContext {
    pub fn new(config: UiConfig, is_mobile: Signal<bool>) -> Self {
        Self {
            config: StoredValue::new(config),
            is_mobile,
        }
    }

    pub fn config(&self) -> UiConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

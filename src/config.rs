//! UI Configuration
//!
//! Defaults are compiled in. A page may override any of them with a JSON
//! block: `<script id="lms-config" type="application/json">{...}</script>`.

use leptos_flow::{FlowOptions, NodeStyle, ZoomLimits};
use serde::Deserialize;

/// Element id of the optional JSON override block
pub const CONFIG_ELEMENT_ID: &str = "lms-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub node_width: f64,
    pub node_height: f64,
    pub edge_curvature: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub fit_min_zoom: f64,
    pub fit_max_zoom: f64,
    pub fit_padding: f64,
    /// Media query that switches the roadmap to the mobile layout
    pub mobile_query: String,
    /// Delay before a roadmap change is saved
    pub save_debounce_ms: u32,
    pub toast_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            node_width: 140.0,
            node_height: 56.0,
            edge_curvature: 0.5,
            min_zoom: 0.2,
            max_zoom: 1.5,
            fit_min_zoom: 0.4,
            fit_max_zoom: 1.2,
            fit_padding: 0.3,
            mobile_query: "(max-width: 768px)".to_string(),
            save_debounce_ms: 600,
            toast_ms: 3000,
        }
    }
}

impl UiConfig {
    /// Parse an override block; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the override block from the document, falling back to defaults
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) => Self::from_json(&json).unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring invalid ui config");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn node_style(&self) -> NodeStyle {
        NodeStyle {
            width: self.node_width,
            height: self.node_height,
            class: Some("roadmap-node".to_string()),
        }
    }

    pub fn flow_options(&self) -> FlowOptions {
        FlowOptions {
            limits: ZoomLimits {
                min_zoom: self.min_zoom,
                max_zoom: self.max_zoom,
                fit_min_zoom: self.fit_min_zoom,
                fit_max_zoom: self.fit_max_zoom,
                fit_padding: self.fit_padding,
            },
            curvature: self.edge_curvature,
            fit_view: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = UiConfig::from_json(r#"{ "node_width": 180, "toast_ms": 1000 }"#).unwrap();
        assert_eq!(config.node_width, 180.0);
        assert_eq!(config.toast_ms, 1000);
        assert_eq!(config.max_zoom, 1.5);
        assert_eq!(config.mobile_query, "(max-width: 768px)");
    }

    #[test]
    fn test_flow_options_carry_zoom_limits() {
        let options = UiConfig::default().flow_options();
        assert_eq!(options.limits.min_zoom, 0.2);
        assert_eq!(options.limits.fit_max_zoom, 1.2);
        assert_eq!(options.limits.fit_padding, 0.3);
        assert_eq!(options.curvature, 0.5);
    }
}

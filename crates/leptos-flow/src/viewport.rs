//! Viewport
//!
//! Pan/zoom transform between screen and canvas coordinates.

use crate::types::{Bounds, XYPosition};

/// Zoom and fit limits for a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Limits used only when fitting the view to the nodes
    pub fit_min_zoom: f64,
    pub fit_max_zoom: f64,
    /// Fraction of the content size kept free around it when fitting
    pub fit_padding: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_zoom: 0.5,
            max_zoom: 2.0,
            fit_min_zoom: 0.5,
            fit_max_zoom: 2.0,
            fit_padding: 0.1,
        }
    }
}

/// Screen-space translation plus uniform scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, zoom: 1.0 }
    }
}

impl Viewport {
    pub fn screen_to_world(&self, sx: f64, sy: f64) -> XYPosition {
        XYPosition::new((sx - self.x) / self.zoom, (sy - self.y) / self.zoom)
    }

    pub fn world_to_screen(&self, point: XYPosition) -> (f64, f64) {
        (point.x * self.zoom + self.x, point.y * self.zoom + self.y)
    }

    /// Scale by `factor` keeping the screen point `(sx, sy)` fixed
    pub fn zoom_at(&mut self, factor: f64, sx: f64, sy: f64, limits: &ZoomLimits) {
        let anchor = self.screen_to_world(sx, sy);
        self.zoom = (self.zoom * factor).clamp(limits.min_zoom, limits.max_zoom);
        self.x = sx - anchor.x * self.zoom;
        self.y = sy - anchor.y * self.zoom;
    }

    /// Viewport that centers `bounds` in a `width` x `height` screen area
    pub fn fit(bounds: Bounds, width: f64, height: f64, limits: &ZoomLimits) -> Self {
        let pad = 1.0 + 2.0 * limits.fit_padding;
        let content_w = bounds.width().max(1.0) * pad;
        let content_h = bounds.height().max(1.0) * pad;
        let zoom = (width / content_w)
            .min(height / content_h)
            .clamp(limits.fit_min_zoom, limits.fit_max_zoom);

        let center_x = bounds.min.x + bounds.width() / 2.0;
        let center_y = bounds.min.y + bounds.height() / 2.0;
        Self {
            x: width / 2.0 - center_x * zoom,
            y: height / 2.0 - center_y * zoom,
            zoom,
        }
    }

    pub fn transform_css(&self) -> String {
        format!("transform: translate({}px, {}px) scale({}); transform-origin: 0 0;", self.x, self.y, self.zoom)
    }
}

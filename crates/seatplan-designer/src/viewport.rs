//! Viewport transformation between venue units and screen pixels.
//!
//! Purely a presentation helper: layout invariants are expressed in
//! venue units and never consult the transform. The venue coordinate
//! system keeps its top-left origin on screen, so no axis flip is
//! involved.

use std::fmt;

use seatplan_core::constants::VIEW_PADDING;
use seatplan_core::geometry::{Bounds, Point};

/// Zoom and pan state for rendering a floor plan.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    screen_width: f64,
    screen_height: f64,
}

impl Viewport {
    /// Creates a viewport for a screen area of the given pixel size.
    pub fn new(screen_width: f64, screen_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            screen_width,
            screen_height,
        }
    }

    /// Sets the screen dimensions (window resize).
    pub fn set_screen_size(&mut self, width: f64, height: f64) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Current zoom level (1.0 = one venue unit per pixel).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, constrained between 0.1 and 50.0.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > 0.1 && zoom < 50.0 {
            self.zoom = zoom;
        }
    }

    /// Zooms in by a 1.2 step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * 1.2);
    }

    /// Zooms out by a 1.2 step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / 1.2);
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset in pixels.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a pixel delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts a screen pixel position to venue coordinates.
    pub fn screen_to_venue(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.pan_x) / self.zoom,
            (pixel_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts a venue position to screen pixels.
    pub fn venue_to_screen(&self, p: &Point) -> (f64, f64) {
        (p.x * self.zoom + self.pan_x, p.y * self.zoom + self.pan_y)
    }

    /// Fits the given venue-space bounds into the screen with padding.
    ///
    /// `padding` is the fraction of the screen reserved on each side.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, padding: f64) {
        let width = bounds.width();
        let height = bounds.height();
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - padding * 2.0;
        let zoom_x = self.screen_width * padding_factor / width;
        let zoom_y = self.screen_height * padding_factor / height;
        let zoom = zoom_x.min(zoom_y).clamp(0.1, 50.0);

        self.zoom = zoom;
        self.pan_x = (self.screen_width - width * zoom) / 2.0 - bounds.min_x * zoom;
        self.pan_y = (self.screen_height - height * zoom) / 2.0 - bounds.min_y * zoom;
    }

    /// Fits content bounds with the default padding.
    pub fn fit_to_content(&mut self, bounds: &Bounds) {
        self.fit_to_bounds(bounds, VIEW_PADDING);
    }

    /// Resets zoom and pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

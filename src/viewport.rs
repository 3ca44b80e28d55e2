//! Viewport sizing
//!
//! The host display area is observed, not polled: each resize notification
//! recomputes the logical scene width (pixel width / zoom). A zero-width
//! observation is a transient layout pass and is ignored.

use crate::consts::{DEFAULT_SCENE_WIDTH, SCENE_ZOOM};

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    zoom: f32,
    pixel_size: (u32, u32),
    scene_width: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Safe defaults so scene-derived quantities are valid before the first
    /// observation arrives
    pub fn new() -> Self {
        Self {
            zoom: SCENE_ZOOM,
            pixel_size: (0, 0),
            scene_width: DEFAULT_SCENE_WIDTH,
        }
    }

    /// Handle a host-area resize notification
    ///
    /// Returns `true` if the viewport changed, in which case the caller must
    /// resize the render surface and recompute the scene layout before the
    /// next tick. Returns `false` (no-op) for zero-width observations.
    pub fn observe(&mut self, width: u32, height: u32) -> bool {
        if width == 0 {
            return false;
        }
        self.pixel_size = (width, height);
        self.scene_width = width as f32 / self.zoom;
        true
    }

    pub fn scene_width(&self) -> f32 {
        self.scene_width
    }

    pub fn pixel_size(&self) -> (u32, u32) {
        self.pixel_size
    }
}

//! Decorative scene layout
//!
//! Every x-extent anchor of the backdrop is a pure function of the current
//! scene width. The layout is recomputed whole on each resize; it carries no
//! state of its own, so a resize can never leave a stale anchor behind.

use crate::consts::WATERFALL_HEIGHT;

/// Positions and dimensions of the fixed backdrop objects for one scene width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneLayout {
    pub pond_diameter: f32,
    pub waterfall_rock1_x: f32,
    pub waterfall_rock2_x: f32,
    pub stream_width: f32,
    pub greenery1_x: f32,
    pub greenery2_x: f32,
    pub lily_pad1_x: f32,
    pub lily_pad2_x: f32,
    pub pond_rock1_x: f32,
    pub pond_rock2_x: f32,
}

impl SceneLayout {
    /// Compute the full layout for a given scene width
    pub fn from_width(scene_width: f32) -> Self {
        let waterfall_width = scene_width * 0.3;
        let half = scene_width / 2.0;
        Self {
            pond_diameter: scene_width + 60.0,
            waterfall_rock1_x: -waterfall_width,
            waterfall_rock2_x: waterfall_width,
            stream_width: waterfall_width * 1.5,
            greenery1_x: half + 30.0,
            greenery2_x: -half - 30.0,
            lily_pad1_x: -half + 60.0,
            lily_pad2_x: half - 60.0,
            pond_rock1_x: -scene_width / 3.0,
            pond_rock2_x: scene_width / 3.0 + 30.0,
        }
    }

    /// y of the greenery mounds, relative to the backdrop
    pub fn greenery_y(offset: f32) -> f32 {
        -WATERFALL_HEIGHT / 2.0 + offset
    }

    /// y of the pond rocks, near the lower shore
    pub fn pond_rock_y(offset: f32) -> f32 {
        WATERFALL_HEIGHT / 2.0 - offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_width_400() {
        let layout = SceneLayout::from_width(400.0);
        assert_eq!(layout.pond_diameter, 460.0);
        assert_eq!(layout.waterfall_rock1_x, -120.0);
        assert_eq!(layout.waterfall_rock2_x, 120.0);
        assert_eq!(layout.stream_width, 180.0);
        assert_eq!(layout.greenery1_x, 230.0);
        assert_eq!(layout.greenery2_x, -230.0);
        assert_eq!(layout.lily_pad1_x, -140.0);
        assert_eq!(layout.lily_pad2_x, 140.0);
    }

    #[test]
    fn recompute_is_pure() {
        // Same width always yields the same layout, regardless of history
        let via_400 = {
            let _ = SceneLayout::from_width(400.0);
            SceneLayout::from_width(600.0)
        };
        let direct = SceneLayout::from_width(600.0);
        assert_eq!(via_400, direct);
        assert_eq!(direct.pond_diameter, 660.0);
        assert_eq!(direct.pond_rock1_x, -200.0);
        assert_eq!(direct.pond_rock2_x, 230.0);
    }
}

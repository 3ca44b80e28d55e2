//! Renderer boundary
//!
//! The drawing backend is an external collaborator. Each frame the core maps
//! its positional records into a flat list of named [`SceneObject`]
//! descriptors and hands them over; the renderer never hands anything back.

pub mod scene;

pub use scene::SceneLayout;

use glam::Vec3;

use crate::consts::*;
use crate::sim::GameState;

/// Palette (0xRRGGBB)
pub mod colors {
    pub const POND_BLUE: u32 = 0x60a5fa;
    pub const STREAM_BLUE: u32 = 0x38bdf8;
    pub const ROCK_STONE: u32 = 0xa8a29e;
    pub const GREENERY_DARK: u32 = 0x16a34a;
    pub const GREENERY_LIGHT: u32 = 0x22c55e;
    pub const LILY_GREEN: u32 = 0x16a34a;
    pub const CAPY_BROWN: u32 = 0xa16207;
    pub const ORANGE: u32 = 0xf97316;
}

/// One declarative scene-object description for the external renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub name: &'static str,
    pub pos: Vec3,
    /// Spin around the y axis (radians)
    pub rotation: f32,
    /// Dominant dimension (diameter or width, renderer-interpreted)
    pub size: f32,
    pub color: u32,
}

/// External renderer collaborator
///
/// The core calls `resize` on viewport changes and `render` once per
/// simulated frame. Nothing is ever read back.
pub trait Renderer {
    fn resize(&mut self, width: u32, height: u32);
    fn render(&mut self, scene: &[SceneObject]);
}

/// Trace-logging renderer for headless runs and tests
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
}

impl Renderer for LogRenderer {
    fn resize(&mut self, width: u32, height: u32) {
        log::debug!("surface resized to {width}x{height}");
    }

    fn render(&mut self, scene: &[SceneObject]) {
        self.frames += 1;
        log::trace!("frame {}: {} scene objects", self.frames, scene.len());
    }
}

/// Map simulation state plus layout to renderer descriptors for one frame
pub fn build_scene(state: &GameState, layout: &SceneLayout) -> Vec<SceneObject> {
    let mut scene = Vec::with_capacity(11 + state.items.len());

    scene.push(SceneObject {
        name: "pond",
        pos: Vec3::ZERO,
        rotation: 0.0,
        size: layout.pond_diameter,
        color: colors::POND_BLUE,
    });
    scene.push(SceneObject {
        name: "waterfall_rock1",
        pos: Vec3::new(layout.waterfall_rock1_x, -WATERFALL_HEIGHT, -80.0),
        rotation: 0.0,
        size: 100.0,
        color: colors::ROCK_STONE,
    });
    scene.push(SceneObject {
        name: "waterfall_rock2",
        pos: Vec3::new(layout.waterfall_rock2_x, -WATERFALL_HEIGHT, -80.0),
        rotation: 0.0,
        size: 100.0,
        color: colors::ROCK_STONE,
    });
    scene.push(SceneObject {
        name: "water_stream",
        pos: Vec3::new(0.0, -WATERFALL_HEIGHT + 10.0, -59.0),
        rotation: 0.0,
        size: layout.stream_width,
        color: colors::STREAM_BLUE,
    });
    scene.push(SceneObject {
        name: "greenery1",
        pos: Vec3::new(layout.greenery1_x, SceneLayout::greenery_y(20.0), -50.0),
        rotation: 0.0,
        size: 60.0,
        color: colors::GREENERY_DARK,
    });
    scene.push(SceneObject {
        name: "greenery2",
        pos: Vec3::new(layout.greenery2_x, SceneLayout::greenery_y(40.0), -60.0),
        rotation: 0.0,
        size: 80.0,
        color: colors::GREENERY_LIGHT,
    });
    scene.push(SceneObject {
        name: "lily_pad1",
        pos: Vec3::new(layout.lily_pad1_x, 30.0, 40.0),
        rotation: 0.0,
        size: 30.0,
        color: colors::LILY_GREEN,
    });
    scene.push(SceneObject {
        name: "lily_pad2",
        pos: Vec3::new(layout.lily_pad2_x, 50.0, 60.0),
        rotation: 0.0,
        size: 30.0,
        color: colors::LILY_GREEN,
    });
    scene.push(SceneObject {
        name: "pond_rock1",
        pos: Vec3::new(layout.pond_rock1_x, SceneLayout::pond_rock_y(20.0), 20.0),
        rotation: 0.0,
        size: 40.0,
        color: colors::ROCK_STONE,
    });
    scene.push(SceneObject {
        name: "pond_rock2",
        pos: Vec3::new(layout.pond_rock2_x, SceneLayout::pond_rock_y(10.0), 30.0),
        rotation: 0.0,
        size: 30.0,
        color: colors::ROCK_STONE,
    });
    scene.push(SceneObject {
        name: "capybara",
        pos: state.avatar.pos,
        rotation: 0.0,
        size: 70.0,
        color: colors::CAPY_BROWN,
    });
    for item in &state.items {
        scene.push(SceneObject {
            name: "orange",
            pos: item.pos,
            rotation: item.rotation,
            size: 20.0,
            color: colors::ORANGE,
        });
    }

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_contains_avatar_and_full_pool() {
        let state = GameState::new(3);
        let layout = SceneLayout::from_width(state.scene_width);
        let scene = build_scene(&state, &layout);

        assert_eq!(
            scene.iter().filter(|o| o.name == "orange").count(),
            ITEM_POOL_SIZE
        );
        let capy = scene.iter().find(|o| o.name == "capybara").unwrap();
        assert_eq!(capy.pos, state.avatar.pos);
    }

    #[test]
    fn descriptors_track_simulation_positions() {
        // One-directional flow: descriptors are rebuilt from state each frame
        let mut state = GameState::new(3);
        let layout = SceneLayout::from_width(state.scene_width);

        state.avatar.pos.x = 55.0;
        state.items[0].pos.y = 42.0;
        let scene = build_scene(&state, &layout);

        let capy = scene.iter().find(|o| o.name == "capybara").unwrap();
        assert_eq!(capy.pos.x, 55.0);
        let orange = scene.iter().find(|o| o.name == "orange").unwrap();
        assert_eq!(orange.pos.y, 42.0);
    }
}

//! Game state and core simulation types
//!
//! The simulation owns plain positional records; renderer descriptors are
//! derived from them each frame, never the other way around.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;

/// The player-controlled capybara
///
/// Only x moves; y and z pin the avatar to the pond surface. x is clamped
/// to `[-scene_width/2, +scene_width/2]` after every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Avatar {
    pub pos: Vec3,
    /// Horizontal units moved per tick while an intent is held
    pub speed: f32,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, AVATAR_Y, AVATAR_Z),
            speed: AVATAR_SPEED,
        }
    }
}

/// A falling orange
///
/// Pool-allocated at scene init and recycled in place on every catch or
/// miss, so the external renderer's object graph never churns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingItem {
    pub pos: Vec3,
    /// Fall speed, sampled once per spawn
    pub speed: f32,
    /// Visual spin angle (radians), monotonically increasing
    pub rotation: f32,
}

impl FallingItem {
    /// Reset position and speed per the spawn invariant: x uniform in a
    /// band proportional to scene width, y above the backdrop top by a
    /// randomized offset, z on the avatar's plane.
    pub fn respawn(&mut self, rng: &mut Pcg32, scene_width: f32) {
        self.pos = Vec3::new(
            (rng.random::<f32>() - 0.5) * (scene_width * SPAWN_BAND_FACTOR),
            -WATERFALL_HEIGHT - rng.random::<f32>() * SPAWN_HEIGHT_JITTER,
            ITEM_PLANE_Z,
        );
        self.speed = rng.random::<f32>() * ITEM_SPEED_RANGE + ITEM_MIN_SPEED;
    }
}

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; all spawn and interrupt draws flow through here
    pub rng: Pcg32,
    /// Monotonic catch counter
    pub score: u64,
    /// Logical scene width, pushed by the viewport and read fresh each tick
    pub scene_width: f32,
    pub avatar: Avatar,
    /// Fixed-size item pool (see [`crate::consts::ITEM_POOL_SIZE`])
    pub items: Vec<FallingItem>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut items = vec![
            FallingItem {
                pos: Vec3::ZERO,
                speed: ITEM_MIN_SPEED,
                rotation: 0.0,
            };
            ITEM_POOL_SIZE
        ];
        for item in &mut items {
            item.respawn(&mut rng, DEFAULT_SCENE_WIDTH);
        }

        Self {
            seed,
            rng,
            score: 0,
            scene_width: DEFAULT_SCENE_WIDTH,
            avatar: Avatar::default(),
            items,
            time_ticks: 0,
        }
    }

    /// Update the logical scene width (called by the viewport on resize)
    pub fn set_scene_width(&mut self, width: f32) {
        self.scene_width = width;
    }

    /// Clamp the avatar into the playable band
    pub fn clamp_avatar(&mut self) {
        let half = self.scene_width / 2.0;
        self.avatar.pos.x = self.avatar.pos.x.clamp(-half, half);
    }
}

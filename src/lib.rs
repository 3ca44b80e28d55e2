//! Capy Catch - a pond-side arcade mini-game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, catch detection, scoring)
//! - `render`: Scene-object descriptors handed to an external renderer
//! - `viewport`: Zoom-normalized scene width from host-area resizes
//! - `input`: Keyboard press/release intents
//! - `session`: Mode sequencing and the pause/question-interrupt cycle
//! - `provider`: Asynchronous question fetch with validated fallback
//! - `i18n`: Static translation tables
//! - `app`: Frame wiring and the cancellable frame loop

pub mod app;
pub mod i18n;
pub mod input;
pub mod provider;
pub mod question;
pub mod render;
pub mod session;
pub mod sim;
pub mod viewport;

pub use i18n::Language;
pub use question::Question;
pub use session::{Session, SessionConfig, SessionMode};

/// Game configuration constants
pub mod consts {
    /// Viewport zoom factor; scene width = pixel width / zoom
    pub const SCENE_ZOOM: f32 = 1.5;
    /// Scene width before the first resize observation arrives
    pub const DEFAULT_SCENE_WIDTH: f32 = 400.0;
    /// Vertical extent of the waterfall backdrop
    pub const WATERFALL_HEIGHT: f32 = 160.0;

    /// Avatar horizontal speed (units per tick)
    pub const AVATAR_SPEED: f32 = 4.0;
    /// Avatar sits on the pond surface, in front of the backdrop
    pub const AVATAR_Y: f32 = 20.0;
    pub const AVATAR_Z: f32 = 20.0;

    /// Distance threshold for a catch (avatar/item on the x-y plane)
    pub const CATCH_RADIUS: f32 = 45.0;
    /// Items falling past this y are misses and respawn
    pub const CATCH_BOUNDARY: f32 = WATERFALL_HEIGHT / 2.0 + 20.0;

    /// Fixed falling-item pool size; items are recycled, never destroyed
    pub const ITEM_POOL_SIZE: usize = 5;
    /// Items fall in front of the waterfall, on the avatar's visual plane
    pub const ITEM_PLANE_Z: f32 = 25.0;
    /// Visual spin per tick (radians), not gameplay-relevant
    pub const ITEM_SPIN_STEP: f32 = 0.03;

    /// Spawn x band as a fraction of scene width, centered on the waterfall
    pub const SPAWN_BAND_FACTOR: f32 = 0.2;
    /// Spawn y starts above the backdrop top by up to this much
    pub const SPAWN_HEIGHT_JITTER: f32 = 50.0;
    /// Per-spawn fall speed is uniform in [min, min + range)
    pub const ITEM_MIN_SPEED: f32 = 1.0;
    pub const ITEM_SPEED_RANGE: f32 = 1.5;

    /// Chance that a catch triggers a question interrupt
    pub const INTERRUPT_CHANCE: f32 = 0.2;

    /// Demo frame loop cadence (Hz)
    pub const FRAME_RATE: u32 = 60;
}

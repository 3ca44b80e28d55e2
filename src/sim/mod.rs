//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Fixed item pool, stable iteration order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{catch_test, past_catch_boundary};
pub use state::{Avatar, FallingItem, GameState};
pub use tick::{GameEvent, TickInput, tick};

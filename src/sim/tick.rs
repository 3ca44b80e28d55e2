//! Per-frame simulation tick
//!
//! One tick advances avatar motion, item fall, catch detection and scoring.
//! The tick runs to completion synchronously; while paused it is a no-op so
//! the frame loop can keep rescheduling and resume instantly.

use super::collision::{catch_test, past_catch_boundary};
use super::state::GameState;
use crate::consts::*;

use rand::Rng;

/// Input intents for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub moving_left: bool,
    pub moving_right: bool,
    /// Whether catches may roll for a question interrupt this session
    pub interrupts_enabled: bool,
}

/// Events emitted by a tick, in occurrence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An item was caught (score already incremented)
    Caught,
    /// An item fell past the catch boundary and respawned
    Missed,
    /// A catch rolled a question interrupt
    QuestionRequested,
}

/// Advance the game state by one tick
///
/// Returns the events produced this tick. When `paused` the state is left
/// untouched and no events are produced. Simultaneous catches are each
/// processed independently: each scores and each rolls its own interrupt
/// chance.
pub fn tick(state: &mut GameState, input: &TickInput, paused: bool) -> Vec<GameEvent> {
    if paused {
        return Vec::new();
    }

    state.time_ticks += 1;

    if input.moving_left {
        state.avatar.pos.x -= state.avatar.speed;
    }
    if input.moving_right {
        state.avatar.pos.x += state.avatar.speed;
    }
    state.clamp_avatar();

    let mut events = Vec::new();
    let avatar_pos = state.avatar.pos;
    let scene_width = state.scene_width;

    for item in &mut state.items {
        item.pos.y += item.speed;
        item.rotation += ITEM_SPIN_STEP;

        if catch_test(avatar_pos, item.pos) {
            state.score += 1;
            item.respawn(&mut state.rng, scene_width);
            events.push(GameEvent::Caught);
            if input.interrupts_enabled && state.rng.random::<f32>() < INTERRUPT_CHANCE {
                events.push(GameEvent::QuestionRequested);
            }
        } else if past_catch_boundary(item.pos.y) {
            item.respawn(&mut state.rng, scene_width);
            events.push(GameEvent::Missed);
        }
    }

    events
}

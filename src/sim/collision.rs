//! Catch detection
//!
//! Collisions are radius checks on the x-y plane: items fall at a slightly
//! different z than the avatar but share its visual plane, so depth is
//! ignored when measuring distance.

use glam::{Vec2, Vec3};

use crate::consts::{CATCH_BOUNDARY, CATCH_RADIUS};

/// True if the item is within catch range of the avatar
pub fn catch_test(avatar_pos: Vec3, item_pos: Vec3) -> bool {
    let avatar = Vec2::new(avatar_pos.x, avatar_pos.y);
    let item = Vec2::new(item_pos.x, item_pos.y);
    avatar.distance(item) < CATCH_RADIUS
}

/// True if the item has fallen past the lower catch boundary (a miss)
pub fn past_catch_boundary(y: f32) -> bool {
    y > CATCH_BOUNDARY
}

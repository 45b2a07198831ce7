use hecs::World;

use crate::error::{EngineError, Result};
use crate::{Arena, Config, Paddle, Side};

/// What happened to a paddle target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    /// The paddle moved to the target
    Applied,
    /// The target would put the paddle past a wall; nothing changed
    Ignored,
}

/// Move the human paddle so its top edge sits at `target`.
///
/// Targets that would push any part of the paddle outside the arena are
/// dropped rather than clamped, so the paddle stays where it was.
pub fn apply_paddle_target(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    target: f32,
) -> Result<TargetOutcome> {
    if !target.is_finite() {
        return Err(EngineError::NonFiniteTarget(target));
    }

    if !arena.paddle_y_in_bounds(target, config.paddle_height) {
        return Ok(TargetOutcome::Ignored);
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Human {
            paddle.y = target;
        }
    }

    Ok(TargetOutcome::Applied)
}

use glam::Vec2;

use crate::components::Side;
use crate::error::{EngineError, Result};
use crate::map::{Arena, Rect};
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_start_y: f32,
    pub opponent_step: f32,
    pub opponent_dead_zone: f32,
    pub ball_size: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increment: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_start_y: Params::PADDLE_START_Y,
            opponent_step: Params::OPPONENT_STEP,
            opponent_dead_zone: Params::OPPONENT_DEAD_ZONE,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that paddles and ball fit inside the arena
    pub fn validate(&self, arena: &Arena) -> Result<()> {
        if !(self.paddle_height > 0.0 && self.paddle_height <= arena.height) {
            return Err(EngineError::PaddleTooTall {
                paddle_height: self.paddle_height,
                arena_height: arena.height,
            });
        }
        if !(self.ball_size > 0.0 && self.ball_size < arena.width && self.ball_size < arena.height)
        {
            return Err(EngineError::BallTooLarge {
                ball_size: self.ball_size,
                width: arena.width,
                height: arena.height,
            });
        }
        Ok(())
    }

    /// Get X position (left edge) for the paddle on the given side
    pub fn paddle_x(&self, side: Side, arena: &Arena) -> f32 {
        match side {
            Side::Human => self.paddle_margin,
            Side::Opponent => arena.width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Rectangle a paddle occupies with its top edge at `y`
    pub fn paddle_rect(&self, side: Side, y: f32, arena: &Arena) -> Rect {
        Rect::new(
            Vec2::new(self.paddle_x(side, arena), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }

    /// Rectangle the ball occupies with its top-left corner at `pos`
    pub fn ball_rect(&self, pos: Vec2) -> Rect {
        Rect::new(pos, Vec2::splat(self.ball_size))
    }
}

use glam::Vec2;

use crate::error::{EngineError, Result};
use crate::params::Params;

/// Axis-aligned rectangle stored as top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.bottom() >= other.top() && self.top() <= other.bottom()
    }

    /// Approximate contact with a paddle guarding the left wall.
    ///
    /// Only the paddle's right edge is tested horizontally, so a ball anywhere
    /// left of that edge counts as touching once the rows overlap.
    pub fn touches_left_paddle(&self, paddle: &Rect) -> bool {
        self.left() <= paddle.right() && self.overlaps_vertically(paddle)
    }

    /// Mirror of [`Rect::touches_left_paddle`] for the right-hand paddle
    pub fn touches_right_paddle(&self, paddle: &Rect) -> bool {
        self.right() >= paddle.left() && self.overlaps_vertically(paddle)
    }
}

/// Playable area. Fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(EngineError::InvalidArena { width, height });
        }
        Ok(Self { width, height })
    }

    /// Geometric centre. The ball's top-left corner is placed here on serve.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Largest valid top edge for a paddle of the given height
    pub fn max_paddle_y(&self, paddle_height: f32) -> f32 {
        (self.height - paddle_height).max(0.0)
    }

    /// Clamp a paddle's top edge into the arena
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y(paddle_height))
    }

    /// True when the whole paddle fits between the walls at this top edge
    pub fn paddle_y_in_bounds(&self, y: f32, paddle_height: f32) -> bool {
        y >= 0.0 && y <= self.height - paddle_height
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }
}

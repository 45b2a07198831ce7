use glam::Vec2;
use rand::Rng;

use crate::GameRng;

/// Which side of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Human,    // Left, follows the pointer
    Opponent, // Right, tracks the ball
}

/// One axis of the ball's heading. There is no zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    pub fn as_f32(self) -> f32 {
        match self {
            Sign::Negative => -1.0,
            Sign::Positive => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }

    /// Fair coin flip
    pub fn random(rng: &mut GameRng) -> Self {
        if rng.0.gen_bool(0.5) {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Ball heading, one sign per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading {
    pub x: Sign,
    pub y: Sign,
}

impl Heading {
    pub fn new(x: Sign, y: Sign) -> Self {
        Self { x, y }
    }

    pub fn random(rng: &mut GameRng) -> Self {
        Self {
            x: Sign::random(rng),
            y: Sign::random(rng),
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x.as_f32(), self.y.as_f32())
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub heading: Heading,
    pub speed: f32, // Units per tick
}

impl Ball {
    pub fn new(pos: Vec2, heading: Heading, speed: f32) -> Self {
        Self { pos, heading, speed }
    }

    /// Place the ball at `center` with a fresh random heading. Speed is kept.
    pub fn serve(&mut self, center: Vec2, rng: &mut GameRng) {
        self.pos = center;
        self.heading = Heading::random(rng);
    }

    /// Velocity for this tick
    pub fn velocity(&self) -> Vec2 {
        self.heading.as_vec2() * self.speed
    }
}

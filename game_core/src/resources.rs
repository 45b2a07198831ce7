/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub human: u32,    // Left paddle
    pub opponent: u32, // Right paddle
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_human(&mut self) {
        self.human += 1;
    }

    pub fn increment_opponent(&mut self) {
        self.opponent += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub human_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.human_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn scored(&self) -> bool {
        self.human_scored || self.opponent_scored
    }
}

/// Paddle hits and wall bounces since the last serve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RallyStats {
    pub paddle_hits: u32,
    pub wall_bounces: u32,
}

impl RallyStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one tick's events into the tally
    pub fn record(&mut self, events: &Events) {
        if events.ball_hit_paddle {
            self.paddle_hits += 1;
        }
        if events.ball_hit_wall {
            self.wall_bounces += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

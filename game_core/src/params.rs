/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // Gap between paddle and its side wall
    pub const PADDLE_START_Y: f32 = 160.0; // Top edge after every serve

    // Opponent
    pub const OPPONENT_STEP: f32 = 8.0; // Units per tick
    pub const OPPONENT_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 8.0;
    pub const BALL_SPEED_INITIAL: f32 = 5.0; // Units per tick
    pub const BALL_SPEED_INCREMENT: f32 = 0.2; // Added on every paddle hit

    // Timing
    pub const TICK_RATE_HZ: u32 = 60;
}

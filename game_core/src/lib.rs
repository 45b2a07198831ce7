pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use snapshot::*;
pub use systems::*;

use hecs::World;

/// Run one deterministic Pong simulation tick.
///
/// Order matters: later systems see the results of earlier ones, including a
/// rally reset triggered by scoring in the same tick.
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Check scoring (ball reached a side wall)
    check_scoring(world, arena, config, score, events, rng);

    // 3. Move opponent paddle toward the ball
    move_opponent_paddle(world, arena, config);

    // 4. Check wall bounces
    check_wall_collision(world, arena, config, events);

    // 5. Check paddle hits
    check_paddle_collisions(world, arena, config, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}

use crate::{reset_rally, Arena, Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Check if the ball reached a side wall (scoring)
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let ball_x = {
        let mut ball_query = world.query::<&Ball>();
        match ball_query.iter().next() {
            Some((_e, ball)) => ball.pos.x,
            None => return,
        }
    };

    if ball_x <= 0.0 {
        // Human missed
        score.increment_opponent();
        events.opponent_scored = true;
    } else if ball_x >= arena.width - config.ball_size {
        // Opponent missed
        score.increment_human();
        events.human_scored = true;
    } else {
        return;
    }

    reset_rally(world, arena, config, rng);
}

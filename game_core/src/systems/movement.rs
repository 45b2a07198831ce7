use crate::{Arena, Ball, Config, Paddle, Side};
use hecs::World;

/// Move ball one tick along its heading
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.velocity();
    }
}

/// Bang-bang tracking for the opponent paddle.
///
/// The paddle steps a fixed amount toward the ball's top edge whenever its
/// centre is outside the dead zone, then is clamped into the arena.
pub fn move_opponent_paddle(world: &mut World, arena: &Arena, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        match ball_query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return,
        }
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }

        let center = paddle.y + config.paddle_height / 2.0;
        if center < ball_y - config.opponent_dead_zone {
            paddle.y += config.opponent_step;
        } else if center > ball_y + config.opponent_dead_zone {
            paddle.y -= config.opponent_step;
        }

        paddle.y = arena.clamp_paddle_y(paddle.y, config.paddle_height);
    }
}

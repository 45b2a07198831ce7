use crate::{Arena, Ball, Config, Events, Paddle, Side, Sign};
use hecs::World;

/// Flip vertical heading when the ball is at or past the top or bottom wall.
///
/// Position is not corrected, so the ball may sit on the wall for a tick.
pub fn check_wall_collision(world: &mut World, arena: &Arena, config: &Config, events: &mut Events) {
    let floor = arena.height - config.ball_size;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y <= 0.0 || ball.pos.y >= floor {
            ball.heading.y = ball.heading.y.flipped();
            events.ball_hit_wall = true;
            log::trace!("Ball hit wall at y={:.1}", ball.pos.y);
        }
    }
}

/// Send the ball away from any paddle it is touching and speed it up.
///
/// Uses the approximate contact test from [`crate::Rect::touches_left_paddle`]
/// and [`crate::Rect::touches_right_paddle`]. The human paddle is tested
/// first, so touching both in one tick leaves the ball heading left.
pub fn check_paddle_collisions(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(side, paddle_y) in &paddles {
            let paddle_rect = config.paddle_rect(side, paddle_y, arena);
            let ball_rect = config.ball_rect(ball.pos);

            let (hit, away) = match side {
                Side::Human => (ball_rect.touches_left_paddle(&paddle_rect), Sign::Positive),
                Side::Opponent => (ball_rect.touches_right_paddle(&paddle_rect), Sign::Negative),
            };

            if hit {
                ball.heading.x = away;
                increase_speed(ball, config);
                events.ball_hit_paddle = true;
                log::trace!("Ball hit {side:?} paddle, speed now {:.1}", ball.speed);
            }
        }
    }
}

/// Add the fixed per-hit increment. There is no cap.
pub fn increase_speed(ball: &mut Ball, config: &Config) {
    ball.speed += config.ball_speed_increment;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Heading};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Arena, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let arena = Arena::default();
        let events = Events::new();
        (world, config, arena, events)
    }

    fn the_ball(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball");
        *ball
    }

    fn spawn_ball(world: &mut World, x: f32, y: f32, heading: Heading) {
        create_ball(world, Ball::new(Vec2::new(x, y), heading, 5.0));
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, arena, mut events) = setup_world();
        spawn_ball(
            &mut world,
            400.0,
            -2.0,
            Heading::new(Sign::Positive, Sign::Negative),
        );

        check_wall_collision(&mut world, &arena, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.heading.y, Sign::Positive, "Ball should head down");
        assert_eq!(ball.heading.x, Sign::Positive, "X heading unchanged");
        assert_eq!(ball.pos.y, -2.0, "Position is not corrected");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, arena, mut events) = setup_world();
        spawn_ball(
            &mut world,
            400.0,
            arena.height - config.ball_size,
            Heading::new(Sign::Positive, Sign::Positive),
        );

        check_wall_collision(&mut world, &arena, &config, &mut events);

        assert_eq!(the_ball(&world).heading.y, Sign::Negative, "Ball should head up");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_bounce_in_open_space() {
        let (mut world, config, arena, mut events) = setup_world();
        spawn_ball(
            &mut world,
            400.0,
            0.5,
            Heading::new(Sign::Positive, Sign::Negative),
        );

        check_wall_collision(&mut world, &arena, &config, &mut events);

        assert_eq!(the_ball(&world).heading.y, Sign::Negative);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_human_paddle() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 160.0);
        // Left edge exactly on the paddle's right edge (20 + 10)
        spawn_ball(
            &mut world,
            30.0,
            200.0,
            Heading::new(Sign::Negative, Sign::Positive),
        );

        check_paddle_collisions(&mut world, &arena, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.heading.x, Sign::Positive, "Ball should head right");
        assert_eq!(ball.heading.y, Sign::Positive, "Y heading unchanged");
        assert!((ball.speed - 5.2).abs() < 1e-5, "Speed should grow by 0.2");
        assert!(events.ball_hit_paddle, "Should trigger ball_hit_paddle event");
    }

    #[test]
    fn test_ball_collides_with_opponent_paddle() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Opponent, 160.0);
        // Right edge exactly on the paddle's left edge (770)
        spawn_ball(
            &mut world,
            762.0,
            160.0,
            Heading::new(Sign::Positive, Sign::Negative),
        );

        check_paddle_collisions(&mut world, &arena, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.heading.x, Sign::Negative, "Ball should head left");
        assert!((ball.speed - 5.2).abs() < 1e-5);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_contact_forces_heading_even_when_already_away() {
        // The contact rule sets the heading; it does not check approach direction
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 160.0);
        spawn_ball(
            &mut world,
            25.0,
            200.0,
            Heading::new(Sign::Positive, Sign::Positive),
        );

        check_paddle_collisions(&mut world, &arena, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.heading.x, Sign::Positive);
        assert!((ball.speed - 5.2).abs() < 1e-5, "Speed still increases");
    }

    #[test]
    fn test_ball_misses_paddle_vertically() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 160.0);
        // Bottom edge at 151, paddle top at 160
        spawn_ball(
            &mut world,
            25.0,
            143.0,
            Heading::new(Sign::Negative, Sign::Positive),
        );

        check_paddle_collisions(&mut world, &arena, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.heading.x, Sign::Negative, "No bounce above the paddle");
        assert_eq!(ball.speed, 5.0);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_touching_both_paddles_ends_heading_left() {
        // A ball as wide as the gap touches both paddles at once
        let (mut world, _config, arena, mut events) = setup_world();
        let config = Config {
            ball_size: 760.0,
            ..Config::new()
        };
        create_paddle(&mut world, Side::Opponent, 160.0);
        create_paddle(&mut world, Side::Human, 160.0);
        spawn_ball(
            &mut world,
            25.0,
            100.0,
            Heading::new(Sign::Positive, Sign::Positive),
        );

        check_paddle_collisions(&mut world, &arena, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.heading.x, Sign::Negative, "Opponent hit is applied last");
        assert!((ball.speed - 5.4).abs() < 1e-5, "Both hits add speed");
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, arena, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 160.0);

        check_paddle_collisions(&mut world, &arena, &config, &mut events);
        check_wall_collision(&mut world, &arena, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_no_collision_when_no_paddles() {
        let (mut world, config, arena, mut events) = setup_world();
        spawn_ball(
            &mut world,
            2.0,
            200.0,
            Heading::new(Sign::Negative, Sign::Positive),
        );

        check_paddle_collisions(&mut world, &arena, &config, &mut events);

        assert_eq!(the_ball(&world).heading.x, Sign::Negative);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_increase_speed_is_unbounded() {
        let config = Config::new();
        let mut ball = Ball::new(
            Vec2::ZERO,
            Heading::new(Sign::Positive, Sign::Positive),
            5.0,
        );
        for _ in 0..1000 {
            increase_speed(&mut ball, &config);
        }
        assert!(ball.speed > 204.0, "Speed has no ceiling, got {}", ball.speed);
    }
}

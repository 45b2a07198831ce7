//! Simulation Engine
//!
//! Owns the world, the resources and the presentation surface, and exposes
//! the operations a host drives: serve, paddle input, tick and the session
//! toggle. It never sleeps or spawns threads; cadence belongs to the caller.

use hecs::World;

use crate::error::Result;
use crate::{
    apply_paddle_target, create_ball, create_paddle, reset_rally, step, Arena, Ball, Config,
    Events, GameRng, Heading, Paddle, Presenter, RallyStats, Score, Session, Side, Sign, Snapshot,
    TargetOutcome, Transition,
};

pub struct Engine<P: Presenter> {
    world: World,
    arena: Arena,
    config: Config,
    score: Score,
    events: Events,
    rally: RallyStats,
    rng: GameRng,
    session: Session,
    presenter: P,
    tick: u64,
}

impl<P: Presenter> Engine<P> {
    /// Build an idle engine with the ball served and both paddles spawned.
    ///
    /// The presenter receives the opening snapshot before this returns.
    pub fn new(arena: Arena, config: Config, seed: u64, presenter: P) -> Result<Self> {
        config.validate(&arena)?;

        let mut world = World::new();
        let start_y = arena.clamp_paddle_y(config.paddle_start_y, config.paddle_height);
        create_paddle(&mut world, Side::Human, start_y);
        create_paddle(&mut world, Side::Opponent, start_y);
        create_ball(
            &mut world,
            Ball::new(
                arena.center(),
                Heading::new(Sign::Positive, Sign::Positive),
                config.ball_speed_initial,
            ),
        );

        let mut engine = Self {
            world,
            arena,
            config,
            score: Score::new(),
            events: Events::new(),
            rally: RallyStats::new(),
            rng: GameRng::new(seed),
            session: Session::new(),
            presenter,
            tick: 0,
        };
        engine.reset_rally();
        Ok(engine)
    }

    /// Serve a new rally and emit a snapshot. Speed and score are kept.
    pub fn reset_rally(&mut self) {
        reset_rally(&mut self.world, &self.arena, &self.config, &mut self.rng);
        self.rally.reset();
        self.emit();
    }

    /// Follow the pointer. Out-of-range targets leave the paddle where it is.
    pub fn set_human_paddle_target(&mut self, y: f32) -> Result<TargetOutcome> {
        apply_paddle_target(&mut self.world, &self.arena, &self.config, y)
    }

    /// Advance one frame and emit a snapshot.
    ///
    /// A point scored mid-tick resets the rally in place; the single snapshot
    /// at the end of the tick reflects the reset state.
    pub fn tick(&mut self) {
        step(
            &mut self.world,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.tick += 1;
        self.rally.record(&self.events);

        if self.events.ball_hit_paddle {
            log::debug!(
                "Paddle hit {} of the rally, speed {:.1}",
                self.rally.paddle_hits,
                self.ball().map_or(0.0, |ball| ball.speed)
            );
        }

        if self.events.scored() {
            log::debug!(
                "Point to {} after {} paddle hits and {} wall bounces, score {}-{}",
                if self.events.human_scored { "human" } else { "opponent" },
                self.rally.paddle_hits,
                self.rally.wall_bounces,
                self.score.human,
                self.score.opponent
            );
            self.rally.reset();
        }

        self.emit();
    }

    /// Flip the session between Idle and Running.
    ///
    /// Stopping restores the initial speed, zeroes both scores and serves a
    /// fresh rally. Starting or stopping the tick cadence is up to the caller.
    pub fn toggle_session(&mut self) -> Transition {
        let transition = self.session.toggle();

        if transition.stopped() {
            let initial = self.config.ball_speed_initial;
            for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
                ball.speed = initial;
            }
            self.score.reset();
            self.reset_rally();
        }

        log::info!(
            "Session {:?} -> {:?} (control: {})",
            transition.from,
            transition.to,
            self.session.control_label()
        );
        transition
    }

    /// Current positions and scores
    pub fn snapshot(&self) -> Snapshot {
        let (ball_x, ball_y) = self
            .ball()
            .map(|ball| (ball.pos.x, ball.pos.y))
            .unwrap_or_else(|| (self.arena.center().x, self.arena.center().y));

        let start_y = self.config.paddle_start_y;
        Snapshot {
            tick: self.tick,
            ball_x,
            ball_y,
            human_paddle_y: self.paddle_y(Side::Human).unwrap_or(start_y),
            opponent_paddle_y: self.paddle_y(Side::Opponent).unwrap_or(start_y),
            human_score: self.score.human,
            opponent_score: self.score.opponent,
        }
    }

    fn emit(&mut self) {
        let snapshot = self.snapshot();
        self.presenter.present(&snapshot);
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_y(&self, side: Side) -> Option<f32> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn events(&self) -> Events {
        self.events
    }

    /// Hits and bounces since the last serve
    pub fn rally_stats(&self) -> RallyStats {
        self.rally
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Direct world access for setting up scenarios
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

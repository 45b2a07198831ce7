//! Native host for the Pong simulation core
//!
//! The [`Driver`] owns an [`Engine`] behind a single mutex and ticks it from a
//! dedicated thread at a fixed cadence. Pointer input lands in a
//! [`PaddleTarget`] slot that the ticker drains once per tick.

pub mod config;
pub mod present;


pub use config::{ArgError, HostConfig, OutputFormat};
pub use present::{JsonLinesPresenter, LogPresenter};

use game_core::{Engine, EngineError, Presenter, Snapshot, TargetOutcome, Transition};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Heartbeat log interval in ticks (one second at 60 Hz)
const HEARTBEAT_TICKS: u64 = 60;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Latest pointer position. Last write wins; nothing is queued.
#[derive(Debug, Default)]
pub struct PaddleTarget {
    slot: Mutex<Option<f32>>,
}

impl PaddleTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, y: f32) {
        *lock(&self.slot) = Some(y);
    }

    pub fn take(&self) -> Option<f32> {
        lock(&self.slot).take()
    }
}

struct Shared<P: Presenter> {
    engine: Engine<P>,
    halted: bool, // Set on drop so the ticker exits without touching the session
}

/// Fixed-rate, single-owner tick driver
pub struct Driver<P: Presenter + Send + 'static> {
    shared: Arc<Mutex<Shared<P>>>,
    input: Arc<PaddleTarget>,
    ticker: Option<JoinHandle<()>>,
    interval: Duration,
}

impl<P: Presenter + Send + 'static> Driver<P> {
    pub fn new(engine: Engine<P>, interval: Duration) -> Self {
        let running = engine.session().is_running();
        let mut driver = Self {
            shared: Arc::new(Mutex::new(Shared {
                engine,
                halted: false,
            })),
            input: Arc::new(PaddleTarget::new()),
            ticker: None,
            interval,
        };
        if running {
            driver.spawn_ticker();
        }
        driver
    }

    /// Driver ticking `hz` times per second
    pub fn with_rate(engine: Engine<P>, hz: u32) -> Self {
        Self::new(engine, Duration::from_secs_f64(1.0 / f64::from(hz.max(1))))
    }

    /// Start or reset the game.
    ///
    /// When this returns after a stop, no further tick will run: the session
    /// flips under the engine lock and the ticker checks it under the same
    /// lock before every tick.
    pub fn toggle(&mut self) -> Transition {
        let transition = lock(&self.shared).engine.toggle_session();
        if transition.started() {
            self.spawn_ticker();
        } else if transition.stopped() {
            self.join_ticker();
        }
        transition
    }

    /// Feed a pointer position in arena coordinates.
    ///
    /// While the game is idle the paddle follows immediately; while running
    /// the next tick picks up the latest value.
    pub fn pointer_moved(&self, y: f32) -> Result<(), EngineError> {
        if !y.is_finite() {
            return Err(EngineError::NonFiniteTarget(y));
        }
        self.input.set(y);

        let mut shared = lock(&self.shared);
        if !shared.engine.session().is_running() {
            if let Some(y) = self.input.take() {
                apply_target(&mut shared.engine, y);
            }
        }
        Ok(())
    }

    /// Shared input slot, for input sources living on other threads
    pub fn paddle_target(&self) -> Arc<PaddleTarget> {
        Arc::clone(&self.input)
    }

    pub fn is_running(&self) -> bool {
        lock(&self.shared).engine.session().is_running()
    }

    pub fn control_label(&self) -> &'static str {
        lock(&self.shared).engine.session().control_label()
    }

    pub fn snapshot(&self) -> Snapshot {
        lock(&self.shared).engine.snapshot()
    }

    /// Run `f` with exclusive access to the engine. Ticks wait until it returns.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut Engine<P>) -> R) -> R {
        f(&mut lock(&self.shared).engine)
    }

    fn spawn_ticker(&mut self) {
        self.join_ticker();

        let shared = Arc::clone(&self.shared);
        let input = Arc::clone(&self.input);
        let interval = self.interval;
        self.ticker = Some(thread::spawn(move || run_ticker(shared, input, interval)));
    }

    fn join_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            if handle.join().is_err() {
                log::error!("Ticker thread panicked");
            }
        }
    }
}

impl<P: Presenter + Send + 'static> Drop for Driver<P> {
    fn drop(&mut self) {
        lock(&self.shared).halted = true;
        self.join_ticker();
    }
}

fn apply_target<P: Presenter>(engine: &mut Engine<P>, y: f32) {
    match engine.set_human_paddle_target(y) {
        Ok(TargetOutcome::Applied) => {}
        Ok(TargetOutcome::Ignored) => log::trace!("Paddle target {y:.1} out of range"),
        Err(e) => log::warn!("Rejected paddle target: {e}"),
    }
}

fn run_ticker<P: Presenter>(
    shared: Arc<Mutex<Shared<P>>>,
    input: Arc<PaddleTarget>,
    interval: Duration,
) {
    log::info!("Ticker started, interval {interval:?}");
    let mut next = Instant::now() + interval;

    loop {
        let now = Instant::now();
        if next > now {
            thread::sleep(next - now);
        }

        {
            let mut guard = lock(&shared);
            if guard.halted || !guard.engine.session().is_running() {
                break;
            }

            if let Some(y) = input.take() {
                apply_target(&mut guard.engine, y);
            }
            guard.engine.tick();

            let tick = guard.engine.tick_count();
            if tick % HEARTBEAT_TICKS == 0 {
                let score = guard.engine.score();
                log::debug!(
                    "Game running, tick={tick}, score={}-{}",
                    score.human,
                    score.opponent
                );
            }
        }

        // Fell behind: re-base instead of bursting catch-up ticks
        next = (next + interval).max(Instant::now());
    }

    log::info!("Ticker stopped");
}

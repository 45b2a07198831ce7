use game_core::{Arena, Config, Engine, Presenter};
use local_host::{ArgError, Driver, HostConfig, JsonLinesPresenter, LogPresenter, OutputFormat};
use std::env;
use std::process;
use std::thread;
use std::time::{Duration, Instant};

/// How often the simulated pointer moves
const POINTER_INTERVAL: Duration = Duration::from_millis(16);
/// Simulated pointer travel per move
const POINTER_STEP: f32 = 6.0;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "pong-host".to_string());

    let config = match HostConfig::from_args(args.into_iter().skip(1), env::var("PONG_SEED").ok())
    {
        Ok(config) => config,
        Err(ArgError::HelpRequested) => {
            print_usage(&program);
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            print_usage(&program);
            process::exit(1);
        }
    };

    log::info!(
        "Pong host starting: seed={}, rate={} Hz, duration={:?}",
        config.seed,
        config.rate_hz,
        config.duration
    );

    let presenter: Box<dyn Presenter + Send> = match config.output {
        OutputFormat::Log => Box::new(LogPresenter::new(u64::from(config.rate_hz))),
        OutputFormat::JsonLines => Box::new(JsonLinesPresenter::new(std::io::stdout())),
    };

    let engine = match Engine::new(Arena::default(), Config::new(), config.seed, presenter) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut driver = Driver::new(engine, config.tick_interval());
    driver.toggle();
    log::info!("Control now reads '{}'", driver.control_label());

    sweep_pointer(&driver, config.duration);

    let last = driver.snapshot();
    driver.toggle();
    log::info!("Control now reads '{}'", driver.control_label());

    eprintln!(
        "Final score after {} ticks: human {} - opponent {}",
        last.tick, last.human_score, last.opponent_score
    );
}

/// Move a fake pointer up and down the arena until `duration` has passed
fn sweep_pointer<P: Presenter + Send + 'static>(driver: &Driver<P>, duration: Duration) {
    let max_y = driver.with_engine(|engine| {
        engine
            .arena()
            .max_paddle_y(engine.config().paddle_height)
    });

    let deadline = Instant::now() + duration;
    let mut y = 0.0_f32;
    let mut step = POINTER_STEP;

    while Instant::now() < deadline {
        if let Err(e) = driver.pointer_moved(y) {
            log::warn!("Pointer update failed: {e}");
        }

        y += step;
        if y >= max_y || y <= 0.0 {
            step = -step;
            y = y.clamp(0.0, max_y);
        }
        thread::sleep(POINTER_INTERVAL);
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [--seed N] [--seconds S] [--rate HZ] [--json]");
    eprintln!();
    eprintln!("Runs a headless game with a simulated pointer, then resets it.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -s, --seed N     Serve RNG seed (default 12345, or $PONG_SEED)");
    eprintln!("      --seconds S  How long to play (default 10)");
    eprintln!("      --rate HZ    Ticks per second, 1-1000 (default 60)");
    eprintln!("      --json       Write one JSON snapshot per line to stdout");
    eprintln!("  -h, --help       Show this message");
}

//! Host settings from the command line and environment

use game_core::Params;
use std::fmt;
use std::time::Duration;

/// Where snapshots go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Log,
    JsonLines,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub seed: u64,
    pub duration: Duration,
    pub rate_hz: u32,
    pub output: OutputFormat,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            duration: Duration::from_secs(10),
            rate_hz: Params::TICK_RATE_HZ,
            output: OutputFormat::Log,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    HelpRequested,
    UnknownFlag(String),
    MissingValue(String),
    InvalidValue { flag: String, value: String },
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::HelpRequested => write!(f, "help requested"),
            ArgError::UnknownFlag(flag) => write!(f, "unknown argument '{flag}'"),
            ArgError::MissingValue(flag) => write!(f, "{flag} requires a value"),
            ArgError::InvalidValue { flag, value } => {
                write!(f, "invalid value '{value}' for {flag}")
            }
        }
    }
}

impl std::error::Error for ArgError {}

impl HostConfig {
    /// Parse arguments (without the program name). `--seed` wins over `env_seed`.
    pub fn from_args<I>(args: I, env_seed: Option<String>) -> Result<Self, ArgError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();

        if let Some(raw) = env_seed {
            config.seed = parse_seed("PONG_SEED", &raw)?;
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Err(ArgError::HelpRequested),
                "--json" => config.output = OutputFormat::JsonLines,
                "--seed" | "-s" => {
                    let value = next_value(&mut args, &arg)?;
                    config.seed = parse_seed(&arg, &value)?;
                }
                "--seconds" => {
                    let value = next_value(&mut args, &arg)?;
                    config.duration = value
                        .parse::<f64>()
                        .ok()
                        .filter(|secs| *secs > 0.0)
                        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                        .ok_or_else(|| invalid(&arg, &value))?;
                }
                "--rate" => {
                    let value = next_value(&mut args, &arg)?;
                    config.rate_hz = value
                        .parse::<u32>()
                        .ok()
                        .filter(|hz| (1..=1000).contains(hz))
                        .ok_or_else(|| invalid(&arg, &value))?;
                }
                _ => return Err(ArgError::UnknownFlag(arg)),
            }
        }

        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.rate_hz.max(1)))
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, ArgError> {
    args.next()
        .ok_or_else(|| ArgError::MissingValue(flag.to_string()))
}

fn parse_seed(flag: &str, value: &str) -> Result<u64, ArgError> {
    value.trim().parse().map_err(|_| invalid(flag, value))
}

fn invalid(flag: &str, value: &str) -> ArgError {
    ArgError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    }
}

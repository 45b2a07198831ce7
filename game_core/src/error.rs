use std::fmt;

/// Precondition violations reported by the engine.
///
/// None of these can occur mid-tick; they are returned from construction and
/// from the input entry point before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    InvalidArena { width: f32, height: f32 },
    PaddleTooTall { paddle_height: f32, arena_height: f32 },
    BallTooLarge { ball_size: f32, width: f32, height: f32 },
    NonFiniteTarget(f32),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidArena { width, height } => {
                write!(f, "arena must be finite and positive, got {width}x{height}")
            }
            EngineError::PaddleTooTall {
                paddle_height,
                arena_height,
            } => write!(
                f,
                "paddle height {paddle_height} exceeds arena height {arena_height}"
            ),
            EngineError::BallTooLarge {
                ball_size,
                width,
                height,
            } => write!(f, "ball size {ball_size} does not fit a {width}x{height} arena"),
            EngineError::NonFiniteTarget(y) => write!(f, "paddle target must be finite, got {y}"),
        }
    }
}

impl std::error::Error for EngineError {}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::NonFiniteTarget(f32::NAN);
        assert_eq!(err.to_string(), "paddle target must be finite, got NaN");

        let err = EngineError::PaddleTooTall {
            paddle_height: 500.0,
            arena_height: 480.0,
        };
        assert_eq!(
            err.to_string(),
            "paddle height 500 exceeds arena height 480"
        );
    }
}

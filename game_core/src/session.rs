//! Session State Machine
//!
//! Two states toggled by a single control. There is no terminal state.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Running,
}

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: SessionState,
    pub to: SessionState,
}

impl Transition {
    /// Idle -> Running
    pub fn started(&self) -> bool {
        self.from == SessionState::Idle && self.to == SessionState::Running
    }

    /// Running -> Idle
    pub fn stopped(&self) -> bool {
        self.from == SessionState::Running && self.to == SessionState::Idle
    }
}

/// Session Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Flip between Idle and Running
    pub fn toggle(&mut self) -> Transition {
        let from = self.state;
        self.state = match from {
            SessionState::Idle => SessionState::Running,
            SessionState::Running => SessionState::Idle,
        };
        Transition {
            from,
            to: self.state,
        }
    }

    /// Text for the start/reset control
    pub fn control_label(&self) -> &'static str {
        match self.state {
            SessionState::Idle => "Start Game",
            SessionState::Running => "Reset Game",
        }
    }
}

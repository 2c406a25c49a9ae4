//! Stage lifecycle state machine

use serde::{Deserialize, Serialize};

/// Stage lifecycle states
///
/// State transitions:
/// ```text
/// Registered → Initialized → Generating
///                   ↑             │
///                   └─────────────┘ (next file)
///      Any non-terminal state → Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// Stage is registered with the host but not yet initialized
    #[default]
    Registered,
    /// Stage holds its configuration and can process files
    Initialized,
    /// Stage is processing a schema file
    Generating,
    /// Stage encountered a fatal error
    Failed,
}

impl LifecycleState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, target),
            (Registered, Initialized)
                | (Initialized, Generating)
                | (Generating, Initialized)
                | (Registered, Failed)
                | (Initialized, Failed)
                | (Generating, Failed)
        )
    }

    /// Check if the stage can accept a schema file in this state
    pub fn can_generate(&self) -> bool {
        matches!(self, LifecycleState::Initialized)
    }

    /// Check if the stage is in a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, LifecycleState::Failed)
    }

    /// Get a human-readable description of this state
    pub fn description(&self) -> &'static str {
        match self {
            LifecycleState::Registered => "Stage is registered but not initialized",
            LifecycleState::Initialized => "Stage is initialized and ready",
            LifecycleState::Generating => "Stage is processing a schema file",
            LifecycleState::Failed => "Stage has failed",
        }
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            LifecycleState::Registered => 0,
            LifecycleState::Initialized => 1,
            LifecycleState::Generating => 2,
            LifecycleState::Failed => 3,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LifecycleState::Registered,
            1 => LifecycleState::Initialized,
            2 => LifecycleState::Generating,
            _ => LifecycleState::Failed,
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleState::Registered => write!(f, "Registered"),
            LifecycleState::Initialized => write!(f, "Initialized"),
            LifecycleState::Generating => write!(f, "Generating"),
            LifecycleState::Failed => write!(f, "Failed"),
        }
    }
}

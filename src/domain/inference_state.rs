use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InferenceState {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl InferenceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            InferenceState::Pending => "PENDING",
            InferenceState::Running => "RUNNING",
            InferenceState::Succeeded => "SUCCEEDED",
            InferenceState::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, InferenceState::Succeeded | InferenceState::Failed)
    }

    /// A spawn failure moves straight from `Pending` to `Failed`.
    pub fn can_transition_to(&self, next: InferenceState) -> bool {
        matches!(
            (self, next),
            (InferenceState::Pending, InferenceState::Running)
                | (InferenceState::Pending, InferenceState::Failed)
                | (InferenceState::Running, InferenceState::Succeeded)
                | (InferenceState::Running, InferenceState::Failed)
        )
    }
}

impl fmt::Display for InferenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

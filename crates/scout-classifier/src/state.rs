use scout_core::models::ClassificationState;
use tracing::warn;

/// Tracks the classification state and the trail of states visited.
#[derive(Debug, Clone)]
pub struct StateMachine {
    state: ClassificationState,
    trail: Vec<ClassificationState>,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            state: ClassificationState::Unclassified,
            trail: vec![ClassificationState::Unclassified],
        }
    }

    /// Move to `next` if the transition is legal. Illegal transitions are
    /// logged and ignored.
    pub fn advance(&mut self, next: ClassificationState) -> bool {
        if !self.state.can_transition_to(next) {
            warn!(from = ?self.state, to = ?next, "illegal classification state transition");
            return false;
        }
        self.state = next;
        self.trail.push(next);
        true
    }

    pub fn state(&self) -> ClassificationState {
        self.state
    }

    pub fn into_trail(self) -> Vec<ClassificationState> {
        self.trail
    }
}

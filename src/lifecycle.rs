//! Caller-owned request lifecycle state.
//!
//! The orchestrator itself is stateless between calls; the UI (or CLI)
//! owns a single panel slot that moves idle → pending → done. Overlapping
//! generations are allowed: whichever settlement arrives last overwrites
//! the slot, an accepted race for a single-user interactive tool.

use crate::models::StoryResult;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    #[default]
    Idle,
    Pending,
    Done(StoryResult),
}

/// Single display slot for the story panel. Single-writer (whoever drives
/// generation), single-reader (the rendering layer).
#[derive(Debug, Default)]
pub struct StoryPanel {
    state: PanelState,
}

impl StoryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, PanelState::Pending)
    }

    /// Mark a generation as in flight. Re-entrant: calling while already
    /// pending abandons the earlier in-flight work without cancelling it.
    pub fn begin(&mut self) {
        self.state = PanelState::Pending;
    }

    /// Record a settled generation. Unconditional: the last settlement to
    /// arrive wins, regardless of which invocation started first.
    pub fn settle(&mut self, result: StoryResult) {
        self.state = PanelState::Done(result);
    }

    /// The currently displayed story, if any.
    pub fn story(&self) -> Option<&StoryResult> {
        match &self.state {
            PanelState::Done(result) => Some(result),
            _ => None,
        }
    }
}

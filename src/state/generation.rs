#[cfg(test)]
#[path = "generation_test.rs"]
mod generation_test;

/// Lifecycle of a single generation submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GenerationPhase {
    #[default]
    Idle,
    /// Prompt posted, waiting for the generation id.
    Submitting,
    /// Generation id received, artifact download in progress.
    AwaitingDownload { generation_id: String },
    Done,
    Failed,
}

/// State for the generation view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerationState {
    pub phase: GenerationPhase,
}

impl GenerationState {
    /// Whether a submission is currently in flight. The submit control is
    /// disabled while this holds, which is the only duplicate-submission
    /// guard.
    pub fn in_flight(&self) -> bool {
        matches!(
            self.phase,
            GenerationPhase::Submitting | GenerationPhase::AwaitingDownload { .. }
        )
    }

    pub fn can_submit(&self) -> bool {
        !self.in_flight()
    }

    /// Enter `Submitting`. Returns `false` (and leaves the phase alone) if
    /// a submission is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.in_flight() {
            return false;
        }
        self.phase = GenerationPhase::Submitting;
        true
    }

    /// Accept the generation id returned by the chat endpoint. Only legal
    /// from `Submitting`.
    pub fn accept_generation(&mut self, generation_id: String) -> bool {
        if self.phase != GenerationPhase::Submitting {
            return false;
        }
        self.phase = GenerationPhase::AwaitingDownload { generation_id };
        true
    }

    pub fn complete(&mut self) {
        self.phase = GenerationPhase::Done;
    }

    pub fn fail(&mut self) {
        self.phase = GenerationPhase::Failed;
    }
}

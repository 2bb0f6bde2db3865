/// What the orchestrator did with the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Value sealed and written
    Written,
    /// Secret existed and overwrite was off
    Skipped,
}

/// Result of one upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the secret was present before this run
    pub existed: bool,
    pub action: Action,
}

impl Outcome {
    /// Whether a write request was issued.
    pub fn written(&self) -> bool {
        self.action == Action::Written
    }
}

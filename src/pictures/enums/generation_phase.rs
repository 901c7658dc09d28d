#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    Validating,
    PromptReady,
    Calling,
    Streaming,
    Completed,
    Failed,
}

impl GenerationPhase {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Validating => "validating",
            Self::PromptReady => "prompt_ready",
            Self::Calling => "calling",
            Self::Streaming => "streaming",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

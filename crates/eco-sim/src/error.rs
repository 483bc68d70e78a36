use eco_core::EcoError;
use eco_sync::SyncError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] EcoError),

    #[error("barrier error: {0}")]
    Sync(#[from] SyncError),

    #[error("team has {agents} agents but the barrier expects {parties} participants")]
    PartyMismatch {
        agents:  usize,
        parties: usize,
    },

    #[error("failed to spawn thread for agent `{name}`: {source}")]
    Spawn {
        name:   String,
        #[source]
        source: std::io::Error,
    },

    #[error("agent `{name}` panicked")]
    AgentPanicked { name: String },

    #[error("agents finished after different numbers of rounds: {rounds:?}")]
    TerminationSkew { rounds: Vec<(String, u64)> },
}

pub type SimResult<T> = Result<T, SimError>;

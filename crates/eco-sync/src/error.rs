use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("a barrier needs at least one participant")]
    NoParticipants,
}

pub type SyncResult<T> = Result<T, SyncError>;

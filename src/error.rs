use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueueError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    #[error("failed to allocate {size} bytes")]
    AllocFailed { size: usize },

    #[error("queue is absent")]
    Absent,

    #[error("queue is empty")]
    Empty,
}

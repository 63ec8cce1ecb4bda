use thiserror::Error;

/// Why a [`RingQueue`](crate::RingQueue) operation was rejected.
///
/// A rejected operation never mutates the queue, so every variant is
/// recoverable by the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("the queue is full ({capacity} elements)")]
    Full { capacity: usize },

    #[error("the queue is empty")]
    Empty,

    #[error("invalid position {position}, expected a value in 1..={len}")]
    InvalidPosition { position: i16, len: usize },
}

pub type Result<T, E = QueueError> = std::result::Result<T, E>;

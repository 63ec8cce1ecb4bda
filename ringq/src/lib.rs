pub mod error;
pub mod ring_queue;

pub use error::{QueueError, Result};
pub use ring_queue::{DebugSnapshot, RingQueue, Status, DEFAULT_CAPACITY};

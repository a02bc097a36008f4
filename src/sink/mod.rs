pub mod log;
pub mod memory;

use async_trait::async_trait;
use crate::core::{Notification, RoomId};
use crate::error::Result;

pub use log::LogSink;
pub use memory::{Delivery, MemorySink};

/// Trait for delivering replies back to a chat room
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Deliver a notification to `room`
    async fn send(&self, room: &RoomId, notification: &Notification) -> Result<()>;

    /// Get sink name for logging
    fn name(&self) -> &str;
}

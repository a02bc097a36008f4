use async_trait::async_trait;

use crate::core::{Notification, RoomId};
use crate::error::Result;
use crate::sink::MessageSink;

/// Sink that only logs, for running without a chat transport
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageSink for LogSink {
    async fn send(&self, room: &RoomId, notification: &Notification) -> Result<()> {
        tracing::info!(
            room = %room,
            color = notification.color.as_str(),
            "{}",
            notification.message
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::{Notification, RoomId};
use crate::error::{LadderError, Result};
use crate::sink::MessageSink;

/// One delivered notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub room: RoomId,
    pub notification: Notification,
}

/// Sink that keeps every delivery in memory.
///
/// Clones share the same record, so a test can hand one clone to the bot
/// and inspect the other.
#[derive(Clone, Default)]
pub struct MemorySink {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
    fail: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that rejects every delivery (for exercising error paths)
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<Delivery> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

#[async_trait]
impl MessageSink for MemorySink {
    async fn send(&self, room: &RoomId, notification: &Notification) -> Result<()> {
        if self.fail {
            return Err(LadderError::Sink {
                sink: self.name().to_string(),
                message: format!("delivery to room {} refused", room),
            });
        }

        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Delivery {
                room: room.clone(),
                notification: notification.clone(),
            });
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

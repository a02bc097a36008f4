use std::sync::Arc;

use crate::core::{Notification, RoomMessage, WebhookPayload};
use crate::engine::LadderEngine;
use crate::error::Result;
use crate::sink::MessageSink;

/// Connects the ladder engine to a chat room.
///
/// Each event is handled synchronously by the engine; only delivery of the
/// reply is awaited. A failed delivery is logged and otherwise ignored.
pub struct LadderBot {
    engine: Arc<LadderEngine>,
    sink: Arc<dyn MessageSink>,
}

impl LadderBot {
    pub fn new(engine: Arc<LadderEngine>, sink: Arc<dyn MessageSink>) -> Self {
        Self { engine, sink }
    }

    pub fn engine(&self) -> &Arc<LadderEngine> {
        &self.engine
    }

    /// Handle a message and deliver the reply to its room
    pub async fn handle(&self, event: &RoomMessage) -> Notification {
        let notification = self.engine.handle_event(event);

        if let Err(e) = self.sink.send(&event.room_id, &notification).await {
            tracing::error!(
                "❌ Sink {} failed for room {}: {}",
                self.sink.name(),
                event.room_id,
                e
            );
        }

        notification
    }

    /// Decode a raw webhook body and handle it.
    ///
    /// Only an undecodable body is an error; rejected match reports still
    /// produce a (red) notification.
    pub async fn handle_payload(&self, body: &str) -> Result<Notification> {
        let payload: WebhookPayload = serde_json::from_str(body)?;
        let event = RoomMessage::from(payload);
        Ok(self.handle(&event).await)
    }
}

pub mod event;
pub mod mention;
pub mod notification;

pub use event::{RoomId, RoomMessage, WebhookPayload};
pub use mention::{Mention, Mentions};
pub use notification::{MessageColor, Notification};

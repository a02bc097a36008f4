//! # TT Ladder
//!
//! Table-tennis ladder for chat bots:
//! - Match reports parsed from `/TT @Winner beats @Loser`
//! - One ranking table per room, adjusted by adjacent swaps
//! - Standings and error replies ready for the chat platform
//! - Pluggable message sinks for delivery
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tt_ladder::{LadderBot, LadderConfig, LadderEngine, Mention, RoomMessage};
//! use tt_ladder::sink::LogSink;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = Arc::new(LadderEngine::new(LadderConfig::from_env()?));
//!     let bot = LadderBot::new(engine, Arc::new(LogSink::new()));
//!
//!     let event = RoomMessage::new("lobby", "/TT @alice beats @bob")
//!         .with_mentions(vec![
//!             Mention::new("Alice", "@alice"),
//!             Mention::new("Bob", "@bob"),
//!         ]);
//!
//!     let reply = bot.handle(&event).await;
//!     println!("{}", reply.message);
//!     Ok(())
//! }
//! ```

pub mod bot;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod format;
pub mod parser;
pub mod ranking;
pub mod sink;

// Re-export primary types
pub use bot::LadderBot;
pub use config::LadderConfig;
pub use crate::core::{
    Mention, Mentions, MessageColor, Notification, RoomId, RoomMessage, WebhookPayload,
};
pub use engine::LadderEngine;
pub use error::{LadderError, ParseError, Result};
pub use parser::{MatchOutcome, ParsedCommand};
pub use ranking::{LadderPolicy, RankingPolicy, RankingTable};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tt_ladder::{
    parser::parse_command, sink::MessageSink, LadderBot, LadderConfig, LadderEngine, Mention,
    Mentions, Notification, ParsedCommand, RoomId,
};

#[derive(Parser)]
#[command(name = "tt-ladder-cli")]
#[command(about = "TT Ladder CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Slash command quoted in usage hints (overrides TT_COMMAND)
    #[arg(long = "command", global = true)]
    slash_command: Option<String>,

    /// Keyword that requests standings (overrides TT_RANKINGS_KEYWORD)
    #[arg(long, global = true)]
    rankings_keyword: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay webhook payloads (one JSON document per line)
    Replay {
        /// Payload file, stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print every room's final standings
        #[arg(long)]
        standings: bool,
    },

    /// Show how a message would be interpreted, without recording anything
    Parse {
        /// Raw message text
        text: String,

        /// Tagged player as NAME=MARKER (repeatable)
        #[arg(short, long = "mention", value_parser = parse_mention)]
        mentions: Vec<Mention>,
    },
}

fn parse_mention(raw: &str) -> Result<Mention, String> {
    match raw.split_once('=') {
        Some((name, marker)) if !name.is_empty() && !marker.is_empty() => {
            Ok(Mention::new(name, marker))
        }
        _ => Err(format!("expected NAME=MARKER, got {:?}", raw)),
    }
}

/// Prints replies to stdout
struct ConsoleSink;

#[async_trait]
impl MessageSink for ConsoleSink {
    async fn send(&self, room: &RoomId, notification: &Notification) -> tt_ladder::Result<()> {
        println!(
            "[{}] ({}) {}",
            room,
            notification.color.as_str(),
            notification.message
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tt_ladder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = LadderConfig::from_env()?;
    if let Some(command) = cli.slash_command {
        config = config.with_command(command)?;
    }
    if let Some(keyword) = cli.rankings_keyword {
        config = config.with_rankings_keyword(keyword)?;
    }

    match cli.command {
        Commands::Replay { input, standings } => {
            let reader: Box<dyn BufRead> = match &input {
                Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
                None => Box::new(BufReader::new(std::io::stdin())),
            };

            let engine = Arc::new(LadderEngine::new(config));
            let bot = LadderBot::new(engine.clone(), Arc::new(ConsoleSink));

            let mut handled = 0usize;
            for (line_no, line) in reader.lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match bot.handle_payload(&line).await {
                    Ok(_) => handled += 1,
                    Err(e) => tracing::warn!("⚠️ Skipping line {}: {}", line_no + 1, e),
                }
            }

            tracing::info!("✅ Replayed {} events", handled);

            if standings {
                println!("\n📋 Final standings:");
                for room in engine.rooms() {
                    println!("   Room {}:", room);
                    for (i, player) in engine.standings(&room).iter().enumerate() {
                        println!("      {}. {}", i + 1, player);
                    }
                }
            }
        }

        Commands::Parse { text, mentions } => {
            let mentions = (!mentions.is_empty()).then(|| Mentions::List(mentions));

            match parse_command(&text, mentions.as_ref(), &config.rankings_keyword) {
                ParsedCommand::ShowRankings => println!("📋 Standings query"),
                ParsedCommand::ReportMatch { winner, loser } => {
                    println!("🏓 Match report");
                    println!("   Winner: {}", winner);
                    println!("   Loser: {}", loser);
                }
                ParsedCommand::ParseError { reason } => {
                    println!("❌ {} {}", reason, config.usage_hint());
                }
            }
        }
    }

    Ok(())
}

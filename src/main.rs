use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use scam_honeypot::application::engine::EngagementEngine;
use scam_honeypot::config::EngineConfig;
use scam_honeypot::domain::message::MessageEvent;
use scam_honeypot::domain::ports::ConversationStoreBox;
use scam_honeypot::domain::score::Score;
use scam_honeypot::infrastructure::in_memory::InMemoryConversationStore;
use scam_honeypot::interfaces::csv::message_reader::MessageReader;
use scam_honeypot::interfaces::jsonl::event_reader::EventReader;
use scam_honeypot::interfaces::jsonl::response_writer::ResponseWriter;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InputFormat {
    /// `conversation_id,message,timestamp` rows with a header line
    Csv,
    /// One JSON event object per line
    Jsonl,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file of message events
    input: PathBuf,

    /// Layout of the input file
    #[arg(long, value_enum, default_value_t = InputFormat::Csv)]
    format: InputFormat,

    /// Confidence at which a conversation switches to the bait reply
    #[arg(long, default_value = "0.3", value_parser = parse_score)]
    activation_threshold: Score,

    /// Score added per matched scam keyword
    #[arg(long, default_value = "0.15", value_parser = parse_score)]
    keyword_weight: Score,

    /// Leave bank account numbers out of the extracted intelligence
    #[arg(long)]
    no_bank_accounts: bool,

    /// Do not run the outgoing reply through the extractor
    #[arg(long)]
    no_reply_scan: bool,
}

fn parse_score(raw: &str) -> std::result::Result<Score, String> {
    let value = Decimal::from_str(raw.trim()).map_err(|e| e.to_string())?;
    Score::new(value).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = EngineConfig::default()
        .with_activation_threshold(cli.activation_threshold)
        .with_keyword_weight(cli.keyword_weight)
        .with_bank_accounts(!cli.no_bank_accounts)
        .with_reply_scan(!cli.no_reply_scan);

    let store: ConversationStoreBox = Box::new(InMemoryConversationStore::new());
    let engine = EngagementEngine::new(store, config).into_diagnostic()?;

    let file = File::open(&cli.input).into_diagnostic()?;
    let events: Box<dyn Iterator<Item = scam_honeypot::error::Result<MessageEvent>>> =
        match cli.format {
            InputFormat::Csv => Box::new(MessageReader::new(file).events()),
            InputFormat::Jsonl => Box::new(EventReader::new(BufReader::new(file)).events()),
        };

    let stdout = io::stdout();
    let mut writer = ResponseWriter::new(stdout.lock());

    for event in events {
        match event {
            Ok(event) => match engine.handle(event).await {
                Ok(response) => writer.write_response(&response).into_diagnostic()?,
                Err(e) => log::error!("Error processing message: {}", e),
            },
            Err(e) => log::error!("Error reading message: {}", e),
        }
    }
    writer.flush().into_diagnostic()?;

    let conversations = engine.into_results().await.into_diagnostic()?;
    let activated = conversations.iter().filter(|(_, s)| s.active).count();
    log::info!(
        "Processed {} conversations, {} activated",
        conversations.len(),
        activated
    );

    Ok(())
}

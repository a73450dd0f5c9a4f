use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use teloxide::types::ChatId;
use teloxide::Bot;
use tracing::{error, info};

use hw_watchbot::api::PracticumClient;
use hw_watchbot::config::Config;
use hw_watchbot::notify::TelegramNotifier;
use hw_watchbot::poller::{Poller, RETRY_PERIOD};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seconds to sleep between poll cycles
    #[arg(long, default_value_t = RETRY_PERIOD.as_secs())]
    interval: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("cannot start: {err}");
            std::process::exit(1);
        }
    };

    let client = PracticumClient::new(cfg.practicum_token);
    let notifier = TelegramNotifier::new(Bot::new(cfg.telegram_token), ChatId(cfg.chat_id));
    let start_cursor = chrono::Utc::now().timestamp();

    info!("starting homework status poller");
    let mut poller = Poller::new(&client, &notifier, start_cursor);
    poller.run(Duration::from_secs(args.interval)).await;

    Ok(())
}

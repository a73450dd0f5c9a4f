use anyhow::{Context, Result};
use async_trait::async_trait;
use teloxide::requests::Requester;
use teloxide::types::ChatId;
use teloxide::Bot;

/// Outbound notification capability. The poller only ever needs
/// "send this text somewhere".
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}

/// Sends to one fixed Telegram chat.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        self.bot
            .send_message(self.chat_id, text)
            .await
            .context("telegram send_message failed")?;
        Ok(())
    }
}

//! The control loop: fetch, validate, interpret, notify, sleep, repeat.
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error};

use crate::api::{self, StatusApi};
use crate::error::PollError;
use crate::model;
use crate::notify::Notifier;

/// Flat delay between cycles, applied regardless of outcome.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Owns the poll cursor and the last delivered notification text.
/// Everything else is borrowed, so tests can hand in scripted services.
pub struct Poller<'a> {
    api: &'a dyn StatusApi,
    notifier: &'a dyn Notifier,
    cursor: i64,
    last_message: Option<String>,
}

impl<'a> Poller<'a> {
    pub fn new(api: &'a dyn StatusApi, notifier: &'a dyn Notifier, start_cursor: i64) -> Self {
        Self {
            api,
            notifier,
            cursor: start_cursor,
            last_message: None,
        }
    }

    /// Lower bound of the next fetch window.
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Text of the most recently delivered notification, if any.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Runs cycles forever with a fixed sleep in between. No backoff and
    /// no failure cap; the next cycle is the retry.
    pub async fn run(&mut self, interval: Duration) {
        loop {
            self.run_cycle().await;
            sleep(interval).await;
        }
    }

    /// One poll cycle. Recoverable failures become a diagnostic
    /// notification here and never escape.
    pub async fn run_cycle(&mut self) {
        match self.poll_once().await {
            Ok(Some(message)) => self.notify_if_changed(message).await,
            Ok(None) => debug!("no homework entries this cycle"),
            Err(err) => {
                let message = format!("Сбой в работе программы: {err}");
                error!("{message}");
                self.notify_if_changed(message).await;
            }
        }
    }

    async fn poll_once(&mut self) -> Result<Option<String>, PollError> {
        let response = self.api.fetch(self.cursor).await?;
        // The server-acknowledged cursor is taken even when the rest of
        // the body fails validation; a missing one keeps the old window.
        if let Some(current_date) = response.get("current_date").and_then(Value::as_i64) {
            self.cursor = current_date;
        }
        let homeworks = api::check_response(&response)?;
        let Some(latest) = homeworks.first() else {
            return Ok(None);
        };
        Ok(Some(model::parse_status(latest)?))
    }

    /// Sends `message` unless it matches the last delivered text. A send
    /// failure is logged and swallowed; since `last_message` stays
    /// unchanged, the next cycle tries the same text again.
    async fn notify_if_changed(&mut self, message: String) {
        if self.last_message.as_deref() == Some(message.as_str()) {
            debug!("message unchanged, nothing to send");
            return;
        }
        match self.notifier.send(&message).await {
            Ok(()) => {
                debug!(%message, "notification sent");
                self.last_message = Some(message);
            }
            Err(err) => error!(?err, "failed to send notification"),
        }
    }
}

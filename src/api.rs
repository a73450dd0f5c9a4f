//! Client for the Practicum homework status endpoint, plus the shape
//! checks a response must pass before it is trusted.
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use crate::error::PollError;
use crate::model::HomeworkRecord;

const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// How a response with zero homework entries is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyListPolicy {
    /// Surface it as a shape error, so it reaches the chat as a diagnostic.
    Report,
    /// Treat the cycle as a quiet no-op.
    Ignore,
}

/// Single place to flip if an empty list should stop being reportable.
pub const EMPTY_LIST_POLICY: EmptyListPolicy = EmptyListPolicy::Report;

#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Fetches homework updates since `from_date` (Unix seconds). Returns
    /// the decoded body untyped; `check_response` owns the shape checks.
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

pub struct PracticumClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl PracticumClient {
    pub fn new(token: String) -> Self {
        let base_url = Url::parse(ENDPOINT).expect("valid default endpoint URL");
        Self::with_base_url(token, base_url)
    }

    pub fn with_base_url(token: String, base_url: Url) -> Self {
        let http = Client::builder()
            .user_agent("hw-watchbot/0.1")
            .build()
            .expect("reqwest client");
        Self {
            http,
            base_url,
            token,
        }
    }
}

#[async_trait]
impl StatusApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        let res = self
            .http
            .get(self.base_url.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(PollError::Connection)?;
        if res.status() != StatusCode::OK {
            return Err(PollError::WrongStatus(res.status()));
        }
        let body = res.text().await.map_err(PollError::Connection)?;
        serde_json::from_str(&body).map_err(PollError::Format)
    }
}

/// Validates the decoded response and pulls out the homework entries,
/// newest first, exactly as the server ordered them.
pub fn check_response(response: &Value) -> Result<Vec<HomeworkRecord>, PollError> {
    let object = response
        .as_object()
        .ok_or(PollError::Shape("response is not a JSON object"))?;
    let homeworks = object
        .get("homeworks")
        .ok_or(PollError::Shape("response has no `homeworks` key"))?;
    let list = homeworks
        .as_array()
        .ok_or(PollError::Shape("`homeworks` is not an array"))?;
    if list.is_empty() {
        return match EMPTY_LIST_POLICY {
            EmptyListPolicy::Report => Err(PollError::Shape("homework list is empty")),
            EmptyListPolicy::Ignore => Ok(Vec::new()),
        };
    }
    list.iter()
        .map(|entry| {
            serde_json::from_value(entry.clone())
                .map_err(|_| PollError::Shape("malformed homework entry"))
        })
        .collect()
}

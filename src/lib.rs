//! Polls the Practicum homework status API and reports review-status
//! changes to a fixed Telegram chat.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod notify;
pub mod poller;

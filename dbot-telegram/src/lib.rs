//! # dbot-telegram
//!
//! Telegram layer: teloxide → core type adapters, a [`dbot_core::Bot`] implementation, and
//! minimal configuration. Polling and dispatch stay with the application.

mod adapters;
mod bot_adapter;
mod config;

pub use adapters::{
    TelegramCallbackQueryWrapper, TelegramInlineQueryWrapper, TelegramMessageWrapper,
    TelegramUpdateWrapper, TelegramUserWrapper,
};
pub use bot_adapter::{parse_message_id, TelegramBotAdapter};
pub use config::TelegramConfig;

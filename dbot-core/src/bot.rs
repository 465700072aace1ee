//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; the teloxide implementation lives in `dbot-telegram`.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Message;

/// Per-request send options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendOptions {
    pub disable_link_preview: bool,
}

impl SendOptions {
    pub fn without_link_preview() -> Self {
        Self {
            disable_link_preview: true,
        }
    }
}

/// Abstraction for replying to messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply to the given message (same chat, quoting it).
    async fn reply_to(&self, message: &Message, text: &str, options: SendOptions) -> Result<()>;
}

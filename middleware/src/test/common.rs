//! Shared fixtures: update builders, a recording mock [`Bot`], and scripted endpoints.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dbot_core::{
    Bot, CallbackQuery, Chat, ChatType, Context, Handler, HandlerError, HandlerResponse,
    InlineQuery, Message, MessageDirection, Result, SendOptions, Update, User,
};

pub fn sample_user(username: Option<&str>) -> User {
    User {
        id: 100,
        username: username.map(str::to_string),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

pub fn sample_message(text: Option<&str>) -> Message {
    Message {
        id: "77".to_string(),
        user: sample_user(Some("testuser")),
        chat: Chat {
            id: 555,
            chat_type: ChatType::Private,
        },
        text: text.map(str::to_string),
        caption: None,
        media: Vec::new(),
        direction: MessageDirection::Incoming,
        reply_to_message_id: None,
    }
}

pub fn callback(data: &str, with_message: bool) -> Update {
    Update::CallbackQuery(CallbackQuery {
        id: "cq-1".to_string(),
        user: sample_user(Some("testuser")),
        message: with_message.then(|| sample_message(Some("Choose:"))),
        data: Some(data.to_string()),
    })
}

pub fn inline(query: &str) -> Update {
    Update::InlineQuery(InlineQuery {
        id: "iq-1".to_string(),
        user: sample_user(None),
        query: query.to_string(),
    })
}

/// One recorded `reply_to` call.
#[derive(Debug, Clone)]
pub struct ReplyRecord {
    pub chat_id: i64,
    pub message_id: String,
    pub text: String,
    pub options: SendOptions,
}

/// Mock Bot that records replies; `fail` makes every send return an error.
#[derive(Default)]
pub struct MockBot {
    pub replies: Mutex<Vec<ReplyRecord>>,
    pub fail: bool,
}

impl MockBot {
    pub fn failing() -> Self {
        Self {
            replies: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn replies(&self) -> Vec<ReplyRecord> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn reply_to(&self, message: &Message, text: &str, options: SendOptions) -> Result<()> {
        if self.fail {
            return Err(dbot_core::DbotError::Bot("network down".to_string()));
        }
        self.replies.lock().unwrap().push(ReplyRecord {
            chat_id: message.chat.id,
            message_id: message.id.clone(),
            text: text.to_string(),
            options,
        });
        Ok(())
    }
}

/// What the scripted endpoint returns.
#[derive(Clone, Copy)]
pub enum Outcome {
    Respond(HandlerResponse),
    Fail,
}

/// Endpoint standing in for the rest of the handler chain.
pub struct ScriptedHandler {
    outcome: Outcome,
    calls: AtomicUsize,
}

impl ScriptedHandler {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Handler for ScriptedHandler {
    async fn handle(&self, _ctx: &Context, _update: &Update) -> Result<HandlerResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            Outcome::Respond(response) => Ok(response),
            Outcome::Fail => Err(HandlerError::InvalidCommand("/boom".to_string()).into()),
        }
    }
}

pub fn shared(bot: MockBot) -> Arc<MockBot> {
    Arc::new(bot)
}

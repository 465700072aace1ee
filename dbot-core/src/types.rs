//! Core types: user, chat, message, callback/inline queries, the [`Update`] envelope
//! and the dispatch result returned by handlers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// `https://t.me/<username>` when the user has a public username.
    pub fn deep_link(&self) -> Option<String> {
        self.username
            .as_deref()
            .filter(|u| !u.is_empty())
            .map(|u| format!("https://t.me/{}", u))
    }
}

/// Kind of chat a message was sent in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Private,
    Group,
    Supergroup,
    Channel,
}

/// Chat (channel, group or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: ChatType,
}

impl Chat {
    pub fn is_private(&self) -> bool {
        self.chat_type == ChatType::Private
    }

    /// Basic groups and supergroups both count as groups.
    pub fn is_group(&self) -> bool {
        matches!(self.chat_type, ChatType::Group | ChatType::Supergroup)
    }
}

/// Attachment kinds, declared in the order the log middleware looks for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Audio,
    Document,
    Photo,
    Sticker,
    Animation,
    Video,
    Voice,
    VideoNote,
}

impl MediaKind {
    /// Label used in log records.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Audio => "Audio",
            MediaKind::Document => "Document",
            MediaKind::Photo => "Photo",
            MediaKind::Sticker => "Sticker",
            MediaKind::Animation => "Animation",
            MediaKind::Video => "Video",
            MediaKind::Voice => "Voice",
            MediaKind::VideoNote => "Video_note",
        }
    }
}

/// A file attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub kind: MediaKind,
    pub file_id: String,
}

impl Media {
    pub fn new(kind: MediaKind, file_id: impl Into<String>) -> Self {
        Self {
            kind,
            file_id: file_id.into(),
        }
    }
}

/// A single message with user, chat, text or caption, attachments and the replied-to id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub text: Option<String>,
    pub caption: Option<String>,
    #[serde(default)]
    pub media: Vec<Media>,
    pub direction: MessageDirection,
    pub reply_to_message_id: Option<String>,
}

impl Message {
    /// Text if non-empty, otherwise the caption if non-empty.
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.caption.as_deref().filter(|c| !c.is_empty()))
    }

    pub fn is_incoming(&self) -> bool {
        matches!(self.direction, MessageDirection::Incoming)
    }

    pub fn is_reply(&self) -> bool {
        self.reply_to_message_id.is_some()
    }

    /// First attachment in [`MediaKind`] order.
    pub fn primary_media(&self) -> Option<&Media> {
        self.media.iter().min_by_key(|m| m.kind)
    }
}

/// Direction of the message (from user or from bot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageDirection {
    Incoming,
    Outgoing,
}

/// A pressed inline-keyboard button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub user: User,
    /// Message the button was attached to; absent for buttons on inline-mode messages.
    pub message: Option<Message>,
    /// Raw button payload.
    pub data: Option<String>,
}

/// Inline-mode query typed after the bot's username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub user: User,
    pub query: String,
}

/// Incoming update handed to filters, middleware and handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Update {
    Message(Message),
    CallbackQuery(CallbackQuery),
    InlineQuery(InlineQuery),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateKind {
    Message,
    CallbackQuery,
    InlineQuery,
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpdateKind::Message => "Message",
            UpdateKind::CallbackQuery => "CallbackQuery",
            UpdateKind::InlineQuery => "InlineQuery",
        };
        f.write_str(name)
    }
}

impl Update {
    pub fn kind(&self) -> UpdateKind {
        match self {
            Update::Message(_) => UpdateKind::Message,
            Update::CallbackQuery(_) => UpdateKind::CallbackQuery,
            Update::InlineQuery(_) => UpdateKind::InlineQuery,
        }
    }

    /// Sender of the update.
    pub fn user(&self) -> &User {
        match self {
            Update::Message(m) => &m.user,
            Update::CallbackQuery(q) => &q.user,
            Update::InlineQuery(q) => &q.user,
        }
    }

    pub fn as_message(&self) -> Option<&Message> {
        match self {
            Update::Message(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_callback_query(&self) -> Option<&CallbackQuery> {
        match self {
            Update::CallbackQuery(q) => Some(q),
            _ => None,
        }
    }

    /// Message a reply to this update should go to: the message itself, or the message
    /// carrying the pressed button. Inline queries have none.
    pub fn reply_target(&self) -> Option<&Message> {
        match self {
            Update::Message(m) => Some(m),
            Update::CallbackQuery(q) => q.message.as_ref(),
            Update::InlineQuery(_) => None,
        }
    }
}

impl From<Message> for Update {
    fn from(message: Message) -> Self {
        Update::Message(message)
    }
}

impl From<CallbackQuery> for Update {
    fn from(query: CallbackQuery) -> Self {
        Update::CallbackQuery(query)
    }
}

impl From<InlineQuery> for Update {
    fn from(query: InlineQuery) -> Self {
        Update::InlineQuery(query)
    }
}

/// Result of running a handler or the rest of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResponse {
    /// The update was handled; dispatch ends here.
    Handled,
    /// Pass the update on to the next matching handler.
    Continue,
    /// Stop all further handling of this update.
    Stop,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Converts a transport-specific update to a core [`Update`]; `None` for update kinds
/// this crate does not model.
pub trait ToCoreUpdate: Send + Sync {
    fn to_core(&self) -> Option<Update>;
}

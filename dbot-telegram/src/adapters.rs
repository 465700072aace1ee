//! Adapters from Telegram (teloxide) types to dbot_core types.
//! Depends only on teloxide and dbot_core type definitions.

use dbot_core::{
    CallbackQuery, Chat, ChatType, InlineQuery, Media, MediaKind, Message, MessageDirection,
    ToCoreMessage, ToCoreUpdate, ToCoreUser, Update, User,
};
use teloxide::types::UpdateKind as TgUpdateKind;

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            id: self.0.id.0.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: self.0.chat.id.0,
                chat_type: self.chat_type(),
            },
            text: self.0.text().map(str::to_string),
            caption: self.0.caption().map(str::to_string),
            media: self.media(),
            direction: MessageDirection::Incoming,
            reply_to_message_id: self.get_reply_to_message_id(),
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_type(&self) -> ChatType {
        let chat = &self.0.chat;
        if chat.is_private() {
            ChatType::Private
        } else if chat.is_supergroup() {
            ChatType::Supergroup
        } else if chat.is_group() {
            ChatType::Group
        } else {
            ChatType::Channel
        }
    }

    /// Attachments as (kind, file id). Photos use the largest size.
    fn media(&self) -> Vec<Media> {
        let msg = self.0;
        let mut media = Vec::new();
        if let Some(audio) = msg.audio() {
            media.push(Media::new(MediaKind::Audio, audio.file.id.to_string()));
        }
        if let Some(document) = msg.document() {
            media.push(Media::new(MediaKind::Document, document.file.id.to_string()));
        }
        if let Some(photo) = msg.photo().and_then(|sizes| sizes.last()) {
            media.push(Media::new(MediaKind::Photo, photo.file.id.to_string()));
        }
        if let Some(sticker) = msg.sticker() {
            media.push(Media::new(MediaKind::Sticker, sticker.file.id.to_string()));
        }
        if let Some(animation) = msg.animation() {
            media.push(Media::new(MediaKind::Animation, animation.file.id.to_string()));
        }
        if let Some(video) = msg.video() {
            media.push(Media::new(MediaKind::Video, video.file.id.to_string()));
        }
        if let Some(voice) = msg.voice() {
            media.push(Media::new(MediaKind::Voice, voice.file.id.to_string()));
        }
        if let Some(note) = msg.video_note() {
            media.push(Media::new(MediaKind::VideoNote, note.file.id.to_string()));
        }
        media
    }

    /// Returns the id of the replied-to message if present.
    fn get_reply_to_message_id(&self) -> Option<String> {
        self.0.reply_to_message().map(|msg| msg.id.0.to_string())
    }
}

/// Wraps a teloxide CallbackQuery. Buttons on inaccessible or inline-mode messages
/// convert without a message.
pub struct TelegramCallbackQueryWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> TelegramCallbackQueryWrapper<'a> {
    pub fn to_core(&self) -> CallbackQuery {
        CallbackQuery {
            id: self.0.id.to_string(),
            user: TelegramUserWrapper(&self.0.from).to_core(),
            message: self
                .0
                .regular_message()
                .map(|m| TelegramMessageWrapper(m).to_core()),
            data: self.0.data.clone(),
        }
    }
}

pub struct TelegramInlineQueryWrapper<'a>(pub &'a teloxide::types::InlineQuery);

impl<'a> TelegramInlineQueryWrapper<'a> {
    pub fn to_core(&self) -> InlineQuery {
        InlineQuery {
            id: self.0.id.to_string(),
            user: TelegramUserWrapper(&self.0.from).to_core(),
            query: self.0.query.clone(),
        }
    }
}

/// Wraps a teloxide Update; only messages, callback queries and inline queries convert.
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Update);

impl<'a> ToCoreUpdate for TelegramUpdateWrapper<'a> {
    fn to_core(&self) -> Option<Update> {
        match &self.0.kind {
            TgUpdateKind::Message(m) => Some(Update::Message(TelegramMessageWrapper(m).to_core())),
            TgUpdateKind::CallbackQuery(q) => {
                Some(Update::CallbackQuery(TelegramCallbackQueryWrapper(q).to_core()))
            }
            TgUpdateKind::InlineQuery(q) => {
                Some(Update::InlineQuery(TelegramInlineQueryWrapper(q).to_core()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tg_user() -> teloxide::types::User {
        teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        }
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = tg_user();

        let wrapper = TelegramUserWrapper(&user);
        let core_user = wrapper.to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
        assert_eq!(core_user.deep_link().as_deref(), Some("https://t.me/testuser"));
    }
}

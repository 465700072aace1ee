//! Update builders shared by the filter integration tests.

#![allow(dead_code)]

use dbot_core::{
    CallbackQuery, Chat, ChatType, InlineQuery, Media, Message, MessageDirection, Update, User,
};

pub fn user(id: i64) -> User {
    User {
        id,
        username: Some("test_user".to_string()),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

pub fn message(text: Option<&str>, chat_type: ChatType) -> Message {
    Message {
        id: "10".to_string(),
        user: user(123),
        chat: Chat {
            id: 456,
            chat_type,
        },
        text: text.map(str::to_string),
        caption: None,
        media: Vec::new(),
        direction: MessageDirection::Incoming,
        reply_to_message_id: None,
    }
}

pub fn text_update(text: &str) -> Update {
    Update::Message(message(Some(text), ChatType::Private))
}

pub fn group_text_update(text: &str) -> Update {
    Update::Message(message(Some(text), ChatType::Group))
}

pub fn media_update(media: Media, caption: Option<&str>) -> Update {
    let mut msg = message(None, ChatType::Private);
    msg.media = vec![media];
    msg.caption = caption.map(str::to_string);
    Update::Message(msg)
}

pub fn reply_update(text: &str, chat_type: ChatType) -> Update {
    let mut msg = message(Some(text), chat_type);
    msg.reply_to_message_id = Some("9".to_string());
    Update::Message(msg)
}

pub fn callback_update(data: Option<&str>) -> Update {
    Update::CallbackQuery(CallbackQuery {
        id: "cq".to_string(),
        user: user(123),
        message: Some(message(Some("Pick one"), ChatType::Private)),
        data: data.map(str::to_string),
    })
}

pub fn inline_update(query: &str) -> Update {
    Update::InlineQuery(InlineQuery {
        id: "iq".to_string(),
        user: user(123),
        query: query.to_string(),
    })
}

//! General-purpose filters over message shape and chat type.

use dbot_core::{Context, Update};

use crate::filter::{create, BoxFilter};

/// Matches every update.
pub fn all() -> BoxFilter {
    create("All", |_: &Context, _: &Update| true)
}

/// Incoming messages only.
pub fn incoming() -> BoxFilter {
    create("Incoming", |_: &Context, update: &Update| {
        update.as_message().is_some_and(|m| m.is_incoming())
    })
}

/// Messages that reply to another message.
pub fn reply() -> BoxFilter {
    create("Reply", |_: &Context, update: &Update| {
        update.as_message().is_some_and(|m| m.is_reply())
    })
}

/// Updates coming from a private chat. For callbacks this is the chat of the
/// message carrying the button.
pub fn private() -> BoxFilter {
    create("Private", |_: &Context, update: &Update| {
        update.reply_target().is_some_and(|m| m.chat.is_private())
    })
}

/// Updates coming from a group or supergroup.
pub fn group() -> BoxFilter {
    create("Group", |_: &Context, update: &Update| {
        update.reply_target().is_some_and(|m| m.chat.is_group())
    })
}

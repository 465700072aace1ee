//! # dbot-core
//!
//! Core types and traits shared by the bot utility crates: the [`Update`] envelope and its
//! message / callback / inline-query payloads, the per-request [`Context`], [`Handler`],
//! [`Middleware`] and [`Next`], the [`Bot`] send abstraction, errors, and tracing setup.
//! Transport-agnostic; `dbot-telegram` maps teloxide types onto these.

pub mod bot;
pub mod context;
pub mod error;
pub mod handler;
pub mod logger;
pub mod types;

pub use bot::{Bot, SendOptions};
pub use context::{Bucket, Context};
pub use error::{DbotError, HandlerError, Result};
pub use handler::{Handler, Middleware, Next};
pub use logger::init_tracing;
pub use types::{
    CallbackQuery, Chat, ChatType, HandlerResponse, InlineQuery, Media, MediaKind, Message,
    MessageDirection, ToCoreMessage, ToCoreUpdate, ToCoreUser, Update, UpdateKind, User,
};

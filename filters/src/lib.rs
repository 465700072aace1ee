//! # filters
//!
//! Composable predicates deciding which handler sees an update, and the command
//! descriptors ([`ChatCommand`], [`CallbackAction`]) that derive a filter from their own
//! name and options. Filters read session data only from the request [`dbot_core::Context`].

pub mod builtin;
pub mod command;
pub mod custom;
pub mod descriptor;
pub mod filter;

pub use builtin::{all, group, incoming, private, reply};
pub use command::{command, shell_split, slash_command_tokens, CommandFilter};
pub use custom::{
    admin, any_state, callback_data, group_reply_command, not_command, not_slash_command,
    private_reply_command, reply_command, state, AdminFilter, CallbackDataFilter,
    NotCommandFilter, StateFilter, ANY_STATE,
};
pub use descriptor::{CallbackAction, ChatCommand};
pub use filter::{create, BoxFilter, Filter, FnFilter};

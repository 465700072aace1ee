//! Session- and payload-aware filters: admin rights, callback actions, non-command text,
//! conversation state, and reply commands.

use dbot_core::{Context, Update};
use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::builtin::{group, incoming, private, reply};
use crate::command::command;
use crate::filter::{BoxFilter, Filter};

/// State value that matches any conversation state.
pub const ANY_STATE: &str = "*";

/// Sender is a bot administrator according to the request's bucket.
/// This is the system-level admin flag, not chat admin rights.
pub struct AdminFilter;

impl Filter for AdminFilter {
    fn check(&self, ctx: &Context, _update: &Update) -> bool {
        ctx.is_admin()
    }

    fn name(&self) -> &str {
        "AdminRights"
    }
}

pub fn admin() -> BoxFilter {
    BoxFilter::new(AdminFilter)
}

/// Callback whose data is `action` or `action?<query>`, ignoring case.
pub struct CallbackDataFilter {
    pattern: Option<Regex>,
}

impl CallbackDataFilter {
    pub fn new(action: &str) -> Self {
        let escaped = regex::escape(action);
        let pattern = RegexBuilder::new(&format!(r"^(?:{0}|{0}\?.*)$", escaped))
            .case_insensitive(true)
            .build()
            .map_err(|e| warn!(action = %action, error = %e, "Invalid callback action pattern"))
            .ok();
        Self { pattern }
    }
}

impl Filter for CallbackDataFilter {
    fn check(&self, _ctx: &Context, update: &Update) -> bool {
        let Some(pattern) = &self.pattern else {
            return false;
        };
        update
            .as_callback_query()
            .and_then(|q| q.data.as_deref())
            .is_some_and(|data| pattern.is_match(data))
    }

    fn name(&self) -> &str {
        "CallbackDataRegex"
    }
}

pub fn callback_data(action: &str) -> BoxFilter {
    BoxFilter::new(CallbackDataFilter::new(action))
}

/// Text or caption does not start with any of the prefixes. Updates without text
/// (media without caption, callbacks, inline queries) count as "not a command".
pub struct NotCommandFilter {
    prefixes: Vec<String>,
}

impl NotCommandFilter {
    pub fn new<P, Q>(prefixes: P) -> Self
    where
        P: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for NotCommandFilter {
    fn check(&self, _ctx: &Context, update: &Update) -> bool {
        let Some(text) = update.as_message().and_then(|m| m.text_or_caption()) else {
            return true;
        };
        !self.prefixes.iter().any(|p| text.starts_with(p.as_str()))
    }

    fn name(&self) -> &str {
        "CheckNotCommand"
    }
}

pub fn not_command<P, Q>(prefixes: P) -> BoxFilter
where
    P: IntoIterator<Item = Q>,
    Q: Into<String>,
{
    BoxFilter::new(NotCommandFilter::new(prefixes))
}

/// [`not_command`] with the `/` prefix.
pub fn not_slash_command() -> BoxFilter {
    not_command(["/"])
}

/// Conversation state is one of the configured states. `None` stands for "no state"
/// and is a valid member; [`ANY_STATE`] matches everything.
pub struct StateFilter {
    states: Vec<Option<String>>,
}

impl StateFilter {
    pub fn new<I, S>(states: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            states: states.into_iter().map(|s| s.map(Into::into)).collect(),
        }
    }

    pub fn any() -> Self {
        Self {
            states: vec![Some(ANY_STATE.to_string())],
        }
    }
}

impl Filter for StateFilter {
    fn check(&self, ctx: &Context, _update: &Update) -> bool {
        if self.states.iter().any(|s| s.as_deref() == Some(ANY_STATE)) {
            return true;
        }
        let current = ctx.user_state();
        self.states.iter().any(|s| s.as_deref() == current)
    }

    fn name(&self) -> &str {
        "CheckUserState"
    }
}

pub fn state<I, S>(states: I) -> BoxFilter
where
    I: IntoIterator<Item = Option<S>>,
    S: Into<String>,
{
    BoxFilter::new(StateFilter::new(states))
}

pub fn any_state() -> BoxFilter {
    BoxFilter::new(StateFilter::any())
}

/// Incoming reply invoking one of `commands`.
pub fn reply_command<C, S, P, Q>(commands: C, prefixes: P, case_sensitive: bool) -> BoxFilter
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
    P: IntoIterator<Item = Q>,
    Q: Into<String>,
{
    incoming() & reply() & command(commands, prefixes, case_sensitive)
}

/// [`reply_command`] in a private chat.
pub fn private_reply_command<C, S, P, Q>(
    commands: C,
    prefixes: P,
    case_sensitive: bool,
) -> BoxFilter
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
    P: IntoIterator<Item = Q>,
    Q: Into<String>,
{
    private() & reply_command(commands, prefixes, case_sensitive)
}

/// [`reply_command`] in a group or supergroup.
pub fn group_reply_command<C, S, P, Q>(
    commands: C,
    prefixes: P,
    case_sensitive: bool,
) -> BoxFilter
where
    C: IntoIterator<Item = S>,
    S: Into<String>,
    P: IntoIterator<Item = Q>,
    Q: Into<String>,
{
    group() & reply_command(commands, prefixes, case_sensitive)
}

//! Command descriptors: a command or callback action name plus the options its filter
//! is derived from.
//!
//! The derived filter ANDs, in order: the admin check (when required), the custom
//! filter (when given), then the kind-specific part: private chat and command match
//! for [`ChatCommand`], callback data match for [`CallbackAction`].

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::builtin::{all, private};
use crate::command::command;
use crate::custom::{admin, callback_data};
use crate::filter::BoxFilter;

#[derive(Clone, Default)]
struct Access {
    admin: bool,
    custom_filter: Option<BoxFilter>,
}

impl Access {
    fn parts(&self) -> Vec<BoxFilter> {
        let mut parts = Vec::new();
        if self.admin {
            parts.push(admin());
        }
        if let Some(custom) = &self.custom_filter {
            parts.push(custom.clone());
        }
        parts
    }
}

fn and_all(parts: Vec<BoxFilter>) -> BoxFilter {
    parts
        .into_iter()
        .reduce(|acc, f| acc & f)
        .unwrap_or_else(all)
}

/// A text command such as `start` behind a custom prefix (none by default).
/// Private-chat only and case-insensitive unless told otherwise.
#[derive(Clone)]
pub struct ChatCommand {
    command: String,
    prefixes: Vec<String>,
    private: bool,
    case_sensitive: bool,
    access: Access,
}

impl ChatCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            prefixes: vec![String::new()],
            private: true,
            case_sensitive: false,
            access: Access::default(),
        }
    }

    /// A `/command`.
    pub fn slash(command: impl Into<String>) -> Self {
        Self::new(command).prefix("/")
    }

    pub fn prefix(self, prefix: impl Into<String>) -> Self {
        self.prefixes([prefix])
    }

    /// An empty list falls back to the empty prefix.
    pub fn prefixes<P, Q>(mut self, prefixes: P) -> Self
    where
        P: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        self.prefixes = prefixes.into_iter().map(Into::into).collect();
        if self.prefixes.is_empty() {
            self.prefixes.push(String::new());
        }
        self
    }

    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Require the bot-level admin flag.
    pub fn admin(mut self, admin: bool) -> Self {
        self.access.admin = admin;
        self
    }

    pub fn custom_filter(mut self, filter: impl Into<BoxFilter>) -> Self {
        self.access.custom_filter = Some(filter.into());
        self
    }

    pub fn as_str(&self) -> &str {
        &self.command
    }

    pub fn filter(&self) -> BoxFilter {
        let mut parts = self.access.parts();
        if self.private {
            parts.push(private());
        }
        parts.push(command(
            [self.command.as_str()],
            self.prefixes.iter().cloned(),
            self.case_sensitive,
        ));
        and_all(parts)
    }
}

/// An inline-button action. Its string is the action name embedded in callback data.
#[derive(Clone)]
pub struct CallbackAction {
    action: String,
    access: Access,
}

impl CallbackAction {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            access: Access::default(),
        }
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.access.admin = admin;
        self
    }

    pub fn custom_filter(mut self, filter: impl Into<BoxFilter>) -> Self {
        self.access.custom_filter = Some(filter.into());
        self
    }

    pub fn as_str(&self) -> &str {
        &self.action
    }

    pub fn filter(&self) -> BoxFilter {
        let mut parts = self.access.parts();
        parts.push(callback_data(&self.action));
        and_all(parts)
    }

    /// Callback data for a button triggering this action with `params`.
    pub fn pack<I, K, V>(&self, params: I) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        ::callback_data::pack(&self.action, params)
    }

    /// Callback data without parameters.
    pub fn data(&self) -> String {
        self.pack(None::<(&str, &str)>)
    }
}

macro_rules! descriptor_ops {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($ty)).field(&self.as_str()).finish()
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<&$ty> for BoxFilter {
            fn from(descriptor: &$ty) -> Self {
                descriptor.filter()
            }
        }

        impl From<$ty> for BoxFilter {
            fn from(descriptor: $ty) -> Self {
                descriptor.filter()
            }
        }

        impl<T: Into<BoxFilter>> BitAnd<T> for &$ty {
            type Output = BoxFilter;

            fn bitand(self, rhs: T) -> BoxFilter {
                self.filter() & rhs
            }
        }

        impl<T: Into<BoxFilter>> BitOr<T> for &$ty {
            type Output = BoxFilter;

            fn bitor(self, rhs: T) -> BoxFilter {
                self.filter() | rhs
            }
        }

        impl Not for &$ty {
            type Output = BoxFilter;

            fn not(self) -> BoxFilter {
                !self.filter()
            }
        }
    };
}

descriptor_ops!(ChatCommand);
descriptor_ops!(CallbackAction);

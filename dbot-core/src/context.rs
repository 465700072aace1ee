//! Per-request context handed to every filter and middleware call.

use serde::{Deserialize, Serialize};

/// Session data resolved for the sender by application code before dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Bot-level administrator flag (not chat admin rights).
    pub is_admin: Option<bool>,
    /// Current conversation state; `None` means no state.
    pub state: Option<String>,
}

impl Bucket {
    pub fn admin() -> Self {
        Self {
            is_admin: Some(true),
            state: None,
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Immutable request context: the sender's [`Bucket`] (if any) and client data
/// such as the bot username used when matching `/cmd@botname`.
#[derive(Debug, Clone, Default)]
pub struct Context {
    bucket: Option<Bucket>,
    bot_username: Option<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket(mut self, bucket: Bucket) -> Self {
        self.bucket = Some(bucket);
        self
    }

    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    pub fn bucket(&self) -> Option<&Bucket> {
        self.bucket.as_ref()
    }

    pub fn bot_username(&self) -> Option<&str> {
        self.bot_username.as_deref()
    }

    /// False when the bucket or its admin flag is missing.
    pub fn is_admin(&self) -> bool {
        self.bucket
            .as_ref()
            .and_then(|b| b.is_admin)
            .unwrap_or(false)
    }

    /// Conversation state; a missing bucket reads as no state.
    pub fn user_state(&self) -> Option<&str> {
        self.bucket.as_ref().and_then(|b| b.state.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_bucket_defaults() {
        let ctx = Context::new();
        assert!(!ctx.is_admin());
        assert_eq!(ctx.user_state(), None);
    }

    #[test]
    fn test_bucket_fields() {
        let ctx = Context::new().with_bucket(Bucket::admin().with_state("awaiting_name"));
        assert!(ctx.is_admin());
        assert_eq!(ctx.user_state(), Some("awaiting_name"));

        let ctx = Context::new().with_bucket(Bucket::default());
        assert!(!ctx.is_admin());
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{
    Bot, Context, DbotError, HandlerResponse, Middleware, Next, Result, SendOptions, Update,
};
use filters::{admin, BoxFilter, Filter};
use tracing::{debug, instrument, warn};

/// Reports handler errors to administrators.
///
/// `Continue` and `Stop` are ordinary results and pass through untouched. On error the
/// admin check decides whether the sender sees the error text; the original error is
/// returned either way.
pub struct UnhandledErrorMiddleware {
    bot: Arc<dyn Bot>,
    admin_check: BoxFilter,
}

impl UnhandledErrorMiddleware {
    /// Uses the bucket admin flag as the admin check.
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self::with_admin_check(bot, admin())
    }

    pub fn with_admin_check(bot: Arc<dyn Bot>, admin_check: impl Into<BoxFilter>) -> Self {
        Self {
            bot,
            admin_check: admin_check.into(),
        }
    }

    async fn report(&self, update: &Update, err: &DbotError) {
        let Some(target) = update.reply_target() else {
            debug!(
                target: "unhandled_error_middleware",
                kind = %update.kind(),
                "Update has no chat to report the error to"
            );
            return;
        };
        let text = error_text(err);
        if let Err(send_err) = self
            .bot
            .reply_to(target, &text, SendOptions::without_link_preview())
            .await
        {
            warn!(
                target: "unhandled_error_middleware",
                chat_id = target.chat.id,
                error = %send_err,
                "Failed to report unhandled error"
            );
        }
    }
}

#[async_trait]
impl Middleware for UnhandledErrorMiddleware {
    #[instrument(skip_all)]
    async fn handle(&self, ctx: &Context, update: &Update, next: Next<'_>) -> Result<HandlerResponse> {
        let err = match next.run(ctx, update).await {
            Ok(response) => return Ok(response),
            Err(err) => err,
        };

        if !self.admin_check.check(ctx, update) {
            debug!(
                target: "unhandled_error_middleware",
                user_id = update.user().id,
                "User is not admin. Skipping displaying an error"
            );
            return Err(err);
        }

        self.report(update, &err).await;
        Err(err)
    }
}

/// Text sent to an administrator for an unhandled error.
pub fn error_text(err: &DbotError) -> String {
    format!("Unhandled exception!\n{}: {}", err.kind(), err)
}

/// Returns a constructor for [`UnhandledErrorMiddleware`] pre-bound to `admin_check`.
pub fn unhandled_error_middleware_factory(
    admin_check: impl Into<BoxFilter>,
) -> impl Fn(Arc<dyn Bot>) -> UnhandledErrorMiddleware + Clone + Send + Sync {
    let admin_check = admin_check.into();
    move |bot| UnhandledErrorMiddleware::with_admin_check(bot, admin_check.clone())
}

use async_trait::async_trait;
use dbot_core::{Context, HandlerResponse, Middleware, Next, Result, Update};
use filters::slash_command_tokens;
use tracing::{info, instrument};

/// Logs a one-line summary of every update, then hands it on.
pub struct LogMiddleware;

#[async_trait]
impl Middleware for LogMiddleware {
    #[instrument(skip_all)]
    async fn handle(&self, ctx: &Context, update: &Update, next: Next<'_>) -> Result<HandlerResponse> {
        let record = describe_update(update);
        info!(
            target: "log_middleware",
            user_id = update.user().id,
            "[{}] {}",
            update.kind(),
            record
        );
        next.run(ctx, update).await
    }
}

/// `"; "`-joined summary: callback data, inline query, or message command and first
/// attachment; always ends with the sender id and deep link.
///
/// Only `/` commands are logged as `Command:`; custom-prefix and bare-word commands are not.
pub fn describe_update(update: &Update) -> String {
    let mut logs = Vec::new();

    match update {
        Update::CallbackQuery(query) => {
            logs.push(format!("Data: {}", query.data.as_deref().unwrap_or_default()));
        }
        Update::InlineQuery(query) => {
            logs.push(format!("Query: {}", query.query));
        }
        Update::Message(message) => {
            if let Some(tokens) = message.text_or_caption().and_then(slash_command_tokens) {
                logs.push(format!("Command: /{}", tokens.join(" ")));
            }
            if let Some(media) = message.primary_media() {
                logs.push(format!("{}: {}", media.kind.label(), media.file_id));
            }
        }
    }

    let user = update.user();
    let mut user_log = format!("User ID: {}", user.id);
    if let Some(link) = user.deep_link() {
        user_log.push_str(&format!(" ({})", link));
    }
    logs.push(user_log);

    logs.join("; ")
}

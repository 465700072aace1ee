use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

impl DbotError {
    /// Short error name shown to administrators by the unhandled-error middleware.
    pub fn kind(&self) -> &'static str {
        match self {
            DbotError::Bot(_) => "BotError",
            DbotError::Handler(e) => e.kind(),
        }
    }
}

/// Errors raised by application handlers.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("{0}")]
    Failed(String),
}

impl HandlerError {
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerError::InvalidCommand(_) => "InvalidCommand",
            HandlerError::Failed(_) => "HandlerError",
        }
    }
}

pub type Result<T> = std::result::Result<T, DbotError>;

//! Middleware for the handler chain: update logging and unhandled-error reporting.

mod log_middleware;
mod unhandled_error;

pub use log_middleware::{describe_update, LogMiddleware};
pub use unhandled_error::{error_text, unhandled_error_middleware_factory, UnhandledErrorMiddleware};

#[cfg(test)]
mod test;

//! Handler and middleware traits and the [`Next`] continuation that links them.

use std::sync::Arc;

use async_trait::async_trait;

use crate::context::Context;
use crate::error::Result;
use crate::types::{HandlerResponse, Update};

/// Processes an update. Returning `Continue` lets the next matching handler run.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, ctx: &Context, update: &Update) -> Result<HandlerResponse>;
}

/// Wraps the rest of the chain. Implementations must call `next.run` and hand its
/// `Ok` result back unchanged unless they deliberately short-circuit.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, ctx: &Context, update: &Update, next: Next<'_>) -> Result<HandlerResponse>;
}

/// The remaining middleware plus the innermost handler.
pub struct Next<'a> {
    middleware: &'a [Arc<dyn Middleware>],
    endpoint: &'a dyn Handler,
}

impl<'a> Next<'a> {
    pub fn new(middleware: &'a [Arc<dyn Middleware>], endpoint: &'a dyn Handler) -> Self {
        Self {
            middleware,
            endpoint,
        }
    }

    /// Runs the next middleware, or the endpoint once the stack is exhausted.
    pub async fn run(self, ctx: &Context, update: &Update) -> Result<HandlerResponse> {
        match self.middleware.split_first() {
            Some((current, rest)) => {
                let next = Next {
                    middleware: rest,
                    endpoint: self.endpoint,
                };
                current.handle(ctx, update, next).await
            }
            None => self.endpoint.handle(ctx, update).await,
        }
    }
}


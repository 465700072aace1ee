//! Minimal in-process chain: middleware wrapped around a list of filtered handlers.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Context, Handler, HandlerResponse, Middleware, Next, Result, Update};
use filters::{BoxFilter, Filter};
use tracing::{debug, info, instrument};

#[derive(Clone)]
struct Route {
    filter: BoxFilter,
    handler: Arc<dyn Handler>,
}

/// Innermost step of the chain: the first matching handler runs; `Continue` moves
/// on to the next matching one.
struct Routes<'a>(&'a [Route]);

#[async_trait]
impl<'a> Handler for Routes<'a> {
    async fn handle(&self, ctx: &Context, update: &Update) -> Result<HandlerResponse> {
        for route in self.0 {
            if !route.filter.check(ctx, update) {
                continue;
            }
            let handler_name = std::any::type_name_of_val(route.handler.as_ref());
            let response = route.handler.handle(ctx, update).await?;
            debug!(
                handler = %handler_name,
                filter = %route.filter.name(),
                response = ?response,
                "Handler processed"
            );
            match response {
                HandlerResponse::Continue => continue,
                HandlerResponse::Handled | HandlerResponse::Stop => return Ok(response),
            }
        }
        Ok(HandlerResponse::Continue)
    }
}

#[derive(Clone, Default)]
pub struct HandlerChain {
    middleware: Vec<Arc<dyn Middleware>>,
    routes: Vec<Route>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Middleware runs in registration order; the first added is outermost.
    pub fn add_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middleware.push(middleware);
        self
    }

    pub fn add_handler(mut self, filter: impl Into<BoxFilter>, handler: Arc<dyn Handler>) -> Self {
        self.routes.push(Route {
            filter: filter.into(),
            handler,
        });
        self
    }

    #[instrument(skip(self, ctx, update), fields(kind = %update.kind(), user_id = update.user().id))]
    pub async fn handle(&self, ctx: &Context, update: &Update) -> Result<HandlerResponse> {
        info!(
            middleware = self.middleware.len(),
            handlers = self.routes.len(),
            "step: handler_chain started"
        );
        let routes = Routes(&self.routes);
        let response = Next::new(&self.middleware, &routes).run(ctx, update).await?;
        info!(response = ?response, "step: handler_chain finished");
        Ok(response)
    }
}

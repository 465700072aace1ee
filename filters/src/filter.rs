//! The [`Filter`] trait and its boolean composition.
//!
//! Filters are stateless predicates over an update and the request [`Context`]. Any
//! configuration is captured when the filter is built. [`BoxFilter`] erases the type so
//! filters combine with `&`, `|` and `!`; evaluation is left to right and short-circuits.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use dbot_core::{Context, Update};

/// A predicate deciding whether a handler should see an update. Must not panic.
pub trait Filter: Send + Sync {
    fn check(&self, ctx: &Context, update: &Update) -> bool;

    /// Name used in debug output.
    fn name(&self) -> &str {
        "Filter"
    }
}

/// Type-erased, cheaply cloneable filter.
#[derive(Clone)]
pub struct BoxFilter(Arc<dyn Filter>);

impl BoxFilter {
    pub fn new<F: Filter + 'static>(filter: F) -> Self {
        Self(Arc::new(filter))
    }

    pub fn and(self, other: impl Into<BoxFilter>) -> BoxFilter {
        BoxFilter::new(And(self, other.into()))
    }

    pub fn or(self, other: impl Into<BoxFilter>) -> BoxFilter {
        BoxFilter::new(Or(self, other.into()))
    }

    pub fn negate(self) -> BoxFilter {
        BoxFilter::new(Invert(self))
    }
}

impl Filter for BoxFilter {
    fn check(&self, ctx: &Context, update: &Update) -> bool {
        self.0.check(ctx, update)
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

impl fmt::Debug for BoxFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BoxFilter").field(&self.0.name()).finish()
    }
}

struct And(BoxFilter, BoxFilter);

impl Filter for And {
    fn check(&self, ctx: &Context, update: &Update) -> bool {
        self.0.check(ctx, update) && self.1.check(ctx, update)
    }

    fn name(&self) -> &str {
        "And"
    }
}

struct Or(BoxFilter, BoxFilter);

impl Filter for Or {
    fn check(&self, ctx: &Context, update: &Update) -> bool {
        self.0.check(ctx, update) || self.1.check(ctx, update)
    }

    fn name(&self) -> &str {
        "Or"
    }
}

struct Invert(BoxFilter);

impl Filter for Invert {
    fn check(&self, ctx: &Context, update: &Update) -> bool {
        !self.0.check(ctx, update)
    }

    fn name(&self) -> &str {
        "Invert"
    }
}

/// Filter backed by a closure, see [`create`].
pub struct FnFilter<F> {
    name: &'static str,
    f: F,
}

impl<F> Filter for FnFilter<F>
where
    F: Fn(&Context, &Update) -> bool + Send + Sync,
{
    fn check(&self, ctx: &Context, update: &Update) -> bool {
        (self.f)(ctx, update)
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Builds a named filter from a closure.
pub fn create<F>(name: &'static str, f: F) -> BoxFilter
where
    F: Fn(&Context, &Update) -> bool + Send + Sync + 'static,
{
    BoxFilter::new(FnFilter { name, f })
}

impl<T: Into<BoxFilter>> BitAnd<T> for BoxFilter {
    type Output = BoxFilter;

    fn bitand(self, rhs: T) -> BoxFilter {
        self.and(rhs)
    }
}

impl<T: Into<BoxFilter>> BitOr<T> for BoxFilter {
    type Output = BoxFilter;

    fn bitor(self, rhs: T) -> BoxFilter {
        self.or(rhs)
    }
}

impl Not for BoxFilter {
    type Output = BoxFilter;

    fn not(self) -> BoxFilter {
        self.negate()
    }
}

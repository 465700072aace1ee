//! Unit test module
//!
//! Middleware unit tests live here, separate from source files.
//! Tests drive middleware through a `Next` built over a recording endpoint.

mod common;

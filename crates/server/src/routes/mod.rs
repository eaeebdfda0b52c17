//! HTTP route handlers.

mod health;

pub use health::*;

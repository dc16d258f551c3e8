//! JSON API server for the advisor.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;

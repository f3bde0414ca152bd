//! HTTP API over the shortest-path engines.

pub mod api;
pub mod models;
pub mod server;

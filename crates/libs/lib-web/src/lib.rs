//! # Web Library
//!
//! HTTP handlers, middleware, routes and services for the swap action server.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod services;

pub use server::{create_router, start_server, AppState};

//! # Blog API Server
//!
//! Actix-web HTTP server exposing CRUD over blog posts. The binary in
//! `main.rs` is a thin wrapper; integration tests drive [`startup::Application`]
//! directly.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod startup;
pub mod state;
pub mod telemetry;

//! # Blog Shared
//!
//! Wire types shared between the server and its clients (including the
//! integration test harness).

pub mod dto;
pub mod response;

pub use response::ErrorResponse;

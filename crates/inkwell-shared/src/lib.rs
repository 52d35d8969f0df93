//! # Inkwell Shared
//!
//! Request/response types shared between the HTTP surface and its clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};

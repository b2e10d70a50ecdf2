//! # Quill Shared
//!
//! Request/response types shared between the API server and the browser
//! frontend.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;

/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod auth;
pub mod client;
pub mod error;
pub mod items;
pub mod lists;

pub use error::{Result, TodoApiError};

pub use client::{ClientConfig, DEFAULT_BASE_URL, TodoClient};

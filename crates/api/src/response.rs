//! Shared response types for API handlers.
//!
//! Collections are returned as bare JSON arrays. Mutations that have no
//! entity to echo back answer with [`MessageResponse`].

use serde::Serialize;

/// `{ "message": "..." }` acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

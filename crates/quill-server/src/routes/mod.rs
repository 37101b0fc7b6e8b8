//! Route handlers

pub mod auth;
pub mod users;

use serde::Serialize;

/// Generic acknowledgement body
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: &'static str,
}

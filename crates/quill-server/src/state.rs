//! Shared application state

use std::sync::Arc;

use quill_core::{AuthService, CookieSettings, SqliteUserStore};

/// State handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService<SqliteUserStore>>,
    pub cookies: CookieSettings,
}

impl AppState {
    pub fn new(auth: AuthService<SqliteUserStore>, cookies: CookieSettings) -> Self {
        Self {
            auth: Arc::new(auth),
            cookies,
        }
    }
}

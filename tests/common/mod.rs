//! Common test utilities for integration tests

use std::path::PathBuf;

use readvault::auth::MemorySessionStore;
use readvault::{AppState, config};

/// Test configuration with the default seed fixtures
pub fn test_config() -> config::AppConfig {
    config::AppConfig {
        instance: config::InstanceConfig {
            name: "ReadVault Test".to_string(),
            admin_email: "admin@readvault.com".to_string(),
        },
        session: config::SessionConfig {
            // Unused by the memory store
            path: PathBuf::from("unused/session.json"),
        },
        chat: config::ChatConfig { seed: true },
        logging: config::LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
    }
}

/// Build an application state backed by an in-memory session store
pub fn test_state() -> AppState {
    AppState::with_session_store(test_config(), Box::new(MemorySessionStore::new())).unwrap()
}

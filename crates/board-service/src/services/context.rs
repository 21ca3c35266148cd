//! Service context - dependency container for services
//!
//! Holds the change-log source and the settings services read.

use std::sync::Arc;

use board_common::{AppConfig, AppError, FeedConfig};
use board_core::traits::ChangeLogSource;

use super::error::ServiceResult;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    change_log: Arc<dyn ChangeLogSource>,
    feed: FeedConfig,
}

impl ServiceContext {
    pub fn new(change_log: Arc<dyn ChangeLogSource>, feed: FeedConfig) -> Self {
        Self { change_log, feed }
    }

    /// Build from loaded application configuration
    pub fn from_config(change_log: Arc<dyn ChangeLogSource>, config: &AppConfig) -> Self {
        Self::new(change_log, config.feed)
    }

    /// Load configuration from the environment and build the context
    pub fn from_env(change_log: Arc<dyn ChangeLogSource>) -> ServiceResult<Self> {
        let config = AppConfig::from_env().map_err(AppError::from)?;
        Ok(Self::from_config(change_log, &config))
    }

    // === Repositories ===

    /// Get the change-log source
    pub fn change_log(&self) -> &dyn ChangeLogSource {
        self.change_log.as_ref()
    }

    // === Settings ===

    pub fn feed_config(&self) -> &FeedConfig {
        &self.feed
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("change_log", &"dyn ChangeLogSource")
            .field("feed", &self.feed)
            .finish()
    }
}

//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::Repository;
use crate::services::RecordService;
use crate::utils::{Clock, SystemClock};

#[derive(Clone)]
pub struct AppState {
    pub repository: Repository,
    pub clock: Arc<dyn Clock>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(repository: Repository, config: EnvironmentConfig) -> Self {
        Self::with_clock(repository, config, Arc::new(SystemClock))
    }

    pub fn with_clock(repository: Repository, config: EnvironmentConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            config,
        }
    }

    /// Camino de guardado compartido por todos los servicios
    pub fn records(&self) -> RecordService {
        RecordService::new(self.repository.clone(), self.clock.clone())
    }
}

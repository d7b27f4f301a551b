//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::application::services::AlgorithmService;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::{InfraError, InfraResult};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    pub algorithms: AlgorithmService,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let algorithms = AlgorithmService::new(Arc::clone(&fs), Arc::clone(&settings));

        Self {
            settings,
            fs,
            algorithms,
        }
    }

    /// Write the config template to `path` unless a file already exists there.
    ///
    /// Returns `false` when an existing file was left untouched.
    pub fn write_config_template(&self, path: &Path) -> InfraResult<bool> {
        if self.fs.exists(path) {
            debug!("config exists, not overwriting: {}", path.display());
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            self.fs
                .create_dir_all(parent)
                .map_err(|e| InfraError::io(format!("create {}", parent.display()), e))?;
        }
        self.fs
            .write(path, &Settings::template())
            .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
        Ok(true)
    }
}

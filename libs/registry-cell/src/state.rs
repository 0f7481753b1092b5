use std::sync::Arc;

use tokio::sync::RwLock;

use shared_config::AppConfig;

use crate::registry::ClinicRegistry;

pub struct ClinicState {
    pub registry: RwLock<ClinicRegistry>,
}

pub type SharedState = Arc<ClinicState>;

impl ClinicState {
    pub fn new(registry: ClinicRegistry) -> SharedState {
        Arc::new(Self {
            registry: RwLock::new(registry),
        })
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<SharedState> {
        let registry = ClinicRegistry::from_config(config)?;
        Ok(Self::new(registry))
    }
}

use shared_config::AppConfig;
use shared_gateway::ClinicApiClient;

use crate::guard::SubmitGuard;
use crate::store::ClinicStore;

/// Shared state handed to every router as `Arc<AdminState>`.
pub struct AdminState {
    pub config: AppConfig,
    pub api: ClinicApiClient,
    pub store: ClinicStore,
    pub submit_guard: SubmitGuard,
}

impl AdminState {
    pub fn new(config: AppConfig) -> Self {
        let api = ClinicApiClient::new(&config);
        Self {
            config,
            api,
            store: ClinicStore::new(),
            submit_guard: SubmitGuard::new(),
        }
    }
}

use alotame_api::AppState;
use alotame_application::use_cases::{
    GetAllowlistUseCase, QueryDomainUseCase, RunResolverCheckUseCase,
};
use alotame_domain::Config;
use alotame_infrastructure::allowlist::StaticAllowlistProvider;
use alotame_infrastructure::dns::DnsForwarder;
use std::sync::Arc;
use tracing::debug;

pub struct UseCases {
    pub run_check: Arc<RunResolverCheckUseCase>,
    pub get_allowlist: Arc<GetAllowlistUseCase>,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let forwarder = Arc::new(DnsForwarder::new());
        let query_domain = Arc::new(QueryDomainUseCase::new(
            forwarder,
            config.resolver_check.retry_policy(),
        ));
        let provider = Arc::new(StaticAllowlistProvider::sample());
        debug!(entries = provider.entry_count(), "Allowlist provider ready");

        Self {
            run_check: Arc::new(RunResolverCheckUseCase::new(query_domain)),
            get_allowlist: Arc::new(GetAllowlistUseCase::new(provider)),
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            get_allowlist: self.get_allowlist.clone(),
        }
    }
}

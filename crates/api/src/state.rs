use alotame_application::use_cases::GetAllowlistUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_allowlist: Arc<GetAllowlistUseCase>,
}

use std::sync::Arc;

use backoffice_core::application::BackofficeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BackofficeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BackofficeService) -> Self {
        Self { args, service }
    }
}

use std::sync::Arc;

use forkframe_core::application::ForkframeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: Arc<ForkframeService>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: ForkframeService) -> Self {
        Self {
            args,
            service: Arc::new(service),
        }
    }
}

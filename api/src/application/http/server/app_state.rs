use std::sync::Arc;

use morsel_core::application::MorselService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MorselService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MorselService) -> Self {
        Self { args, service }
    }
}

use std::sync::Arc;

use ferrischef_core::application::FerrisChefService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FerrisChefService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FerrisChefService) -> Self {
        Self { args, service }
    }
}

use std::sync::Arc;
use ms_analysis::MediaSignalEngine;

pub struct AppState {
    pub engine: Arc<MediaSignalEngine>,
}

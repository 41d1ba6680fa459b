use std::sync::Arc;

use tokio::sync::Mutex;

use crate::context::AppContext;

/// Shared handle to the single context. The mutex serializes every
/// operation, the same way a UI event loop would.
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<Mutex<AppContext>>,
}

impl AppState {
    pub fn new(context: AppContext) -> Self {
        Self {
            context: Arc::new(Mutex::new(context)),
        }
    }
}

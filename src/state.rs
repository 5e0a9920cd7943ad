use std::sync::Arc;

use crate::repository::CmsRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CmsRepository>,
}

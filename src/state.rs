use crate::api::ApiClient;
use crate::models::AppData;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            data: Arc::new(Mutex::new(AppData::default())),
        }
    }
}

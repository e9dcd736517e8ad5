use crate::client::WaterClient;
use crate::models::Rendered;
use crate::page::Page;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub client: WaterClient,
    pub page: Arc<Mutex<Page>>,
}

impl AppState {
    pub fn new(client: WaterClient) -> Self {
        Self {
            client,
            page: Arc::new(Mutex::new(Page::default())),
        }
    }

    pub async fn show(&self, rendered: Rendered) {
        self.page.lock().await.apply(rendered);
    }
}

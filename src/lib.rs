pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod page;
pub mod render;
pub mod state;
pub mod ui;

pub use app::router;
pub use client::WaterClient;
pub use config::{ClientConfig, resolve_port};
pub use errors::ClientError;
pub use models::{Region, Rendered, UpdateOutcome, UpdateReading, ViewRequest, WaterReading, WaterReport};
pub use page::Page;
pub use state::AppState;

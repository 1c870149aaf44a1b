use thiserror::Error;

mod loader;
pub mod models;

pub use loader::*;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Render settings error: {0}")]
    Settings(#[from] crate::render::SettingsError),
}

pub mod image_client;
pub mod store_client;

pub use image_client::{ImageClient, ImageFetcher};
pub use store_client::WorksheetStore;

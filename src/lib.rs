pub mod config;
pub mod helper;
pub mod imgur;
pub mod service;

#[cfg(test)]
mod test_server;

pub use config::{GalleryConfig, Section, Sort, Window};
pub use imgur::{
    endpoint::build_gallery_url,
    model::{GalleryResponse, ImageEntry, ImageLink},
    FetchError,
};
pub use service::ApiService;

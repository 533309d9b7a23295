use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryResponse {
    pub data: Vec<ImageEntry>,
}

/// A gallery post. `images` is absent for posts without image variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub title: String,
    pub datetime: f64,
    pub images: Option<Vec<ImageLink>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLink {
    pub link: Option<String>,
}

impl ImageEntry {
    /// Links of the image variants that have one, in response order.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .flatten()
            .filter_map(|image| image.link.as_deref())
    }
}

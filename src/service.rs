use bytes::Bytes;
use reqwest::Client;
use url::Url;

use crate::{
    config::GalleryConfig,
    imgur::{
        download::ImageDownloader, endpoint::build_gallery_url, gallery::GalleryFetcher,
        model::ImageEntry, FetchError,
    },
};

/// Gallery searches and image downloads over one shared HTTP client.
pub struct ApiService {
    config: GalleryConfig,
    gallery: GalleryFetcher,
    downloader: ImageDownloader,
}

impl ApiService {
    pub fn new(config: GalleryConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: GalleryConfig) -> Self {
        Self {
            gallery: GalleryFetcher::new(client.clone(), config.client_id.clone()),
            downloader: ImageDownloader::new(client),
            config,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn gallery_url(&self, search_text: Option<&str>) -> Option<Url> {
        build_gallery_url(&self.config, search_text)
    }

    /// Searches the gallery, or lists the configured section when there is no search text.
    pub async fn gallery_request(
        &self,
        search_text: Option<&str>,
    ) -> Result<Vec<ImageEntry>, FetchError> {
        self.request_gallery_images(self.gallery_url(search_text))
            .await
    }

    pub async fn request_gallery_images(
        &self,
        url: Option<Url>,
    ) -> Result<Vec<ImageEntry>, FetchError> {
        self.gallery.request_gallery_images(url).await
    }

    pub async fn download_image(&self, url: &str) -> Result<Bytes, FetchError> {
        self.downloader.download_image(url).await
    }

    pub fn downloads_in_flight(&self) -> usize {
        self.downloader.in_flight()
    }
}
